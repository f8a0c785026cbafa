//! Key derivation and collision resolution.
//!
//! A synthesized row's composite key may already be taken. The resolver
//! re-samples only the table's mutable key component (for residents, `ssn`)
//! until the key is free, then writes. Every other field, including derived
//! ones, is left as generated.

use crate::error::LoadError;
use kvgen_core::{CompositeKey, FieldValue, Row, TableDescriptor};
use kvgen_generator::{RecordSynthesizer, Sampler};
use kvgen_store::{TableStore, WriteMode, WriteOutcome};
use rand::{CryptoRng, RngCore};
use tracing::trace;

/// Upper bound on re-samples for one row.
///
/// The ssn domain has 10^9 values, so reaching this means the table is
/// saturated or the sampler is broken.
pub const MAX_KEY_RESAMPLES: u32 = 10_000;

/// The key a row was finally written under.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWrite {
    pub key: CompositeKey,
    pub outcome: WriteOutcome,
    pub resamples: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyResolver {
    max_resamples: u32,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(MAX_KEY_RESAMPLES)
    }
}

impl KeyResolver {
    pub fn new(max_resamples: u32) -> Self {
        Self { max_resamples }
    }

    /// Find a free key for `row`, then write it with `mode`.
    ///
    /// `row` is updated in place with any re-sampled key component. A
    /// concurrent writer can still take the key between the check and the
    /// write; with `InsertIfAbsent` that shows up as `SkippedDuplicate`.
    pub async fn resolve_and_write<S, R>(
        &self,
        store: &S,
        synth: &RecordSynthesizer,
        sampler: &mut Sampler<R>,
        table: &TableDescriptor,
        row: &mut Row,
        mode: WriteMode,
    ) -> Result<ResolvedWrite, LoadError>
    where
        S: TableStore + ?Sized,
        R: RngCore + CryptoRng,
    {
        let mut key = row.primary_key(table)?;
        let mut resamples = 0u32;

        while store.exists(table, &key).await? {
            let field = table
                .mutable_key_field()
                .ok_or_else(|| LoadError::NoMutableKey(table.qualified_name()))?;
            if resamples >= self.max_resamples {
                return Err(LoadError::KeySpaceExhausted {
                    table: table.qualified_name(),
                    attempts: resamples,
                });
            }
            trace!("Key {key} taken in {}, re-sampling {field}", table.qualified_name());

            let component = synth.resample_key_component(table, field, sampler)?;
            row.set(field, FieldValue::from(component));
            key = row.primary_key(table)?;
            resamples += 1;
        }

        let outcome = store.write(table, row, mode).await?;
        Ok(ResolvedWrite {
            key,
            outcome,
            resamples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvgen_core::{Catalog, KeyComponent};
    use kvgen_store::MemoryStore;

    async fn setup() -> (Catalog, RecordSynthesizer, MemoryStore) {
        let catalog = Catalog::standard().unwrap();
        let store = MemoryStore::new();
        for statement in catalog.setup_statements() {
            store.execute(statement).await.unwrap();
        }
        (catalog, RecordSynthesizer::standard().unwrap(), store)
    }

    fn parent_key(id: i32) -> CompositeKey {
        CompositeKey::new(vec![KeyComponent::Integer(id)])
    }

    #[tokio::test]
    async fn test_free_key_written_without_resample() {
        let (catalog, synth, store) = setup().await;
        let mut sampler = Sampler::seeded(42);
        let resolver = KeyResolver::default();

        let mut row = synth
            .child_row(&catalog.residents, &mut sampler, &parent_key(3))
            .unwrap();
        let first_key = row.primary_key(&catalog.residents).unwrap();

        let resolved = resolver
            .resolve_and_write(
                &store,
                &synth,
                &mut sampler,
                &catalog.residents,
                &mut row,
                WriteMode::InsertIfAbsent,
            )
            .await
            .unwrap();
        assert_eq!(resolved.resamples, 0);
        assert_eq!(resolved.key, first_key);
        assert_eq!(resolved.outcome, WriteOutcome::Written);
    }

    #[tokio::test]
    async fn test_collision_resamples_only_ssn() {
        let (catalog, synth, store) = setup().await;
        let mut sampler = Sampler::seeded(7);
        let resolver = KeyResolver::default();
        let table = &catalog.residents;

        let mut first = synth.child_row(table, &mut sampler, &parent_key(1)).unwrap();
        let mut second = first.clone();
        resolver
            .resolve_and_write(&store, &synth, &mut sampler, table, &mut first, WriteMode::InsertIfAbsent)
            .await
            .unwrap();

        let resolved = resolver
            .resolve_and_write(&store, &synth, &mut sampler, table, &mut second, WriteMode::InsertIfAbsent)
            .await
            .unwrap();
        assert!(resolved.resamples >= 1);
        assert_eq!(resolved.outcome, WriteOutcome::Written);
        assert_ne!(resolved.key, first.primary_key(table).unwrap());

        // Only the ssn moved.
        for (name, value) in &first.fields {
            if name != "ssn" {
                assert_eq!(second.get(name), Some(value), "field {name} changed");
            }
        }
        assert_eq!(store.row_count("countries.residents").await, Some(2));
    }

    #[tokio::test]
    async fn test_exhausted_resamples() {
        let (catalog, synth, store) = setup().await;
        let mut sampler = Sampler::seeded(1);
        let table = &catalog.residents;

        let mut row = synth.child_row(table, &mut sampler, &parent_key(1)).unwrap();
        store.write(table, &row, WriteMode::Insert).await.unwrap();

        let err = KeyResolver::new(0)
            .resolve_and_write(&store, &synth, &mut sampler, table, &mut row, WriteMode::InsertIfAbsent)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::KeySpaceExhausted { attempts: 0, .. }));
    }

    #[tokio::test]
    async fn test_parent_table_has_no_mutable_key() {
        let (catalog, synth, store) = setup().await;
        let mut sampler = Sampler::seeded(1);
        let table = &catalog.countries;

        let mut row = synth.parent_row(table, 1).unwrap();
        store.write(table, &row, WriteMode::Upsert).await.unwrap();

        let err = KeyResolver::default()
            .resolve_and_write(&store, &synth, &mut sampler, table, &mut row, WriteMode::InsertIfAbsent)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::NoMutableKey(_)));
    }
}
