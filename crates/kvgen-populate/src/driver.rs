//! Hierarchical load driver.
//!
//! A run moves through fixed phases:
//!
//! ```text
//! Idle ──► [Teardown] ──► ParentLoad ──► ChildLoad ──► Report ──► Done
//! ```
//!
//! Teardown is optional. The parent phase finishes before any child row is
//! synthesized, since children sample their parent key from rows already in
//! the store.

use crate::error::LoadError;
use crate::metrics::{LoadReport, PhaseMetrics};
use crate::resolver::KeyResolver;
use futures::TryStreamExt;
use kvgen_core::json::row_to_json;
use kvgen_core::{Catalog, CompositeKey, TableDescriptor};
use kvgen_generator::{RecordSynthesizer, Sampler};
use kvgen_store::{DeleteOutcome, TableStore, WriteMode, WriteOutcome};
use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const PROGRESS_INTERVAL: u64 = 10_000;

/// Phase of a load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Teardown,
    ParentLoad,
    ChildLoad,
    Report,
    Done,
}

impl LoadPhase {
    /// Whether `next` may directly follow `self`.
    pub fn can_advance_to(self, next: LoadPhase) -> bool {
        use LoadPhase::*;
        matches!(
            (self, next),
            (Idle, Teardown)
                | (Idle, ParentLoad)
                | (Teardown, ParentLoad)
                | (ParentLoad, ChildLoad)
                | (ChildLoad, Report)
                | (Report, Done)
        )
    }
}

/// State of one run: phase history, timestamps and running counters.
///
/// The clock starts when the session leaves `Idle` and stops on `Done`.
#[derive(Debug, Clone)]
pub struct LoadSession {
    phase: LoadPhase,
    history: Vec<LoadPhase>,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    report: LoadReport,
}

impl Default for LoadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadSession {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            history: vec![LoadPhase::Idle],
            started_at: None,
            finished_at: None,
            report: LoadReport::default(),
        }
    }

    /// Child rows requested for this run.
    pub fn target(&self) -> u64 {
        self.report.target
    }

    pub fn inserted(&self) -> u64 {
        self.report.inserted()
    }

    pub fn deleted(&self) -> u64 {
        self.report.deleted()
    }

    pub fn skipped(&self) -> u64 {
        self.report.skipped()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    /// Time since the session left `Idle`, frozen once it reaches `Done`.
    pub fn elapsed(&self) -> Option<Duration> {
        let start = self.started_at?;
        let end = self.finished_at.unwrap_or_else(Instant::now);
        Some(end.duration_since(start))
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Every phase entered so far, starting with `Idle`.
    pub fn history(&self) -> &[LoadPhase] {
        &self.history
    }

    pub fn advance(&mut self, next: LoadPhase) -> Result<(), LoadError> {
        if !self.phase.can_advance_to(next) {
            return Err(LoadError::PhaseOrder {
                from: self.phase,
                to: next,
            });
        }
        debug!("Load phase {:?} -> {:?}", self.phase, next);
        let now = Instant::now();
        if self.phase == LoadPhase::Idle {
            self.started_at = Some(now);
        }
        if next == LoadPhase::Done {
            self.finished_at = Some(now);
            self.report.total_duration = self.elapsed().unwrap_or_default();
        }
        self.phase = next;
        self.history.push(next);
        Ok(())
    }
}

/// What a run should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Child rows to create
    pub records: u64,
    /// Delete every existing row before loading
    pub delete_existing: bool,
    /// Log every row after loading
    pub display: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            records: 10,
            delete_existing: false,
            display: false,
        }
    }
}

/// Drives one load run against a store.
pub struct LoadDriver<'a, S: ?Sized, R = StdRng> {
    store: &'a S,
    catalog: &'a Catalog,
    synth: &'a RecordSynthesizer,
    sampler: Sampler<R>,
    resolver: KeyResolver,
    session: LoadSession,
}

impl<'a, S, R> LoadDriver<'a, S, R>
where
    S: TableStore + ?Sized,
    R: RngCore + CryptoRng,
{
    pub fn new(
        store: &'a S,
        catalog: &'a Catalog,
        synth: &'a RecordSynthesizer,
        sampler: Sampler<R>,
    ) -> Self {
        Self {
            store,
            catalog,
            synth,
            sampler,
            resolver: KeyResolver::default(),
            session: LoadSession::new(),
        }
    }

    /// Replace the collision resolver.
    pub fn with_resolver(mut self, resolver: KeyResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn session(&self) -> &LoadSession {
        &self.session
    }

    /// Run every phase in order.
    pub async fn run(&mut self, options: &LoadOptions) -> Result<LoadReport, LoadError> {
        info!(
            "Loading {} records into {} (delete existing: {})",
            options.records,
            self.store.backend(),
            options.delete_existing
        );

        self.session.report.target = options.records;
        if options.delete_existing {
            self.delete_existing_data().await?;
        }
        self.load_parents().await?;
        self.load_children(options.records).await?;

        self.session.advance(LoadPhase::Report)?;
        let children = &self.session.report.children;
        info!(
            "{} new records added in {:?} ({:.2} rows/sec, {} skipped)",
            children.rows,
            children.duration,
            children.rows_per_second(),
            children.skipped
        );
        if options.display {
            self.display_rows().await?;
        }

        self.session.advance(LoadPhase::Done)?;
        Ok(self.session.report.clone())
    }

    /// Delete every row of the child table, then of the parent table.
    ///
    /// Returns `(children_deleted, parents_deleted)`.
    pub async fn delete_existing_data(&mut self) -> Result<(u64, u64), LoadError> {
        self.session.advance(LoadPhase::Teardown)?;
        let start_time = Instant::now();
        let children = self.delete_table(&self.catalog.residents).await?;
        let parents = self.delete_table(&self.catalog.countries).await?;

        let metrics = PhaseMetrics {
            rows: children + parents,
            duration: start_time.elapsed(),
            ..PhaseMetrics::default()
        };
        info!(
            "{} records deleted in {:?} ({:.2} rows/sec)",
            metrics.rows,
            metrics.duration,
            metrics.rows_per_second()
        );

        let report = &mut self.session.report;
        report.children_deleted = children;
        report.parents_deleted = parents;
        report.teardown = metrics;
        Ok((children, parents))
    }

    async fn delete_table(&self, table: &TableDescriptor) -> Result<u64, LoadError> {
        let start_time = Instant::now();
        let mut keys = self.store.keys(table).await?;
        let mut deleted = 0u64;

        while let Some(key) = keys.try_next().await? {
            if self.store.delete(table, &key).await? == DeleteOutcome::Deleted {
                deleted += 1;
                if deleted % PROGRESS_INTERVAL == 0 {
                    debug!("Deleted {deleted} rows from '{}'", table.qualified_name());
                }
            }
        }

        debug!(
            "Deleted {} rows from '{}' in {:?}",
            deleted,
            table.qualified_name(),
            start_time.elapsed()
        );
        Ok(deleted)
    }

    /// Upsert one parent row per country.
    pub async fn load_parents(&mut self) -> Result<PhaseMetrics, LoadError> {
        self.session.advance(LoadPhase::ParentLoad)?;
        let start_time = Instant::now();
        let table = &self.catalog.countries;
        let mut metrics = PhaseMetrics::default();

        for row in self.synth.parent_rows(table)? {
            match self.store.write(table, &row, WriteMode::Upsert).await? {
                WriteOutcome::Written => metrics.rows += 1,
                WriteOutcome::SkippedDuplicate => metrics.skipped += 1,
                WriteOutcome::Failed(reason) => {
                    return Err(LoadError::WriteFailed {
                        table: table.qualified_name(),
                        key: row.primary_key(table)?.to_string(),
                        reason,
                    })
                }
            }
        }

        metrics.duration = start_time.elapsed();
        info!(
            "Upserted {} rows into '{}' in {:?} ({:.2} rows/sec)",
            metrics.rows,
            table.qualified_name(),
            metrics.duration,
            metrics.rows_per_second()
        );
        self.session.report.parents = metrics.clone();
        Ok(metrics)
    }

    /// Insert `records` child rows, each under an existing parent.
    pub async fn load_children(&mut self, records: u64) -> Result<PhaseMetrics, LoadError> {
        self.session.advance(LoadPhase::ChildLoad)?;
        let start_time = Instant::now();
        let parents = &self.catalog.countries;
        let table = &self.catalog.residents;
        let mut metrics = PhaseMetrics::default();

        if records == 0 {
            metrics.duration = start_time.elapsed();
            self.session.report.children = metrics.clone();
            return Ok(metrics);
        }

        let parent_keys: Vec<CompositeKey> = self.store.keys(parents).await?.try_collect().await?;
        if parent_keys.is_empty() {
            return Err(LoadError::ParentTableEmpty(parents.qualified_name()));
        }
        debug!(
            "Sampling parent keys from {} rows of '{}'",
            parent_keys.len(),
            parents.qualified_name()
        );

        for i in 0..records {
            let parent_key = &parent_keys[self.sampler.sample_index(parent_keys.len())];
            let mut row = self.synth.child_row(table, &mut self.sampler, parent_key)?;

            let resolved = self
                .resolver
                .resolve_and_write(
                    self.store,
                    self.synth,
                    &mut self.sampler,
                    table,
                    &mut row,
                    WriteMode::InsertIfAbsent,
                )
                .await?;
            metrics.resamples += u64::from(resolved.resamples);

            match resolved.outcome {
                WriteOutcome::Written => metrics.rows += 1,
                WriteOutcome::SkippedDuplicate => {
                    debug!("Key {} taken concurrently, skipped", resolved.key);
                    metrics.skipped += 1;
                }
                WriteOutcome::Failed(reason) => {
                    return Err(LoadError::WriteFailed {
                        table: table.qualified_name(),
                        key: resolved.key.to_string(),
                        reason,
                    })
                }
            }

            if (i + 1) % PROGRESS_INTERVAL == 0 {
                debug!("Progress: {}/{} rows", i + 1, records);
            }
        }

        metrics.duration = start_time.elapsed();
        self.session.report.children = metrics.clone();
        Ok(metrics)
    }

    /// Log every row of both tables as JSON. Returns the number of rows.
    pub async fn display_rows(&self) -> Result<u64, LoadError> {
        let mut shown = 0u64;
        for table in [&self.catalog.countries, &self.catalog.residents] {
            let mut rows = self.store.rows(table).await?;
            while let Some(row) = rows.try_next().await? {
                info!("{}: {}", table.qualified_name(), row_to_json(&row));
                shown += 1;
            }
        }
        Ok(shown)
    }
}
