//! Non-empty, ordered candidate pools.

/// Error type for pool construction.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// Pool has no candidates
    #[error("Reference pool '{0}' is empty")]
    Empty(String),

    /// Default make has no model list for a vehicle type
    #[error("Default make '{make}' has no model list for vehicle type '{vehicle_type}'")]
    MissingDefaultModels { make: String, vehicle_type: String },
}

/// An ordered, non-empty sequence of candidate values for one semantic field.
///
/// Indices are stable for the lifetime of the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    name: String,
    values: Vec<T>,
}

impl<T> Pool<T> {
    /// Create a pool, failing if `values` is empty.
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Result<Self, PoolError> {
        let name = name.into();
        if values.is_empty() {
            return Err(PoolError::Empty(name));
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: PartialEq> Pool<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl Pool<String> {
    /// Create a string pool from static text.
    pub fn of_strs(name: impl Into<String>, values: &[&str]) -> Result<Self, PoolError> {
        Self::new(name, values.iter().map(|s| s.to_string()).collect())
    }

    pub fn contains_str(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_rejected() {
        let result = Pool::<String>::new("last_names", Vec::new());
        assert!(matches!(result, Err(PoolError::Empty(name)) if name == "last_names"));
    }

    #[test]
    fn test_pool_order_is_stable() {
        let pool = Pool::of_strs("colors", &["red", "blue", "green"]).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(1).map(String::as_str), Some("blue"));
        assert!(pool.contains_str("green"));
        assert!(!pool.contains_str("purple"));
        let collected: Vec<&String> = pool.iter().collect();
        assert_eq!(collected[0], "red");
    }
}
