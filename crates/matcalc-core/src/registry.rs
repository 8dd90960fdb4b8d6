//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::multiplier::{Algorithm, MatrixError, MatrixMultiplier, Multiplier};

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<Algorithm, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        let algorithm: Algorithm = name.parse()?;

        if let Some(mult) = self.cache.read().get(&algorithm) {
            return Ok(Arc::clone(mult));
        }

        let mult: Arc<dyn Multiplier> = Arc::new(MatrixMultiplier::new(algorithm.core()));
        self.cache.write().insert(algorithm, Arc::clone(&mult));
        Ok(mult)
    }

    fn available(&self) -> Vec<&str> {
        Algorithm::ALL.iter().map(|a| a.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_classical() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("classical").unwrap().name(), "Classical");
    }

    #[test]
    fn factory_creates_naive_dc() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("dc").unwrap().name(), "NaiveDC");
        assert_eq!(factory.get("naive").unwrap().name(), "NaiveDC");
    }

    #[test]
    fn factory_creates_strassen() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("strassen").unwrap().name(), "Strassen");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let m1 = factory.get("strassen").unwrap();
        let m2 = factory.get("strassen").unwrap();
        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn factory_caches_across_aliases() {
        let factory = DefaultFactory::new();
        let m1 = factory.get("dc").unwrap();
        let m2 = factory.get("naive-dc").unwrap();
        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(factory.get("winograd"), Err(MatrixError::Config(_))));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.available(), vec!["classical", "dc", "strassen"]);
    }
}
