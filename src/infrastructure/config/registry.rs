//! Configuration Registry
//!
//! Namespace-keyed store for typed configuration values. Populated during
//! startup through `&mut self`, then shared read-only behind an `Arc`.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::api_key::{ApiKeyConfig, API_KEY_NAMESPACE};
use crate::domain::ConfigurationInitializationError;

type Entry = Arc<dyn Any + Send + Sync>;

/// Registry of configuration values indexed by namespace
#[derive(Default)]
pub struct ConfigRegistry {
    entries: BTreeMap<String, Entry>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value under a namespace
    pub fn register<T>(
        &mut self,
        namespace: impl Into<String>,
        value: T,
    ) -> Result<(), ConfigurationInitializationError>
    where
        T: Send + Sync + 'static,
    {
        self.register_shared(namespace, Arc::new(value))
    }

    /// Register an already shared value under a namespace
    ///
    /// A namespace can only be bound once.
    pub fn register_shared<T>(
        &mut self,
        namespace: impl Into<String>,
        value: Arc<T>,
    ) -> Result<(), ConfigurationInitializationError>
    where
        T: Send + Sync + 'static,
    {
        let namespace = namespace.into();

        if self.entries.contains_key(&namespace) {
            return Err(ConfigurationInitializationError::already_registered(
                namespace,
            ));
        }

        debug!(
            namespace = %namespace,
            value_type = std::any::type_name::<T>(),
            "Registering configuration namespace"
        );

        self.entries.insert(namespace, value);

        Ok(())
    }

    /// Get the value bound to a namespace
    ///
    /// Returns `None` if the namespace is unbound or holds a different type.
    pub fn get<T>(&self, namespace: &str) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.entries
            .get(namespace)
            .cloned()
            .and_then(|entry| entry.downcast::<T>().ok())
    }

    /// Check if a namespace is bound
    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    /// Bound namespaces, in sorted order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of bound namespaces
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The API key configuration, if registered
    pub fn api_key_config(&self) -> Option<Arc<ApiKeyConfig>> {
        self.get(API_KEY_NAMESPACE)
    }
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("namespaces", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
