use alloc::{collections::BTreeMap, string::String, sync::Arc};
use core::any::type_name;

use crate::{any::Value, container::Container, errors::LookupErrorKind};

/// In-memory [`Container`] keyed by type names and plain names
#[derive(Clone, Default)]
pub struct Services {
    pub(crate) map: BTreeMap<String, Value>,
}

impl Services {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Registers `value` under the type name of `T`
    #[inline]
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<Value> {
        self.insert_rc(Arc::new(value))
    }

    #[inline]
    pub fn insert_rc<T: Send + Sync + 'static>(&mut self, value: Arc<T>) -> Option<Value> {
        self.map.insert(String::from(type_name::<T>()), value)
    }

    /// Registers an unsized service (a trait object) under the type name of `T`.
    ///
    /// # Examples
    /// ```rust
    /// use autowiring::Services;
    /// use std::sync::Arc;
    ///
    /// trait Mailer: Send + Sync {}
    ///
    /// struct Smtp;
    ///
    /// impl Mailer for Smtp {}
    ///
    /// let mut services = Services::new();
    /// services.insert_shared::<dyn Mailer>(Arc::new(Smtp));
    /// ```
    #[inline]
    pub fn insert_shared<T: ?Sized + Send + Sync + 'static>(&mut self, value: Arc<T>) -> Option<Value> {
        self.map.insert(String::from(type_name::<T>()), Arc::new(value))
    }

    /// Registers `value` under an arbitrary name, used for by-name parameters and configuration
    #[inline]
    pub fn insert_named<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, value: T) -> Option<Value> {
        self.insert_named_rc(name, Arc::new(value))
    }

    #[inline]
    pub fn insert_named_rc<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, value: Arc<T>) -> Option<Value> {
        self.map.insert(name.into(), value)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Container for Services {
    #[inline]
    fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<Value, LookupErrorKind> {
        self.map
            .get(key)
            .cloned()
            .ok_or_else(|| LookupErrorKind::NotFound { key: String::from(key) })
    }
}
