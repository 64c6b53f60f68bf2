use core::any::type_name;

use crate::{any::Value, errors::LookupErrorKind};

/// Lookup service the factory resolves dependencies from.
///
/// Keys are either type names (see [`core::any::type_name`]) or arbitrary names.
/// The factory never mutates a container, it only calls [`Container::has`] and [`Container::get`].
///
/// # Storage convention
/// A sized service `T` is expected as `Arc<T>` coerced to [`Value`],
/// while an unsized one (for example `dyn Container`) is expected as `Arc<Arc<dyn Trait>>`.
pub trait Container: Send + Sync + 'static {
    fn has(&self, key: &str) -> bool;

    /// # Errors
    /// Returns [`LookupErrorKind::NotFound`] if there is no entry for `key`
    fn get(&self, key: &str) -> Result<Value, LookupErrorKind>;

    /// Name of the concrete container type.
    /// Configured dependency names equal to it are bound to the container itself.
    #[inline]
    #[must_use]
    fn concrete_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Key of the container contract.
/// Parameters declared with this type are bound to the container instance itself.
#[inline]
#[must_use]
pub fn container_key() -> &'static str {
    type_name::<dyn Container>()
}
