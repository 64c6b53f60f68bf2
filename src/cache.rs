use alloc::{
    collections::BTreeMap,
    sync::{Arc, Weak},
};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{container::Container, params_resolver::ParamsResolver};

struct Entry {
    container: Weak<dyn Container>,
    resolver: Arc<dyn ParamsResolver>,
}

impl Entry {
    #[inline]
    fn is_alive(&self) -> bool {
        self.container.strong_count() > 0
    }
}

/// Resolvers memoized per container identity.
///
/// Containers are held weakly, an entry dies with its container and is pruned on the next insertion.
/// Addresses of dead containers can be reused, so dead entries are never returned.
#[derive(Default)]
pub struct ResolverCache {
    entries: RwLock<BTreeMap<usize, Entry>>,
}

#[inline]
fn identity(container: &Arc<dyn Container>) -> usize {
    Arc::as_ptr(container).cast::<()>() as usize
}

impl ResolverCache {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Resolver memoized for `container`, if it's still alive
    #[must_use]
    pub fn get(&self, container: &Arc<dyn Container>) -> Option<Arc<dyn ParamsResolver>> {
        self.entries
            .read()
            .get(&identity(container))
            .filter(|entry| entry.is_alive())
            .map(|entry| entry.resolver.clone())
    }

    /// Returns the resolver memoized for `container`, creating it with `create` on miss.
    ///
    /// `create` is called outside of the lock, so concurrent first calls may create several resolvers.
    /// Only the first stored one is kept and returned to every caller.
    pub fn get_or_create<F>(&self, container: &Arc<dyn Container>, create: F) -> Arc<dyn ParamsResolver>
    where
        F: FnOnce() -> Arc<dyn ParamsResolver>,
    {
        if let Some(resolver) = self.get(container) {
            trace!("Resolver found in cache");
            return resolver;
        }

        let resolver = create();

        let mut entries = self.entries.write();
        let key = identity(container);
        if let Some(entry) = entries.get(&key).filter(|entry| entry.is_alive()) {
            trace!("Resolver created concurrently");
            return entry.resolver.clone();
        }

        entries.retain(|_, entry| entry.is_alive());
        entries.insert(
            key,
            Entry {
                container: Arc::downgrade(container),
                resolver: resolver.clone(),
            },
        );
        debug!(containers = entries.len(), "Resolver cached");

        resolver
    }

    /// Number of live containers with a memoized resolver
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().values().filter(|entry| entry.is_alive()).count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::ResolverCache;
    use crate::{
        any::Value, container::Container, descriptor::TypeDescriptor, errors::ResolveErrorKind, parameter::Parameter,
        params_resolver::ParamsResolver, Services,
    };

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
    };
    use core::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    struct Noop;

    impl ParamsResolver for Noop {
        fn resolve(&self, _: &TypeDescriptor, param: &Parameter, _: &Arc<dyn Container>) -> Result<Value, ResolveErrorKind> {
            Ok(Arc::new(param.position()))
        }
    }

    #[test]
    #[traced_test]
    fn test_memoized_per_container() {
        let cache = ResolverCache::new();
        let created = AtomicUsize::new(0);
        let create = || {
            created.fetch_add(1, Ordering::SeqCst);
            Arc::new(Noop) as Arc<dyn ParamsResolver>
        };

        let container_1: Arc<dyn Container> = Arc::new(Services::new());
        let container_2: Arc<dyn Container> = Arc::new(Services::new());

        let resolver_1 = cache.get_or_create(&container_1, create);
        let resolver_2 = cache.get_or_create(&container_1, create);
        let resolver_3 = cache.get_or_create(&container_2, create);

        assert!(Arc::ptr_eq(&resolver_1, &resolver_2));
        assert!(!Arc::ptr_eq(&resolver_1, &resolver_3));
        assert_eq!(created.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_entry_dies_with_container() {
        let cache = ResolverCache::new();
        let container: Arc<dyn Container> = Arc::new(Services::new());
        cache.get_or_create(&container, || Arc::new(Noop));
        assert!(cache.get(&container).is_some());

        drop(container);
        assert!(cache.is_empty());

        let other: Arc<dyn Container> = Arc::new(Services::new());
        cache.get_or_create(&other, || Arc::new(Noop));
        assert_eq!(cache.entries.read().len(), 1);
    }
}
