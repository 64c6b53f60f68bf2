use alloc::{collections::BTreeMap, string::String, sync::Arc};
use core::any::type_name;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    descriptor::TypeDescriptor,
    errors::InspectErrorKind,
    signature::{describe, Inspectable},
};

type Describe = fn() -> TypeDescriptor;

/// Registration table of inspectable types.
///
/// Maps type identifiers to their signatures and memoizes one [`TypeDescriptor`] per identifier.
/// Descriptors are built on first inspection and never invalidated.
pub struct Catalog {
    entries: BTreeMap<&'static str, Describe>,
    descriptors: RwLock<BTreeMap<&'static str, Arc<TypeDescriptor>>>,
}

impl Catalog {
    #[inline]
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the descriptor of the type registered under `name`
    ///
    /// # Errors
    /// Returns [`InspectErrorKind::TypeNotFound`] if no type is registered under `name`
    pub fn inspect(&self, name: &str) -> Result<Arc<TypeDescriptor>, InspectErrorKind> {
        let Some((&key, describe)) = self.entries.get_key_value(name) else {
            return Err(InspectErrorKind::TypeNotFound { name: String::from(name) });
        };

        if let Some(descriptor) = self.descriptors.read().get(key) {
            trace!("Descriptor found in cache");
            return Ok(descriptor.clone());
        }

        let mut descriptor = describe();
        descriptor.key = key;
        debug!(
            type_name = descriptor.info.short_name(),
            params = descriptor.parameters().len(),
            "Descriptor built"
        );
        let descriptor = Arc::new(descriptor);

        Ok(self.descriptors.write().entry(key).or_insert(descriptor).clone())
    }
}

#[derive(Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<&'static str, Describe>,
}

impl CatalogBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Registers `T` under its type name
    #[inline]
    #[must_use]
    pub fn register<T: Inspectable>(self) -> Self {
        self.register_as::<T>(type_name::<T>())
    }

    /// Registers `T` under an additional identifier.
    /// The descriptor keeps the canonical type name.
    #[inline]
    #[must_use]
    pub fn register_as<T: Inspectable>(mut self, name: &'static str) -> Self {
        self.entries.insert(name, describe::<T>);
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
            descriptors: RwLock::new(BTreeMap::new()),
        }
    }
}

/// Builds a [`Catalog`] from a list of [`Inspectable`] types, optionally with aliases.
///
/// # Examples
/// ```rust
/// use autowiring::{catalog, Inspectable, Signature};
///
/// #[derive(Default)]
/// struct Bar;
///
/// impl Inspectable for Bar {
///     fn signature() -> Signature<Self> {
///         Signature::implicit()
///     }
/// }
///
/// let catalog = catalog![Bar, Bar as "bar"];
/// assert!(catalog.contains("bar"));
/// ```
#[macro_export]
macro_rules! catalog {
    () => {
        $crate::Catalog::builder().build()
    };
    ( $( $ty:ty $( as $alias:literal )? ),+ $(,)? ) => {{
        let builder = $crate::Catalog::builder();
        $(
            let builder = builder.register::<$ty>();
            $( let builder = builder.register_as::<$ty>($alias); )?
        )+
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Catalog;
    use crate::{
        errors::{InspectErrorKind, InstantiateErrorKind},
        parameter::Param,
        signature::{Inspectable, Signature},
    };

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
    };
    use core::any::type_name;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct Bar;

    impl Inspectable for Bar {
        fn signature() -> Signature<Self> {
            Signature::implicit()
        }
    }

    struct Foo(Arc<Bar>);

    impl Inspectable for Foo {
        fn signature() -> Signature<Self> {
            Signature::public(|args| Ok::<_, InstantiateErrorKind>(Foo(args.take()?))).param(Param::<Bar>::dependency("bar"))
        }
    }

    #[test]
    #[traced_test]
    fn test_inspect_memoized() {
        let catalog = catalog![Bar, Foo as "foo"];
        assert_eq!(catalog.len(), 3);

        let descriptor_1 = catalog.inspect(type_name::<Foo>()).unwrap();
        let descriptor_2 = catalog.inspect(type_name::<Foo>()).unwrap();
        assert!(Arc::ptr_eq(&descriptor_1, &descriptor_2));
        assert_eq!(descriptor_1.parameters().len(), 1);

        assert_eq!(descriptor_1.key(), type_name::<Foo>());

        let alias = catalog.inspect("foo").unwrap();
        assert_eq!(alias.name(), type_name::<Foo>());
        assert_eq!(alias.key(), "foo");
    }

    #[test]
    #[traced_test]
    fn test_inspect_not_found() {
        let catalog = Catalog::builder().register::<Bar>().build();

        assert!(!catalog.contains("Baz"));
        assert!(matches!(
            catalog.inspect("Baz"),
            Err(InspectErrorKind::TypeNotFound { name }) if name == "Baz"
        ));
    }

    #[test]
    fn test_empty() {
        let catalog: Catalog = catalog![];
        assert!(catalog.is_empty());
    }
}
