use alloc::{string::String, sync::Arc, vec::Vec};
use core::any::type_name;
use tracing::{debug, debug_span, trace};

use crate::{
    any::Instance,
    arguments::Arguments,
    cache::ResolverCache,
    catalog::Catalog,
    config::Config,
    container::Container,
    descriptor::TypeDescriptor,
    errors::FactoryErrorKind,
    params_resolver::{resolver_key, DefaultResolver, ParamsResolver},
    signature::Inspectable,
};

/// Factory constructing registered types with constructor arguments resolved from a container.
///
/// One [`ParamsResolver`] is memoized per container and reused by every `create` with that container.
///
/// # Examples
/// ```rust
/// use autowiring::{catalog, AutowiringFactory, Container, Inspectable, InstantiateErrorKind, Param, Services, Signature};
/// use std::sync::Arc;
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
/// struct Foo(Arc<Bar>);
///
/// impl Inspectable for Foo {
///     fn signature() -> Signature<Self> {
///         Signature::public(|args| Ok::<_, InstantiateErrorKind>(Foo(args.take()?))).param(Param::<Bar>::dependency("bar"))
///     }
/// }
///
/// let mut services = Services::new();
/// services.insert(Bar);
/// let container: Arc<dyn Container> = Arc::new(services);
///
/// let factory = AutowiringFactory::new(catalog![Bar, Foo]);
/// let foo = factory.create_typed::<Foo>(&container).unwrap();
/// ```
pub struct AutowiringFactory {
    catalog: Arc<Catalog>,
    resolvers: ResolverCache,
    config: Config,
}

impl AutowiringFactory {
    #[inline]
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, Config::default())
    }

    #[inline]
    #[must_use]
    pub fn with_config(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            resolvers: ResolverCache::new(),
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Constructs the type registered under `requested_name`
    ///
    /// # Errors
    /// - Returns [`FactoryErrorKind::TypeNotFound`] if no type is registered under `requested_name`
    /// - Returns [`FactoryErrorKind::PrivateConstructor`] if the type's constructor is private
    /// - Returns [`FactoryErrorKind::Resolve`] for the first parameter that can't be resolved
    /// - Returns [`FactoryErrorKind::Construction`] if the constructor itself fails
    pub fn create(&self, requested_name: &str, container: &Arc<dyn Container>) -> Result<Instance, FactoryErrorKind> {
        let span = debug_span!("create", type_name = requested_name);
        let _guard = span.enter();

        let descriptor = self.catalog.inspect(requested_name)?;

        if !descriptor.has_constructor() {
            debug!("No declared constructor");
            return construct(&descriptor, Arguments::empty());
        }
        if !descriptor.is_public() {
            debug!("Private constructor");
            return Err(FactoryErrorKind::PrivateConstructor { name: descriptor.name() });
        }
        if descriptor.parameters().is_empty() {
            debug!("Constructor without parameters");
            return construct(&descriptor, Arguments::empty());
        }

        let resolver = self.resolver_for(container);
        let values = descriptor
            .parameters()
            .iter()
            .map(|param| resolver.resolve(&descriptor, param, container))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(params = values.len(), "Parameters resolved");

        construct(&descriptor, Arguments::new(values))
    }

    /// Constructs `T` and downcasts the instance
    ///
    /// # Errors
    /// Same as [`Self::create`], looked up by the type name of `T`
    pub fn create_typed<T: Inspectable>(&self, container: &Arc<dyn Container>) -> Result<T, FactoryErrorKind> {
        match self.create(type_name::<T>(), container)?.downcast::<T>() {
            Ok(instance) => Ok(*instance),
            Err(_) => Err(FactoryErrorKind::TypeNotFound {
                name: String::from(type_name::<T>()),
            }),
        }
    }

    /// Resolver memoized for `container`, created on first use.
    ///
    /// The container can provide its own resolver under [`resolver_key`], otherwise a [`DefaultResolver`] is created.
    #[must_use]
    pub fn resolver_for(&self, container: &Arc<dyn Container>) -> Arc<dyn ParamsResolver> {
        self.resolvers.get_or_create(container, || self.new_resolver(container))
    }

    /// Resolver memoized for `container` without creating one
    #[inline]
    #[must_use]
    pub fn cached_resolver(&self, container: &Arc<dyn Container>) -> Option<Arc<dyn ParamsResolver>> {
        self.resolvers.get(container)
    }

    /// Number of live containers with a memoized resolver
    #[inline]
    #[must_use]
    pub fn cached_resolvers(&self) -> usize {
        self.resolvers.len()
    }

    fn new_resolver(&self, container: &Arc<dyn Container>) -> Arc<dyn ParamsResolver> {
        let key = resolver_key();
        if container.has(key) {
            if let Some(resolver) = container
                .get(key)
                .ok()
                .and_then(|value| value.downcast::<Arc<dyn ParamsResolver>>().ok())
            {
                debug!("Resolver provided by container");
                return (*resolver).clone();
            }
            debug!("Entry under resolver key isn't a resolver, default is used");
        }

        Arc::new(DefaultResolver::new(self.config, self.catalog.clone()))
    }
}

#[inline]
fn construct(descriptor: &TypeDescriptor, arguments: Arguments) -> Result<Instance, FactoryErrorKind> {
    trace!("Call constructor");
    descriptor
        .construct(arguments)
        .map_err(|source| FactoryErrorKind::Construction {
            target: descriptor.name(),
            source,
        })
}
