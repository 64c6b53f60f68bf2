use alloc::{boxed::Box, collections::BTreeMap, string::String, sync::Arc};
use core::any::type_name;
use parking_lot::RwLock;
use tracing::{debug, debug_span};

use crate::{
    any::Value,
    catalog::Catalog,
    config::{configured_names, Config, MissingDependency, Precedence},
    container::{container_key, Container},
    descriptor::TypeDescriptor,
    errors::{FactoryErrorKind, ResolveErrorKind},
    parameter::Parameter,
    Arguments,
};

/// Strategy producing a value for one constructor parameter.
///
/// The factory keeps one resolver per container.
/// A container can provide its own resolver under [`resolver_key`], stored as `Arc<dyn ParamsResolver>`.
pub trait ParamsResolver: Send + Sync + 'static {
    /// Resolves `param` of `target` against `container`
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind`] naming `target` and the parameter if no value can be bound
    fn resolve(&self, target: &TypeDescriptor, param: &Parameter, container: &Arc<dyn Container>) -> Result<Value, ResolveErrorKind>;
}

/// Key a custom [`ParamsResolver`] is looked up under in a container
#[inline]
#[must_use]
pub fn resolver_key() -> &'static str {
    type_name::<dyn ParamsResolver>()
}

/// Built-in resolver.
///
/// Resolution order with [`Precedence::TypeFirst`]:
/// 1. parameter declared as the container contract: the container itself;
/// 2. parameter with a non-builtin declared type: the container entry for that type;
/// 3. untyped or builtin parameter: the container entry named after the parameter;
/// 4. the declared default value;
/// 5. with [`MissingDependency::Construct`], a missing typed dependency constructed without arguments.
///
/// With [`Precedence::ConfigFirst`] the dependency names configured for the target take precedence over rules 1-3.
pub struct DefaultResolver {
    config: Config,
    catalog: Arc<Catalog>,
    configured: RwLock<BTreeMap<&'static str, Option<Arc<[String]>>>>,
}

impl DefaultResolver {
    #[inline]
    #[must_use]
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        Self {
            config,
            catalog,
            configured: RwLock::new(BTreeMap::new()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Configured dependency names of `target`, memoized per requested identifier.
    /// Names configured under the requested identifier win over names configured under the canonical one.
    fn configured_names(&self, target: &TypeDescriptor, container: &dyn Container) -> Result<Option<Arc<[String]>>, ResolveErrorKind> {
        let key = target.key();
        if let Some(names) = self.configured.read().get(key) {
            return Ok(names.clone());
        }

        let mut names = configured_names(container, self.config.section, key)?;
        if names.is_none() && key != target.name() {
            names = configured_names(container, self.config.section, target.name())?;
        }
        Ok(self.configured.write().entry(key).or_insert(names).clone())
    }

    fn resolve_configured(
        &self,
        target: &TypeDescriptor,
        param: &Parameter,
        name: &str,
        container: &Arc<dyn Container>,
    ) -> Result<Value, ResolveErrorKind> {
        if name == container_key() || name == container.concrete_name() {
            debug!(name, "Bound to container by configuration");
            return Ok(Arc::new(container.clone()));
        }
        if container.has(name) {
            debug!(name, "Bound by configuration");
            return lookup(target, param, name, &**container);
        }
        self.resolve_default(target, param)
    }

    fn resolve_by_type(&self, target: &TypeDescriptor, param: &Parameter, container: &Arc<dyn Container>) -> Result<Value, ResolveErrorKind> {
        match param.service_type() {
            Some(declared_type) if declared_type == container_key() => {
                debug!("Bound to container");
                Ok(Arc::new(container.clone()))
            }
            Some(declared_type) => {
                if container.has(declared_type) {
                    debug!("Bound by type");
                    return lookup(target, param, declared_type, &**container);
                }
                if param.has_default() {
                    return self.resolve_default(target, param);
                }
                match self.config.missing_dependency {
                    MissingDependency::Fail => Err(unresolvable(target, param)),
                    MissingDependency::Construct => self.construct_missing(target, param, declared_type),
                }
            }
            None => {
                if container.has(param.name) {
                    debug!("Bound by name");
                    return lookup(target, param, param.name, &**container);
                }
                self.resolve_default(target, param)
            }
        }
    }

    fn resolve_default(&self, target: &TypeDescriptor, param: &Parameter) -> Result<Value, ResolveErrorKind> {
        match &param.default {
            Some(default) => {
                debug!("Bound to default value");
                Ok(default.clone())
            }
            None => Err(unresolvable(target, param)),
        }
    }

    fn construct_missing(&self, target: &TypeDescriptor, param: &Parameter, dependency: &'static str) -> Result<Value, ResolveErrorKind> {
        let fallback = |source: FactoryErrorKind| ResolveErrorKind::Fallback {
            target: target.name(),
            parameter: param.name,
            dependency,
            source: Box::new(source),
        };

        let descriptor = self.catalog.inspect(dependency).map_err(|err| fallback(err.into()))?;
        if !descriptor.is_public() {
            return Err(fallback(FactoryErrorKind::PrivateConstructor { name: descriptor.name() }));
        }
        if !descriptor.parameters().is_empty() {
            return Err(unresolvable(target, param));
        }

        let instance = descriptor.construct(Arguments::empty()).map_err(|source| {
            fallback(FactoryErrorKind::Construction {
                target: descriptor.name(),
                source,
            })
        })?;
        debug!(dependency, "Missing dependency constructed");

        Ok(Arc::from(instance))
    }
}

impl ParamsResolver for DefaultResolver {
    fn resolve(&self, target: &TypeDescriptor, param: &Parameter, container: &Arc<dyn Container>) -> Result<Value, ResolveErrorKind> {
        let span = debug_span!("resolve", param = param.name, position = param.position);
        let _guard = span.enter();

        if self.config.precedence == Precedence::ConfigFirst {
            if let Some(names) = self.configured_names(target, &**container)? {
                if let Some(name) = names.get(param.position) {
                    return self.resolve_configured(target, param, name, container);
                }
            }
        }

        self.resolve_by_type(target, param, container)
    }
}

#[inline]
fn lookup(target: &TypeDescriptor, param: &Parameter, key: &str, container: &dyn Container) -> Result<Value, ResolveErrorKind> {
    container.get(key).map_err(|source| ResolveErrorKind::Lookup {
        target: target.name(),
        parameter: param.name,
        key: String::from(key),
        source,
    })
}

#[inline]
#[must_use]
fn unresolvable(target: &TypeDescriptor, param: &Parameter) -> ResolveErrorKind {
    ResolveErrorKind::UnresolvableParameter {
        target: target.name(),
        parameter: param.name,
        position: param.position,
    }
}
