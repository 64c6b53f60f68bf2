#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod catalog;

pub(crate) mod any;
pub(crate) mod arguments;
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod constructor;
pub(crate) mod container;
pub(crate) mod descriptor;
pub(crate) mod errors;
pub(crate) mod factory;
pub(crate) mod parameter;
pub(crate) mod params_resolver;
pub(crate) mod services;
pub(crate) mod signature;

pub use any::{Instance, TypeInfo, Value};
pub use arguments::Arguments;
pub use cache::ResolverCache;
pub use catalog::{Catalog, CatalogBuilder};
pub use config::{Config, MissingDependency, Precedence, CONFIG_KEYS};
pub use container::{container_key, Container};
pub use descriptor::{TypeDescriptor, Visibility};
pub use errors::{FactoryErrorKind, InspectErrorKind, InstantiateErrorKind, LookupErrorKind, ResolveErrorKind};
pub use factory::AutowiringFactory;
pub use parameter::{Param, Parameter, Untyped};
pub use params_resolver::{resolver_key, DefaultResolver, ParamsResolver};
pub use services::Services;
pub use signature::{Inspectable, Signature};
