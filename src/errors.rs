mod container;
mod factory;
mod inspect;
mod instantiate;
mod params_resolver;

pub use container::LookupErrorKind;
pub use factory::FactoryErrorKind;
pub use inspect::InspectErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use params_resolver::ResolveErrorKind;
