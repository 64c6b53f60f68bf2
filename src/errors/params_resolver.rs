use alloc::{boxed::Box, string::String};

use super::{container::LookupErrorKind, factory::FactoryErrorKind};

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Unable to resolve parameter `{parameter}` (position {position}) of type `{target}`")]
    UnresolvableParameter {
        target: &'static str,
        parameter: &'static str,
        position: usize,
    },
    #[error("Configured dependency names for type `{target}` must be strings, found `{found}` at position {position}")]
    InvalidDependencyName {
        target: &'static str,
        position: usize,
        found: String,
    },
    #[error("Unable to load dependency `{key}` for parameter `{parameter}` of type `{target}`")]
    Lookup {
        target: &'static str,
        parameter: &'static str,
        key: String,
        #[source]
        source: LookupErrorKind,
    },
    #[error("Unable to construct missing dependency `{dependency}` for parameter `{parameter}` of type `{target}`")]
    Fallback {
        target: &'static str,
        parameter: &'static str,
        dependency: &'static str,
        #[source]
        source: Box<FactoryErrorKind>,
    },
}

impl ResolveErrorKind {
    /// Type whose constructor parameter failed to resolve
    #[must_use]
    pub const fn target(&self) -> &'static str {
        match self {
            Self::UnresolvableParameter { target, .. }
            | Self::InvalidDependencyName { target, .. }
            | Self::Lookup { target, .. }
            | Self::Fallback { target, .. } => target,
        }
    }
}
