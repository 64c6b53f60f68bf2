use alloc::string::String;

use super::{inspect::InspectErrorKind, instantiate::InstantiateErrorKind, params_resolver::ResolveErrorKind};

#[derive(thiserror::Error, Debug)]
pub enum FactoryErrorKind {
    #[error("Unable to load the requested type `{name}`")]
    TypeNotFound { name: String },
    #[error("Unable to call the private constructor of the requested type `{name}`")]
    PrivateConstructor { name: &'static str },
    #[error(transparent)]
    Resolve(#[from] ResolveErrorKind),
    #[error("Unable to instantiate an object of type `{target}`: {source}")]
    Construction {
        target: &'static str,
        #[source]
        source: InstantiateErrorKind,
    },
}

impl From<InspectErrorKind> for FactoryErrorKind {
    fn from(err: InspectErrorKind) -> Self {
        match err {
            InspectErrorKind::TypeNotFound { name } => Self::TypeNotFound { name },
        }
    }
}
