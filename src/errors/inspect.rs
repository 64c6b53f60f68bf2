use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum InspectErrorKind {
    #[error("Unable to load the requested type `{name}`")]
    TypeNotFound { name: String },
}
