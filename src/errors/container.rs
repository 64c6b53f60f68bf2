use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum LookupErrorKind {
    #[error("Entry `{key}` not found in container")]
    NotFound { key: String },
}
