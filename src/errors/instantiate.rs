#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Argument at position {position} is missing")]
    MissingArgument { position: usize },
    #[error("Argument at position {position} has incorrect type. Expected: {expected}")]
    IncorrectType { position: usize, expected: &'static str },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
