use thiserror::Error;

/// Invalid compiler configuration; always fatal for the compile call
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("History budget must not be negative, got {0}")]
    NegativeBudget(i64),

    #[error("History budget must not be negative, got {0}")]
    NegativeFractionalBudget(f64),

    #[error("History budget must be a finite number")]
    NonFiniteBudget,
}

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to read conversation context: {0}")]
    Context(anyhow::Error),
}

impl CompileError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, CompileError::Configuration(_))
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
