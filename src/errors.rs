use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VapiError {
    #[error("Environment variable '{0}' is required but not set.")]
    MissingEnvVar(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid variable '{0}', expected KEY=VALUE")]
    InvalidVariable(String),

    #[error("Invalid assistant id '{0}'")]
    InvalidAssistantId(String),
}

pub type VapiResult<T> = Result<T, VapiError>;
