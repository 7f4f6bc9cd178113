use anyhow::Result;
use std::env;

use crate::errors::VapiError;

pub trait ProviderConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self>
    where
        Self: Sized;

    /// Helper function to get environment variables with error handling
    fn get_env(key: &str, required: bool, default: Option<String>) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(env::VarError::NotPresent) if !required => Ok(default),
            Ok(_) | Err(env::VarError::NotPresent) => {
                Err(VapiError::MissingEnvVar(key.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
