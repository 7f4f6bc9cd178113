use super::base::ProviderConfig;
use anyhow::Result;

pub const VAPI_HOST: &str = "https://api.vapi.ai";

pub const VAPI_API_KEY_ENV: &str = "VAPI_API_KEY";
pub const VAPI_API_HOST_ENV: &str = "VAPI_API_HOST";
pub const VAPI_ASSISTANT_ID_ENV: &str = "VAPI_ASSISTANT_ID";

#[derive(Debug, Clone)]
pub struct VapiProviderConfig {
    pub api_key: String,
    pub host: String,
    /// Default assistant for commands that are not given one explicitly
    pub assistant_id: Option<String>,
}

impl VapiProviderConfig {
    pub fn new(api_key: String, host: String, assistant_id: Option<String>) -> Self {
        Self {
            api_key,
            host,
            assistant_id,
        }
    }
}

impl ProviderConfig for VapiProviderConfig {
    fn from_env() -> Result<Self> {
        let api_key = Self::get_env(VAPI_API_KEY_ENV, true, None)?
            .ok_or_else(|| anyhow::anyhow!("Vapi API key should be present"))?;

        let host = Self::get_env(VAPI_API_HOST_ENV, false, Some(VAPI_HOST.to_string()))?
            .unwrap_or_else(|| VAPI_HOST.to_string());

        let assistant_id = Self::get_env(VAPI_ASSISTANT_ID_ENV, false, None)?;

        Ok(Self::new(api_key, host, assistant_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VapiError;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        env::remove_var(VAPI_API_KEY_ENV);
        env::remove_var(VAPI_API_HOST_ENV);
        env::remove_var(VAPI_ASSISTANT_ID_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clean_env();
        env::set_var(VAPI_API_KEY_ENV, "test-key");

        let config = VapiProviderConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.host, "https://api.vapi.ai");
        assert_eq!(config.assistant_id, None);

        clean_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clean_env();
        env::set_var(VAPI_API_KEY_ENV, "test-key");
        env::set_var(VAPI_API_HOST_ENV, "http://localhost:9000");
        env::set_var(VAPI_ASSISTANT_ID_ENV, "bb8fe123");

        let config = VapiProviderConfig::from_env().unwrap();
        assert_eq!(config.host, "http://localhost:9000");
        assert_eq!(config.assistant_id.as_deref(), Some("bb8fe123"));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_missing_api_key() {
        clean_env();

        let err = VapiProviderConfig::from_env().unwrap_err();
        assert_eq!(
            err.downcast_ref::<VapiError>(),
            Some(&VapiError::MissingEnvVar(VAPI_API_KEY_ENV.to_string()))
        );
        assert_eq!(
            err.to_string(),
            "Environment variable 'VAPI_API_KEY' is required but not set."
        );
    }

    #[test]
    #[serial]
    fn test_empty_api_key_counts_as_missing() {
        clean_env();
        env::set_var(VAPI_API_KEY_ENV, "");

        assert!(VapiProviderConfig::from_env().is_err());

        clean_env();
    }
}
