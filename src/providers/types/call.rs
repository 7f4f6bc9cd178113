use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{VapiError, VapiResult};

/// The person being called
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub extension: String,
}

impl Customer {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            extension: String::new(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantOverrides {
    pub variable_values: BTreeMap<String, String>,
}

/// Body of `POST /call`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub phone_number_id: String,
    pub customer: Customer,
    pub assistant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_overrides: Option<AssistantOverrides>,
}

impl CallRequest {
    pub fn new(
        phone_number_id: impl Into<String>,
        customer: Customer,
        assistant_id: impl Into<String>,
    ) -> VapiResult<Self> {
        let request = Self {
            phone_number_id: phone_number_id.into(),
            customer,
            assistant_id: assistant_id.into(),
            assistant_overrides: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Attach template variables; an empty set leaves the overrides out.
    pub fn with_variables(mut self, variable_values: BTreeMap<String, String>) -> Self {
        self.assistant_overrides = if variable_values.is_empty() {
            None
        } else {
            Some(AssistantOverrides { variable_values })
        };
        self
    }

    pub fn validate(&self) -> VapiResult<()> {
        if self.phone_number_id.trim().is_empty() {
            return Err(VapiError::MissingField("phoneNumberId"));
        }
        if self.customer.number.trim().is_empty() {
            return Err(VapiError::MissingField("customer.number"));
        }
        if self.customer.name.trim().is_empty() {
            return Err(VapiError::MissingField("customer.name"));
        }
        if self.assistant_id.trim().is_empty() {
            return Err(VapiError::MissingField("assistantId"));
        }
        Ok(())
    }
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_variable(raw: &str) -> VapiResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(VapiError::InvalidVariable(raw.to_string())),
    }
}
