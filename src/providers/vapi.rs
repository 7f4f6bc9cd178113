use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Client, RequestBuilder}; // we are using blocking API here to make sync calls
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::errors::VapiError;

use super::{
    base::Outcome,
    configs::vapi::VapiProviderConfig,
    types::call::CallRequest,
};

pub struct VapiProvider {
    client: Client,
    config: VapiProviderConfig,
}

impl VapiProvider {
    pub fn new(config: VapiProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    /// Append `segments` to the host path, percent-encoding each one so that
    /// `/`, `?`, `#` and `%` stay inside their segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.host)
            .with_context(|| format!("Invalid API host: {}", self.config.host))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API host cannot carry a path: {}", self.config.host))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn assistant_url(&self, assistant_id: &str) -> Result<Url> {
        // Dot segments are resolved by URL parsing and would escape `/assistant/`
        if matches!(assistant_id, "" | "." | "..") {
            return Err(VapiError::InvalidAssistantId(assistant_id.to_string()).into());
        }
        self.url(&["assistant", assistant_id])
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Fetch one assistant. Only `200 OK` counts as success.
    pub fn get_assistant(&self, assistant_id: &str) -> Result<Outcome> {
        let url = self.assistant_url(assistant_id)?;
        debug!(%url, "GET assistant");

        let response = self
            .authorized(self.client.get(url.clone()))
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        match response.status() {
            StatusCode::OK => {
                info!(status = 200, "assistant retrieved");
                let assistant = response
                    .json()
                    .context("Failed to decode assistant response as JSON")?;
                Ok(Outcome::Success(assistant))
            }
            status => {
                info!(status = status.as_u16(), "assistant request failed");
                let body = response.text().context("Failed to read response body")?;
                Ok(Outcome::failure(status, body))
            }
        }
    }

    /// Place an outbound call. Any 2xx status counts as success.
    pub fn create_call(&self, request: &CallRequest) -> Result<Outcome> {
        request.validate()?;

        let url = self.url(&["call"])?;
        debug!(%url, phone_number_id = %request.phone_number_id, "POST call");

        let response = self
            .authorized(self.client.post(url.clone()))
            .json(request)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "call created");
            let call = response
                .json()
                .context("Failed to decode call response as JSON")?;
            Ok(Outcome::Success(call))
        } else {
            info!(status = status.as_u16(), "call request failed");
            let body = response.text().context("Failed to read response body")?;
            Ok(Outcome::failure(status, body))
        }
    }
}
