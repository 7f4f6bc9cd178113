use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

use crate::providers::base::Outcome;
use crate::providers::configs::base::ProviderConfig;
use crate::providers::configs::vapi::{
    VapiProviderConfig, VAPI_API_HOST_ENV, VAPI_API_KEY_ENV, VAPI_ASSISTANT_ID_ENV, VAPI_HOST,
};
use crate::providers::types::call::{parse_variable, CallRequest, Customer};
use crate::providers::vapi::VapiProvider;
use crate::report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query and drive assistants on the Vapi API", long_about = None)]
pub struct Cli {
    /// Vapi API key (can also be set via VAPI_API_KEY environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API host (can also be set via VAPI_API_HOST environment variable)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Pretty-print JSON responses
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve an assistant's configuration
    Assistant {
        /// Assistant id (can also be set via VAPI_ASSISTANT_ID environment variable)
        assistant_id: Option<String>,
    },

    /// Place an outbound phone call handled by an assistant
    Call {
        /// Id of the phone number the call is placed from
        #[arg(long)]
        phone_number_id: String,

        /// Customer phone number, e.g. +15551234567
        #[arg(long)]
        number: String,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer extension, empty by default
        #[arg(long, default_value = "")]
        extension: String,

        /// Assistant id (can also be set via VAPI_ASSISTANT_ID environment variable)
        #[arg(long)]
        assistant_id: Option<String>,

        /// Template variable passed to the assistant, repeatable
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_variable)]
        vars: Vec<(String, String)>,
    },
}

/// Flags take precedence over the environment, which takes precedence over defaults.
pub fn create_vapi_config(cli: &Cli) -> Result<VapiProviderConfig> {
    let api_key = match non_empty(&cli.api_key) {
        Some(key) => key,
        None => VapiProviderConfig::get_env(VAPI_API_KEY_ENV, false, None)?.context(
            "API key must be provided via --api-key or VAPI_API_KEY environment variable",
        )?,
    };

    let host = match non_empty(&cli.host) {
        Some(host) => host,
        None => VapiProviderConfig::get_env(VAPI_API_HOST_ENV, false, None)?
            .unwrap_or_else(|| VAPI_HOST.to_string()),
    };

    let assistant_id = VapiProviderConfig::get_env(VAPI_ASSISTANT_ID_ENV, false, None)?;

    Ok(VapiProviderConfig::new(api_key, host, assistant_id))
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn resolve_assistant_id(explicit: Option<String>, config: &VapiProviderConfig) -> Result<String> {
    explicit
        .filter(|id| !id.is_empty())
        .or_else(|| config.assistant_id.clone())
        .context("Assistant id must be provided as an argument or via VAPI_ASSISTANT_ID environment variable")
}

/// Execute one command and write its result to `out`.
///
/// HTTP failures are reported on `out` and returned as `Outcome::Failure`;
/// configuration and transport problems are returned as errors before or
/// instead of any output.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome> {
    let config = create_vapi_config(&cli)?;
    let pretty = cli.pretty;

    let (labels, outcome) = match cli.command {
        Command::Assistant { assistant_id } => {
            let assistant_id = resolve_assistant_id(assistant_id, &config)?;
            let provider = VapiProvider::new(config)?;
            (report::ASSISTANT, provider.get_assistant(&assistant_id)?)
        }
        Command::Call {
            phone_number_id,
            number,
            name,
            extension,
            assistant_id,
            vars,
        } => {
            let assistant_id = resolve_assistant_id(assistant_id, &config)?;
            let customer = Customer::new(number, name).with_extension(extension);
            let variables: BTreeMap<String, String> = vars.into_iter().collect();
            let request =
                CallRequest::new(phone_number_id, customer, assistant_id)?.with_variables(variables);
            debug!(?request, "prepared call request");

            let provider = VapiProvider::new(config)?;
            (report::CALL, provider.create_call(&request)?)
        }
    };

    report::write_outcome(out, labels, &outcome, pretty)?;
    Ok(outcome)
}
