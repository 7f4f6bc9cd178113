use std::io::{self, Write};

use serde_json::Value;

use crate::providers::base::Outcome;

/// Wording for one kind of API operation.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub success: &'static str,
    pub failure: &'static str,
}

pub const ASSISTANT: Labels = Labels {
    success: "Assistant Details:",
    failure: "Failed to retrieve assistant details.",
};

pub const CALL: Labels = Labels {
    success: "Call created:",
    failure: "Failed to create call.",
};

pub fn format_json(value: &Value, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_else(|_| value.to_string())
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    labels: Labels,
    outcome: &Outcome,
    pretty: bool,
) -> io::Result<()> {
    match outcome {
        Outcome::Success(value) => {
            writeln!(out, "{} {}", labels.success, format_json(value, pretty))
        }
        Outcome::Failure { status, body } => {
            writeln!(out, "{} Status Code: {}", labels.failure, status)?;
            writeln!(out, "Error: {}", body)
        }
    }
}
