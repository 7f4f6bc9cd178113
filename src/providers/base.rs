use reqwest::StatusCode;
use serde_json::Value;

/// Result of a single API round trip that reached the server.
///
/// Transport faults never become an `Outcome`; they surface as errors from the
/// provider call instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server accepted the request and returned a JSON body
    Success(Value),
    /// Any other status, with the body kept verbatim
    Failure { status: u16, body: String },
}

impl Outcome {
    pub fn failure(status: StatusCode, body: impl Into<String>) -> Self {
        Outcome::Failure {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_keeps_status_and_body() {
        let outcome = Outcome::failure(StatusCode::NOT_FOUND, "not found");
        assert_eq!(
            outcome,
            Outcome::Failure {
                status: 404,
                body: "not found".to_string()
            }
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_success() {
        assert!(Outcome::Success(json!({"id": "abc"})).is_success());
    }
}
