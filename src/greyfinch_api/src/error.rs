use std::fmt;

use thiserror::Error;

/// The GraphQL round trip that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Query,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Login => f.write_str("Login"),
            Operation::Query => f.write_str("Query"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}{}", status_body(.body))]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

fn status_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(", body: {body}")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },
    #[error("{operation} failed: {}", errors_payload(.errors))]
    Application {
        operation: Operation,
        errors: Vec<graphql_client::Error>,
    },
    #[error("{operation} failed: response contained no data")]
    EmptyResponse { operation: Operation },
}

impl Error {
    pub fn operation(&self) -> Operation {
        match self {
            Error::Transport { operation, .. }
            | Error::Application { operation, .. }
            | Error::EmptyResponse { operation } => *operation,
        }
    }

    pub(crate) fn transport(operation: Operation, source: impl Into<TransportError>) -> Self {
        Error::Transport {
            operation,
            source: source.into(),
        }
    }
}

fn errors_payload(errors: &[graphql_client::Error]) -> String {
    serde_json::to_string(errors).unwrap_or_else(|_| format!("{errors:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_includes_payload() {
        let error = Error::Application {
            operation: Operation::Login,
            errors: vec![graphql_client::Error {
                message: "invalid credentials".into(),
                locations: None,
                path: None,
                extensions: None,
            }],
        };

        let message = error.to_string();
        assert!(message.starts_with("Login failed: "));
        assert!(message.contains("invalid credentials"));
        assert_eq!(error.operation(), Operation::Login);
    }

    #[test]
    fn status_error_names_operation() {
        let error = Error::transport(
            Operation::Query,
            TransportError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: String::new(),
            },
        );

        assert_eq!(error.to_string(), "Query failed: HTTP error! status: 502 Bad Gateway");
    }

    #[test]
    fn status_error_keeps_body() {
        let error = Error::transport(
            Operation::Login,
            TransportError::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                body: r#"{"message":"token expired"}"#.into(),
            },
        );

        assert_eq!(
            error.to_string(),
            r#"Login failed: HTTP error! status: 401 Unauthorized, body: {"message":"token expired"}"#
        );
    }
}
