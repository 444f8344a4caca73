//! Standard errors used by all functions in the crate.

use serde::Deserialize;
use std::fmt;

/// Error collecting all possible failures of the Braintree client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error status returned by a gateway endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The gateway rejected the submitted attributes.
    #[error("{0}")]
    ValidationError(#[from] ValidationErrors),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Builds the error returned when a resource does not exist.
    ///
    /// This is exactly what the gateway's own 404 responses are mapped to.
    pub(crate) fn not_found() -> Self {
        Error::ApiError(ApiError {
            kind: ApiErrorKind::NotFound,
            status: 404,
            message: None,
        })
    }

    /// Returns `true` if this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ApiError(e) if e.kind == ApiErrorKind::NotFound)
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Class of an error status returned by the gateway.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ApiErrorKind {
    /// 401: the credentials were rejected.
    Authentication,
    /// 403: the credentials are not allowed to perform the operation.
    Authorization,
    /// 404: the resource does not exist.
    NotFound,
    /// 426: this client version is no longer supported.
    UpgradeRequired,
    /// 429: rate limited.
    TooManyRequests,
    /// 500
    ServerError,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Any other non-success status.
    Unexpected,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to the matching error class.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Authentication,
            403 => ApiErrorKind::Authorization,
            404 => ApiErrorKind::NotFound,
            426 => ApiErrorKind::UpgradeRequired,
            429 => ApiErrorKind::TooManyRequests,
            500 => ApiErrorKind::ServerError,
            503 => ApiErrorKind::ServiceUnavailable,
            504 => ApiErrorKind::GatewayTimeout,
            _ => ApiErrorKind::Unexpected,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiErrorKind::Authentication => "Authentication Error",
            ApiErrorKind::Authorization => "Authorization Error",
            ApiErrorKind::NotFound => "Not Found",
            ApiErrorKind::UpgradeRequired => "Upgrade Required",
            ApiErrorKind::TooManyRequests => "Too Many Requests",
            ApiErrorKind::ServerError => "Server Error",
            ApiErrorKind::ServiceUnavailable => "Service Unavailable",
            ApiErrorKind::GatewayTimeout => "Gateway Timeout",
            ApiErrorKind::Unexpected => "Unexpected Error",
        }
    }
}

/// Gateway HTTP error.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ApiError {
    /// Class of the error, derived from the status code.
    pub kind: ApiErrorKind,
    /// HTTP status returned by the server.
    pub status: u16,
    /// Human readable message returned along with the error, if any.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Braintree HTTP error {}: {}", self.status, self.kind.title())?;

        if let Some(ref message) = self.message {
            write!(f, "\nAdditional details: {}", message)?;
        }

        Ok(())
    }
}

/// Validation failures reported by the gateway in an `apiErrorResponse` body.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ValidationErrors {
    /// Summary message.
    pub message: String,
    /// Every field-level error, flattened out of the nested error tree.
    pub errors: Vec<ValidationError>,
}

/// A single field-level validation error.
#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ValidationError {
    pub attribute: String,
    pub code: String,
    pub message: String,
}

impl ValidationErrors {
    /// Returns all the errors reported for the given attribute.
    pub fn for_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.attribute == attribute)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {}", self.message)?;

        for error in &self.errors {
            write!(f, "\n- {} ({}): {}", error.attribute, error.code, error.message)?;
        }

        Ok(())
    }
}

/// Raw body of an `apiErrorResponse`.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorResponse {
    message: String,
    #[serde(default)]
    errors: serde_json::Value,
}

impl From<ApiErrorResponse> for ValidationErrors {
    fn from(res: ApiErrorResponse) -> Self {
        let mut errors = Vec::new();
        collect_validation_errors(&res.errors, &mut errors);

        ValidationErrors {
            message: res.message,
            errors,
        }
    }
}

// Errors are nested per entity, e.g. `{merchantAccount: {errors: [...], funding: {errors: [...]}}}`
fn collect_validation_errors(node: &serde_json::Value, out: &mut Vec<ValidationError>) {
    let map = match node.as_object() {
        Some(map) => map,
        None => return,
    };

    for (key, value) in map {
        match value {
            serde_json::Value::Array(items) if key == "errors" => out.extend(
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok()),
            ),
            serde_json::Value::Object(_) => collect_validation_errors(value, out),
            _ => {}
        }
    }
}
