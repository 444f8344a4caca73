use crate::error::{ApiError, ApiErrorKind, ApiErrorResponse, Error, ValidationErrors};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the gateway
/// into [`Error::ApiError`](crate::error::Error)s, or [`Error::ValidationError`](crate::error::Error)s
/// when the body carries validation failures.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            return Err(error_from_response(response).await?.into());
        }

        Ok(response)
    }
}

/// Body of an error response from the gateway.
#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponseBody {
    #[serde(rename_all = "camelCase")]
    Validation { api_error_response: ApiErrorResponse },
    Message { message: String },
    Unknown,
}

async fn error_from_response(response: Response) -> reqwest_middleware::Result<Error> {
    let status = response.status();

    // Parse the response body as JSON
    let bytes = response.bytes().await?;
    let body: ErrorResponseBody =
        serde_json::from_slice(&bytes).unwrap_or(ErrorResponseBody::Unknown);

    let error = match body {
        ErrorResponseBody::Validation { api_error_response }
            if status == StatusCode::UNPROCESSABLE_ENTITY =>
        {
            Error::ValidationError(ValidationErrors::from(api_error_response))
        }
        ErrorResponseBody::Validation { api_error_response } => {
            let validation = ValidationErrors::from(api_error_response);
            Error::ApiError(ApiError {
                kind: ApiErrorKind::from_status(status.as_u16()),
                status: status.as_u16(),
                message: Some(validation.message),
            })
        }
        ErrorResponseBody::Message { message } => Error::ApiError(ApiError {
            kind: ApiErrorKind::from_status(status.as_u16()),
            status: status.as_u16(),
            message: Some(message),
        }),
        ErrorResponseBody::Unknown => Error::ApiError(ApiError {
            kind: ApiErrorKind::from_status(status.as_u16()),
            status: status.as_u16(),
            message: None,
        }),
    };

    Ok(error)
}
