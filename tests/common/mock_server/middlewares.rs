use crate::common::mock_server::MockServerConfiguration;
use actix_web::{dev::ServiceRequest, HttpResponse};
use base64::{prelude::BASE64_STANDARD, Engine};

/// Value of the `Authorization` header the client must send for the configured API keys
pub(super) fn expected_authorization(configuration: &MockServerConfiguration) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!(
            "{}:{}",
            configuration.public_key, configuration.private_key
        ))
    )
}

/// Checks that the request contains the headers set by the client
pub(super) fn validate_client_headers(req: &ServiceRequest) -> Result<(), HttpResponse> {
    let header = |name: &str| req.headers().get(name).and_then(|v| v.to_str().ok());

    if header("User-Agent") != Some(concat!("braintree-rust/", env!("CARGO_PKG_VERSION"))) {
        return Err(HttpResponse::InternalServerError().body("Invalid User-Agent"));
    }

    // The gateway only speaks version 6 of the API
    if header("X-ApiVersion") != Some("6") {
        return Err(HttpResponse::InternalServerError().body("Invalid or missing X-ApiVersion"));
    }

    Ok(())
}

/// Validates the basic authentication header. Like the real gateway, failures get an empty 401.
pub(super) fn validate_authorization(
    req: &ServiceRequest,
    expected: &str,
) -> Result<(), HttpResponse> {
    match req.headers().get("Authorization").map(|v| v.to_str()) {
        Some(Ok(authorization)) if authorization == expected => Ok(()),
        _ => Err(HttpResponse::Unauthorized().finish()),
    }
}
