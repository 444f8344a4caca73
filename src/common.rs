// Default URLs
pub static DEFAULT_DEVELOPMENT_URL: &str = "http://localhost:3000";
pub static DEFAULT_QA_URL: &str = "https://gateway.qa.braintreepayments.com:443";
pub static DEFAULT_SANDBOX_URL: &str = "https://api.sandbox.braintreegateway.com:443";
pub static DEFAULT_PRODUCTION_URL: &str = "https://api.braintreegateway.com:443";

// Header names
pub static API_VERSION_HEADER: &str = "x-apiversion";

/// Version of the gateway API this client speaks.
pub static API_VERSION: &str = "6";
