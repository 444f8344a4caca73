//! Module containing the main Braintree API client.

use crate::{
    apis::{auth::Credentials, merchant_accounts::MerchantAccountsApi, BraintreeClientInner},
    common::{
        DEFAULT_DEVELOPMENT_URL, DEFAULT_PRODUCTION_URL, DEFAULT_QA_URL, DEFAULT_SANDBOX_URL,
    },
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
        retry_idempotent::{DynRetryPolicy, RetryIdempotentMiddleware},
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::TracingMiddleware;
use std::{str::FromStr, sync::Arc};

/// Client for the Braintree gateway APIs.
///
/// Transient failures of idempotent requests (`GET`s and `PUT`s) are automatically retried
/// with an exponential backoff. Merchant account creations are never retried.
#[derive(Debug, Clone)]
pub struct BraintreeClient {
    /// Merchant Accounts APIs client.
    pub merchant_accounts: MerchantAccountsApi,
}

impl BraintreeClient {
    /// Builds a new [`BraintreeClient`](crate::client::BraintreeClient) with the default configuration.
    pub fn new(credentials: Credentials) -> BraintreeClient {
        BraintreeClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`BraintreeClient`](crate::client::BraintreeClient).
    pub fn builder(credentials: Credentials) -> BraintreeClientBuilder {
        BraintreeClientBuilder::new(credentials)
    }
}

/// Builder for a [`BraintreeClient`](crate::client::BraintreeClient).
#[derive(Debug)]
pub struct BraintreeClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    environment: Environment,
    credentials: Credentials,
}

impl BraintreeClientBuilder {
    /// Creates a new builder to configure a [`BraintreeClient`](crate::client::BraintreeClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: Some(DynRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            environment: Environment::Production,
            credentials,
        }
    }

    /// Consumes the builder and builds a new [`BraintreeClient`](crate::client::BraintreeClient).
    pub fn build(self) -> BraintreeClient {
        let auth_middleware = AuthenticationMiddleware {
            authorization: self.credentials.authorization(),
        };

        let inner = Arc::new(BraintreeClientInner {
            client: build_client_with_middleware(self.client, self.retry_policy, auth_middleware),
            environment: self.environment,
            merchant_id: self.credentials.merchant_id().to_string(),
        });

        BraintreeClient {
            merchant_accounts: MerchantAccountsApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Production`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Gateway environment to which a [`BraintreeClient`](crate::client::BraintreeClient) connects.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Environment {
    /// A gateway running locally.
    Development,
    Qa,
    Sandbox,
    Production,
    /// Custom environment, e.g. a mock server.
    Custom { base_url: Url },
}

impl Environment {
    /// Builds a custom environment where all the requests are sent to `url`.
    pub fn from_single_url(url: &Url) -> Environment {
        Environment::Custom {
            base_url: url.clone(),
        }
    }

    /// Base URL of the gateway for this environment.
    pub fn base_url(&self) -> Url {
        match self {
            Environment::Development => Url::parse(DEFAULT_DEVELOPMENT_URL).unwrap(),
            Environment::Qa => Url::parse(DEFAULT_QA_URL).unwrap(),
            Environment::Sandbox => Url::parse(DEFAULT_SANDBOX_URL).unwrap(),
            Environment::Production => Url::parse(DEFAULT_PRODUCTION_URL).unwrap(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    /// Parses an environment name (`development`, `qa`, `sandbox`, `production`) or a base URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "qa" => Ok(Environment::Qa),
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            url => Ok(Environment::Custom {
                base_url: Url::parse(url)?,
            }),
        }
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    auth_middleware: AuthenticationMiddleware,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectHeadersMiddleware::new())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder.with(auth_middleware).build()
}
