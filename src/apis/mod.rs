//! Clients for the various gateway APIs.

use crate::{client::Environment, Error};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};
use urlencoding::encode;

pub mod auth;
pub mod merchant_accounts;

pub(crate) struct BraintreeClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
    pub(crate) merchant_id: String,
}

impl BraintreeClientInner {
    /// Root under which all the endpoints of the configured merchant live.
    pub(crate) fn base_merchant_path(&self) -> String {
        format!(
            "{}/merchants/{}",
            self.environment.base_url().as_str().trim_end_matches('/'),
            encode(&self.merchant_id)
        )
    }

    /// Builds the full URL of an endpoint, given its path relative to the merchant root.
    pub(crate) fn merchant_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{}", self.base_merchant_path(), path))
            .map_err(|e| Error::Other(e.into()))
    }
}

impl Debug for BraintreeClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraintreeClientInner")
            .field("environment", &self.environment)
            .field("merchant_id", &self.merchant_id)
            .finish_non_exhaustive()
    }
}
