use base64::prelude::*;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Credentials used to authenticate against the gateway APIs.
///
/// Every request is scoped to the merchant identified by `merchant_id`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// Public/private API key pair, sent with HTTP Basic authentication.
    ApiKeys {
        merchant_id: String,
        public_key: String,
        private_key: Token,
    },
    /// OAuth access token, sent as a bearer token.
    AccessToken {
        merchant_id: String,
        access_token: Token,
    },
}

impl Credentials {
    /// Returns a reference to the merchant id stored in this [`Credentials`](crate::apis::auth::Credentials).
    pub fn merchant_id(&self) -> &str {
        match self {
            Credentials::ApiKeys { merchant_id, .. }
            | Credentials::AccessToken { merchant_id, .. } => merchant_id,
        }
    }

    /// Value of the `Authorization` header for these credentials.
    pub(crate) fn authorization(&self) -> Token {
        match self {
            Credentials::ApiKeys {
                public_key,
                private_key,
                ..
            } => Token::new(format!(
                "Basic {}",
                BASE64_STANDARD.encode(format!("{}:{}", public_key, private_key.expose_secret()))
            )),
            Credentials::AccessToken { access_token, .. } => {
                Token::new(format!("Bearer {}", access_token.expose_secret()))
            }
        }
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use braintree_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
