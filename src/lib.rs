//! Rust client for the merchant accounts APIs of the [Braintree](https://www.braintreepayments.com) gateway.
//!
//! # Usage
//!
//! ## Initialize a new `BraintreeClient`
//!
//! Create a new [`BraintreeClient`](crate::client::BraintreeClient) with the API keys of your merchant.
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, apis::auth::Credentials, client::Environment};
//! let bt = BraintreeClient::builder(Credentials::ApiKeys {
//!     merchant_id: "my-merchant-id".into(),
//!     public_key: "my-public-key".into(),
//!     private_key: "my-private-key".into(),
//! })
//! .with_environment(Environment::Sandbox)
//! .build();
//! ```
//!
//! By default, a `BraintreeClient` connects to the Production environment.
//!
//! ## Create a merchant account
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, Error, apis::merchant_accounts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let bt: BraintreeClient = unreachable!();
//! #
//! let request = MerchantAccountRequestBuilder::default()
//!     .master_merchant_account_id("my-master-merchant-account")
//!     .tos_accepted(true)
//!     .individual(IndividualRequest {
//!         first_name: Some("Jane".to_string()),
//!         last_name: Some("Doe".to_string()),
//!         email: Some("jane@14ladders.com".to_string()),
//!         ..Default::default()
//!     })
//!     .funding(FundingRequest {
//!         destination: Some(FundingDestination::Email),
//!         email: Some("funding@14ladders.com".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let merchant_account = bt.merchant_accounts.create(&request).await?;
//!
//! println!("Created new merchant account: {}", merchant_account.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Listing Merchant Accounts
//!
//! Merchant accounts are served one page at a time. [`list_all`](crate::apis::merchant_accounts::MerchantAccountsApi::list_all)
//! returns a lazy stream which fetches pages as it is consumed:
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, Error};
//! # use futures::TryStreamExt;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let bt: BraintreeClient = unreachable!();
//! #
//! let mut merchant_accounts = bt.merchant_accounts.list_all();
//! while let Some(merchant_account) = merchant_accounts.try_next().await? {
//!     tracing::info!("Merchant Account {}: {:?}", merchant_account.id, merchant_account.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! while [`collect_all`](crate::apis::merchant_accounts::MerchantAccountsApi::collect_all)
//! fetches all the pages and returns every merchant account at once.
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example merchant_accounts
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod pagination;

pub use client::BraintreeClient;
pub use error::Error;
