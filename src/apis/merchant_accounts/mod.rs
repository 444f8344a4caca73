//! APIs and models related to merchant accounts.

mod api;
mod model;

pub use api::MerchantAccountsApi;
pub use model::*;
