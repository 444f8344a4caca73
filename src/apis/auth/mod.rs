//! Credentials used to authenticate against the gateway.

mod model;

pub use model::*;
