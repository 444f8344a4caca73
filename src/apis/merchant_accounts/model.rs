use crate::{error::ValidationErrors, Error};
use anyhow::anyhow;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccount {
    pub id: String,
    pub status: Option<MerchantAccountStatus>,
    pub currency_iso_code: Option<String>,
    #[serde(default)]
    pub default: bool,
    pub master_merchant_account: Option<Box<MerchantAccount>>,
    pub individual: Option<IndividualDetails>,
    pub business: Option<BusinessDetails>,
    pub funding: Option<FundingDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MerchantAccountStatus {
    Pending,
    Active,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl Display for MerchantAccountStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MerchantAccountStatus::Pending => "pending",
            MerchantAccountStatus::Active => "active",
            MerchantAccountStatus::Suspended => "suspended",
            MerchantAccountStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Details of the person owning a merchant account, as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn_last4: Option<String>,
    pub address: Option<Address>,
}

/// Details of the business owning a merchant account, as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub dba_name: Option<String>,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<Address>,
}

/// Where the funds of a merchant account are disbursed to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingDetails {
    pub destination: Option<FundingDestination>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub account_number_last4: Option<String>,
    pub routing_number: Option<String>,
    pub descriptor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FundingDestination {
    Bank,
    Email,
    MobilePhone,
    #[serde(other)]
    Unknown,
}

/// Attributes to create or update a merchant account.
///
/// Any other `Serialize` value can be passed instead; it is sent to the gateway as is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default, derive(Debug))]
pub struct MerchantAccountRequest {
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_accepted: Option<bool>,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_merchant_account_id: Option<String>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualRequest>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessRequest>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dba_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<FundingDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

/// Attributes to open a merchant account in a new currency.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(derive(Debug))]
pub struct CreateForCurrencyRequest {
    /// ISO 4217 code of the currency, e.g. `USD`.
    #[builder(setter(into))]
    pub currency: String,
    /// Id of the new merchant account. The gateway generates one if missing.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Outcome of [`create_for_currency`](crate::apis::merchant_accounts::MerchantAccountsApi::create_for_currency).
///
/// The gateway reports rejections in-band, so a response is returned even when
/// no merchant account was created. Always check `success`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateForCurrencyResponse {
    pub success: bool,
    /// The new merchant account. Only present when `success` is `true`.
    pub merchant_account: Option<MerchantAccount>,
    /// Validation errors reported by the gateway, if any.
    pub errors: Option<ValidationErrors>,
    /// All the other fields of the response body.
    pub other: Map<String, Value>,
}

impl CreateForCurrencyResponse {
    /// Shapes a raw response body.
    ///
    /// On success the account nested under `response.merchantAccount` is extracted and the
    /// `response` wrapper is dropped. Unsuccessful bodies are kept untouched in `other`.
    pub(crate) fn from_body(mut body: Map<String, Value>) -> Result<Self, Error> {
        let success = body
            .remove("success")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        if !success {
            return Ok(Self {
                success,
                merchant_account: None,
                errors: None,
                other: body,
            });
        }

        let merchant_account = match body.remove("response") {
            Some(Value::Object(mut response)) => response
                .remove("merchantAccount")
                .ok_or_else(|| Error::Other(anyhow!("Missing merchantAccount in response")))?,
            _ => return Err(Error::Other(anyhow!("Missing response in successful body"))),
        };

        Ok(Self {
            success,
            merchant_account: Some(
                serde_json::from_value(merchant_account).map_err(|e| Error::Other(e.into()))?,
            ),
            errors: None,
            other: body,
        })
    }

    /// Soft failure built out of a validation error.
    pub(crate) fn from_validation_errors(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            merchant_account: None,
            errors: Some(errors),
            other: Map::new(),
        }
    }
}
