use crate::{
    apis::{
        merchant_accounts::{CreateForCurrencyResponse, MerchantAccount},
        BraintreeClientInner,
    },
    error::{ApiErrorResponse, ValidationErrors},
    pagination::{Page, PaginatedResponse},
    Error,
};
use anyhow::anyhow;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{Instrument, Span};
use urlencoding::encode;

/// Braintree Merchant Accounts APIs client.
#[derive(Clone, Debug)]
pub struct MerchantAccountsApi {
    inner: Arc<BraintreeClientInner>,
}

impl MerchantAccountsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &BraintreeClientInner {
        &self.inner
    }

    /// Creates a new merchant account.
    ///
    /// `attributes` are sent to the gateway as they are, so they can be either a
    /// [`MerchantAccountRequest`](crate::apis::merchant_accounts::MerchantAccountRequest)
    /// or any other serializable value.
    #[tracing::instrument(name = "Create Merchant Account", skip_all)]
    pub async fn create<T>(&self, attributes: &T) -> Result<MerchantAccount, Error>
    where
        T: Serialize + ?Sized,
    {
        let res: MerchantAccountResponse = self
            .inner
            .client
            .post(self.inner.merchant_url("/merchant_accounts/create_via_api")?)
            .json(&MerchantAccountBody {
                merchant_account: attributes,
            })
            .send()
            .await?
            .json()
            .await?;

        res.into_merchant_account()
    }

    /// Updates an existing merchant account.
    #[tracing::instrument(name = "Update Merchant Account", skip(self, attributes))]
    pub async fn update<T>(&self, id: &str, attributes: &T) -> Result<MerchantAccount, Error>
    where
        T: Serialize + ?Sized,
    {
        let res: MerchantAccountResponse = self
            .inner
            .client
            .put(
                self.inner
                    .merchant_url(&format!("/merchant_accounts/{}/update_via_api", encode(id)))?,
            )
            .json(&MerchantAccountBody {
                merchant_account: attributes,
            })
            .send()
            .await?
            .json()
            .await?;

        res.into_merchant_account()
    }

    /// Gets the details of an existing merchant account.
    ///
    /// A blank `id` fails with the same not found error returned by the gateway
    /// for unknown ids, without sending any request.
    #[tracing::instrument(name = "Find Merchant Account", skip(self))]
    pub async fn find(&self, id: &str) -> Result<MerchantAccount, Error> {
        if id.trim().is_empty() {
            return Err(Error::not_found());
        }

        let res: MerchantAccountResponse = self
            .inner
            .client
            .get(
                self.inner
                    .merchant_url(&format!("/merchant_accounts/{}", encode(id)))?,
            )
            .send()
            .await?
            .json()
            .await?;

        res.into_merchant_account()
    }

    /// Lists all the merchant accounts as a lazy stream.
    ///
    /// Pages are requested one at a time while the stream is consumed.
    /// Dropping the stream stops the traversal; call `list_all` again to start over.
    pub fn list_all(&self) -> BoxStream<'static, Result<MerchantAccount, Error>> {
        self.paginated(tracing::info_span!("List Merchant Accounts"))
            .into_stream()
    }

    /// Lists all the merchant accounts, fetching every page before returning.
    #[tracing::instrument(name = "Collect All Merchant Accounts", skip(self))]
    pub async fn collect_all(&self) -> Result<Vec<MerchantAccount>, Error> {
        self.paginated(Span::current()).collect_all().await
    }

    /// Creates a new merchant account for a currency, under the same master merchant.
    ///
    /// Rejections are not errors: they are returned with `success` set to `false`.
    #[tracing::instrument(name = "Create Merchant Account for Currency", skip_all)]
    pub async fn create_for_currency<T>(
        &self,
        attributes: &T,
    ) -> Result<CreateForCurrencyResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        let res = self
            .inner
            .client
            .post(self.inner.merchant_url("/merchant_accounts/create_for_currency")?)
            .json(&MerchantAccountBody {
                merchant_account: attributes,
            })
            .send()
            .await
            .map_err(Error::from);

        let mut body: Map<String, Value> = match res {
            Ok(res) => res.json().await?,
            Err(Error::ValidationError(errors)) => {
                return Ok(CreateForCurrencyResponse::from_validation_errors(errors))
            }
            Err(e) => return Err(e),
        };

        if let Some(api_error_response) = body.remove("apiErrorResponse") {
            let api_error_response: ApiErrorResponse =
                serde_json::from_value(api_error_response).map_err(|e| Error::Other(e.into()))?;
            return Ok(CreateForCurrencyResponse::from_validation_errors(
                api_error_response.into(),
            ));
        }

        CreateForCurrencyResponse::from_body(body)
    }

    /// Page fetches are recorded under `span`.
    fn paginated(&self, span: Span) -> PaginatedResponse<MerchantAccount> {
        let api = self.clone();
        PaginatedResponse::new(move |page_number| {
            let api = api.clone();
            async move { api.fetch_page(page_number).await }.instrument(span.clone())
        })
    }

    /// Fetches a single page of merchant accounts. Pages are numbered from 1.
    #[tracing::instrument(name = "Fetch Merchant Accounts Page", level = "debug", skip(self))]
    pub(crate) async fn fetch_page(&self, page_number: u32) -> Result<Page<MerchantAccount>, Error> {
        let res: ListResponse = self
            .inner
            .client
            .get(self.inner.merchant_url("/merchant_accounts")?)
            .query(&[("page", page_number)])
            .send()
            .await?
            .json()
            .await?;

        let page = res.merchant_accounts;
        Ok(Page {
            total_items: page.total_items,
            page_size: page.page_size,
            items: page.into_items()?,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MerchantAccountBody<'a, T: ?Sized> {
    merchant_account: &'a T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MerchantAccountResponse {
    merchant_account: Option<MerchantAccount>,
    api_error_response: Option<ApiErrorResponse>,
}

impl MerchantAccountResponse {
    fn into_merchant_account(self) -> Result<MerchantAccount, Error> {
        if let Some(api_error_response) = self.api_error_response {
            return Err(Error::ValidationError(ValidationErrors::from(
                api_error_response,
            )));
        }

        self.merchant_account
            .ok_or_else(|| Error::Other(anyhow!("Missing merchantAccount in response")))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    merchant_accounts: ListResponsePage,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponsePage {
    total_items: u32,
    page_size: u32,
    /// An array, or a bare object when the page holds a single item.
    #[serde(default)]
    merchant_account: Option<Value>,
}

impl ListResponsePage {
    fn into_items(self) -> Result<Vec<MerchantAccount>, Error> {
        let items = match self.merchant_account {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(item) => vec![item],
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| Error::Other(e.into())))
            .collect()
    }
}
