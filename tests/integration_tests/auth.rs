use crate::common::test_context::TestContext;
use braintree_rust::{
    apis::auth::Credentials, client::Environment, error::ApiErrorKind, BraintreeClient, Error,
};

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;

    let client = BraintreeClient::builder(Credentials::ApiKeys {
        merchant_id: ctx.merchant_id().to_string(),
        public_key: "invalid-public-key".to_string(),
        private_key: "invalid-private-key".into(),
    })
    .with_retry_policy(None)
    .with_environment(ctx.environment())
    .build();

    let res = client
        .merchant_accounts
        .find(&ctx.master_merchant_account_id)
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.kind, ApiErrorKind::Authentication);
            assert_eq!(e.status, 401);
        }
        _ => panic!("Unexpected result: {:?}", res),
    }
}

#[tokio::test]
async fn unreachable_gateway() {
    let ctx = TestContext::start().await;

    // Nothing listens on port 1
    let client = BraintreeClient::builder(Credentials::ApiKeys {
        merchant_id: ctx.merchant_id().to_string(),
        public_key: "public-key".to_string(),
        private_key: "private-key".into(),
    })
    .with_retry_policy(None)
    .with_environment("http://127.0.0.1:1".parse::<Environment>().unwrap())
    .build();

    let res = client.merchant_accounts.collect_all().await;

    assert!(matches!(res, Err(Error::HttpError(_))));
}
