use braintree_rust::{apis::auth::Credentials, client::Environment, BraintreeClient};

pub struct TestContext {
    pub client: BraintreeClient,
    pub master_merchant_account_id: String,
    merchant_id: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let merchant_id = std::env::var("ACCEPTANCE_TESTS_MERCHANT_ID").unwrap();
        let public_key = std::env::var("ACCEPTANCE_TESTS_PUBLIC_KEY").unwrap();
        let private_key = std::env::var("ACCEPTANCE_TESTS_PRIVATE_KEY").unwrap();
        let master_merchant_account_id =
            std::env::var("ACCEPTANCE_TESTS_MASTER_MERCHANT_ACCOUNT_ID").unwrap();

        // Configure a new BraintreeClient to point to Sandbox
        let client = BraintreeClient::builder(Credentials::ApiKeys {
            merchant_id: merchant_id.clone(),
            public_key,
            private_key: private_key.into(),
        })
        .with_environment(Environment::Sandbox)
        .build();

        Self {
            client,
            master_merchant_account_id,
            merchant_id,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::Sandbox
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}
