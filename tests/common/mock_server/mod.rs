mod middlewares;

use actix_web::{dev::Service, web, App, HttpServer};
use braintree_rust::apis::merchant_accounts::{MerchantAccount, MerchantAccountStatus};
use futures::future::{self, Either};
use std::sync::{Arc, RwLock};
use tokio::sync::oneshot;
use url::Url;

/// Number of merchant accounts served in each page of the listing endpoint.
static MOCK_PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct MockServerConfiguration {
    merchant_id: String,
    public_key: String,
    private_key: String,
    master_merchant_account_id: String,
    supported_currencies: Vec<String>,
}

#[derive(Clone, Default)]
struct MockServerStorageInner {
    merchant_accounts: Vec<MerchantAccount>,
}

impl MockServerStorageInner {
    fn find(&self, id: &str) -> Option<&MerchantAccount> {
        self.merchant_accounts.iter().find(|m| m.id == id)
    }
}

/// In-memory storage for merchant accounts created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for the Braintree merchant accounts APIs used in local integration tests.
pub struct BraintreeMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    configuration: MockServerConfiguration,
}

impl BraintreeMockServer {
    pub async fn start(merchant_id: &str, public_key: &str, private_key: &str) -> Self {
        let configuration = MockServerConfiguration {
            merchant_id: merchant_id.to_string(),
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            master_merchant_account_id: format!("{}-master", merchant_id),
            supported_currencies: vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()],
        };
        let configuration_clone = configuration.clone();

        // Seed the storage with the master merchant account
        let storage = MockServerStorage::default();
        storage
            .write()
            .unwrap()
            .merchant_accounts
            .push(MerchantAccount {
                id: configuration.master_merchant_account_id.clone(),
                status: Some(MerchantAccountStatus::Active),
                currency_iso_code: Some("USD".to_string()),
                default: true,
                master_merchant_account: None,
                individual: None,
                business: None,
                funding: None,
            });

        let authorization = middlewares::expected_authorization(&configuration);

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            let authorization = authorization.clone();

            App::new()
                .app_data(web::Data::new(configuration.clone()))
                .app_data(web::Data::new(storage.clone()))
                // Every request must carry the client headers and be authenticated
                .wrap_fn(move |req, srv| {
                    match middlewares::validate_client_headers(&req)
                        .and_then(|_| middlewares::validate_authorization(&req, &authorization))
                    {
                        Ok(()) => Either::Left(srv.call(req)),
                        Err(res) => Either::Right(future::ok(req.into_response(res))),
                    }
                })
                // Mock routes
                .service(
                    web::scope(&format!(
                        "/merchants/{}/merchant_accounts",
                        configuration.merchant_id
                    ))
                    .service(
                        web::resource("")
                            .route(web::get().to(routes::list_merchant_accounts)),
                    )
                    .service(
                        web::resource("/create_via_api")
                            .route(web::post().to(routes::create_merchant_account)),
                    )
                    .service(
                        web::resource("/create_for_currency")
                            .route(web::post().to(routes::create_merchant_account_for_currency)),
                    )
                    .service(
                        web::resource("/{id}/update_via_api")
                            .route(web::put().to(routes::update_merchant_account)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(routes::get_merchant_account_by_id)),
                    ),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
            configuration: configuration_clone,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn master_merchant_account_id(&self) -> &str {
        &self.configuration.master_merchant_account_id
    }
}

impl Drop for BraintreeMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
