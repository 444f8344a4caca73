use crate::common::{API_VERSION, API_VERSION_HEADER};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent`, `Accept` and API version headers to all outgoing requests.
pub struct InjectHeadersMiddleware {
    user_agent: HeaderValue,
}

impl InjectHeadersMiddleware {
    pub fn new() -> Self {
        Self {
            user_agent: HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        next.run(req, extensions).await
    }
}
