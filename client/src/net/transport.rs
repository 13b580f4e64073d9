//! Browser HTTP transport over `gloo-net`.
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR): every request fails, since the session and backend
//! calls are only meaningful in the browser.

use contract::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use contract::Method;
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
                Method::Put => FetchMethod::PUT,
                Method::Delete => FetchMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;
            let response = outgoing.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError(format!(
                "{} {} is not available on the server",
                request.method.as_str(),
                request.url
            )))
        }
    }
}
