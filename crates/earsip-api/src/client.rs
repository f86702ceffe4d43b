//! HTTP client shared by every endpoint.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result, message_from_body};
use crate::form::FormData;
use crate::types::Ack;

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout in seconds.
const TOTAL_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("earsip/", env!("CARGO_PKG_VERSION"));

/// Client for the E-ARSIP REST service.
///
/// Cloning is cheap and clones share the cookie store, so a session
/// established by [`ApiClient::login`] is visible to every clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Self::with_http_client(base_url, http)
    }

    /// Creates a client using a preconfigured `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { http, base })
    }

    /// Returns the base URL all resource paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves a resource path such as `inbox/42` or `/check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(Into::into)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path)?;
        execute(builder, path).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        execute(builder, path).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path)?.json(body);
        execute(builder, path).await
    }

    pub(crate) async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: FormData,
    ) -> Result<T> {
        let multipart = form.into_multipart().await?;
        let builder = self.request(method, path)?.multipart(multipart);
        execute(builder, path).await
    }

    pub(crate) async fn send_form_ack(
        &self,
        method: Method,
        path: &str,
        form: FormData,
    ) -> Result<Ack> {
        let multipart = form.into_multipart().await?;
        let builder = self.request(method, path)?.multipart(multipart);
        ack(builder, path).await
    }

    /// Sends a request whose response body is only informational.
    pub(crate) async fn send_ack(&self, method: Method, path: &str) -> Result<Ack> {
        let builder = self.request(method, path)?;
        ack(builder, path).await
    }

    pub(crate) async fn send_json_ack<B>(&self, method: Method, path: &str, body: &B) -> Result<Ack>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path)?.json(body);
        ack(builder, path).await
    }
}

/// Fails with the server's message on a non-success status.
async fn check(response: reqwest::Response, path: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = message_from_body(&body);
    warn!("{} failed with {}: {:?}", path, status, message);
    Err(Error::from_status(status, message))
}

async fn execute<T: DeserializeOwned>(builder: RequestBuilder, path: &str) -> Result<T> {
    let response = check(builder.send().await?, path).await?;
    let bytes = response.bytes().await?;
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    serde_json::from_slice(body).map_err(Into::into)
}

/// Like [`execute`], but any body that is not an `{message}` object is ignored.
async fn ack(builder: RequestBuilder, path: &str) -> Result<Ack> {
    let response = check(builder.send().await?, path).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");
    }

    #[test]
    fn test_endpoint_strips_leading_slash() {
        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(
            client.endpoint("/check").unwrap().as_str(),
            "http://localhost:5000/api/check"
        );
        assert_eq!(
            client.endpoint("outbox/verifikasi/7").unwrap().as_str(),
            "http://localhost:5000/api/outbox/verifikasi/7"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(Error::Url(_))));
    }
}
