//! Core Spektrum client and request executor.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use spektrum_config::{ClientOptions, ResolvedConfig};

use crate::error::{Result, SpektrumError};
use crate::http::{ResponseBody, read_response};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// One logical API call: method, path, optional JSON body, extra headers.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    headers: HeaderMap,
}

impl ApiRequest {
    /// A request with no body and no extra headers.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Attach a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body).map_err(SpektrumError::Encode)?);
        Ok(self)
    }

    /// Add a header that overrides the client's defaults on this request.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::InvalidHeader`] if the name or value is not
    /// valid HTTP.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SpektrumError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| SpektrumError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A client for the Spektrum planning API.
///
/// Cheap to clone and safe to share across tasks: the resolved endpoint and
/// API key are read-only after construction.
///
/// # Example
///
/// ```no_run
/// use spektrum_sdk::{ClientOptions, SpektrumClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SpektrumClient::new(ClientOptions::new().with_api_key("sk-123"))?;
/// let project = client.create_project("user-1").await?;
/// let task = client
///     .create_task(&project.id, "Landing page", "Hero section and signup form")
///     .await?;
/// println!("{} is {}", task.title, task.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SpektrumClient {
    config: ResolvedConfig,
    http: reqwest::Client,
    default_headers: HeaderMap,
}

impl SpektrumClient {
    /// Create a client, resolving unset options from `SPEKTRUM_*` env vars.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::Config`] if no API key can be resolved.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::from_config(options.resolve()?)
    }

    /// Create a client entirely from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::Config`] if `SPEKTRUM_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::default())
    }

    /// Create a client from an already resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::InvalidHeader`] if the API key is not a valid
    /// header value, or [`SpektrumError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn from_config(config: ResolvedConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key())
            .map_err(|e| SpektrumError::InvalidHeader(format!("{API_KEY_HEADER}: {e}")))?;
        api_key.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http = reqwest::Client::builder()
            .user_agent(concat!("spektrum-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(endpoint = config.endpoint(), "spektrum client ready");

        Ok(Self {
            config,
            http,
            default_headers,
        })
    }

    /// Resolved base URL, without trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    #[must_use]
    pub const fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.endpoint())
    }

    /// Send one request and decode the body leniently.
    ///
    /// Default headers (`content-type: application/json`, `x-api-key`) are
    /// sent on every request; headers on `request` replace them by name.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError::Request`] on a non-success status and
    /// [`SpektrumError::Transport`] if the exchange itself fails.
    pub async fn execute(&self, request: ApiRequest) -> Result<ResponseBody> {
        let ApiRequest {
            method,
            path,
            body,
            headers,
        } = request;

        let mut merged = self.default_headers.clone();
        merged.extend(headers);

        tracing::debug!(%method, path = path.as_str(), "sending request");
        let mut builder = self.http.request(method.clone(), self.url(&path)).headers(merged);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        tracing::debug!(
            status = resp.status().as_u16(),
            path = path.as_str(),
            "received response"
        );

        read_response(resp).await.inspect_err(|e| {
            if let Some(status) = e.status() {
                tracing::warn!(%method, path = path.as_str(), status, "request rejected");
            }
        })
    }

    /// Send one request and decode a successful body into `T`.
    ///
    /// An empty body decodes as JSON `null` and a non-JSON body as a JSON
    /// string, so `T = ()` or `T = Option<_>` accept empty responses.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus [`SpektrumError::Decode`] if
    /// the body does not match `T`.
    pub async fn execute_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_value(body.into_value())?)
    }
}
