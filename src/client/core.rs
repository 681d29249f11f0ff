use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::errors::{BuildError, Result};

const DEFAULT_USER_AGENT: &str = concat!("folio", "/", env!("CARGO_PKG_VERSION"));

/// Default backend base URL; matches the local development proxy target.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configures a [`FolioClient`] before construction.
///
/// Customize the backend base URL, request timeout, and user-agent. Most
/// code obtains this via [`FolioClient::builder()`], which simply returns
/// `FolioClientBuilder::default()`.
///
/// # Defaults
/// - Base URL: [`DEFAULT_BASE_URL`]
/// - HTTP request timeout: reqwest default (no global timeout) unless set
///   via [`Self::request_timeout`]
/// - User-agent: `folio/<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use folio::FolioClient;
/// let client = FolioClient::builder()
///     .base_url("https://folio.example/api/backend")
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, folio::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct FolioClientBuilder {
    base_url: Option<String>,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl FolioClientBuilder {
    /// Set the backend base URL. A trailing slash is optional; endpoint
    /// paths (which always start with `/`) are appended verbatim, so a base
    /// with a path prefix like `/api/backend` is preserved.
    pub fn base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default `folio/<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build [`FolioClient`].
    pub fn build(&self) -> std::result::Result<FolioClient, BuildError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw.trim_end_matches('/'))?;

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT.to_string(),
        };

        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(FolioClient {
            http: http_builder.build()?,
            base_url,
        })
    }
}

/// Transport client for the Folio backend.
///
/// `FolioClient` is the low-level, stateless engine the stateful drivers
/// ([`crate::ProfileStore`], [`crate::ExperienceManager`],
/// [`crate::PublicProfileView`]) are built on. It owns one reqwest HTTP
/// client and the backend base URL.
///
/// ### What it does
/// - Joins endpoint paths onto the base URL and attaches
///   `Authorization: Bearer <token>` when a token is supplied.
/// - Exposes one typed wrapper per REST operation (see the methods on this
///   type), serializing bodies as JSON — except sign-in, which the backend
///   accepts as an OAuth2 password form.
/// - Normalizes every non-2xx response into
///   [`crate::errors::RequestError::Server`] carrying the body's `detail`
///   message.
///
/// ### What it *doesn't* do
/// - It is **not** session aware: it never reads or clears the stored
///   token. Authentication-failure handling (sign-out and redirect) is a
///   cross-cutting rule applied by the stateful drivers.
///
/// ### Construction
/// Use [`FolioClient::builder()`] to set the base URL or timeouts, or pick
/// defaults via [`FolioClient::new()`].
///
/// Concurrency: cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct FolioClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
}

impl FolioClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> std::result::Result<FolioClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating [`FolioClient`].
    pub fn builder() -> FolioClientBuilder {
        FolioClientBuilder::default()
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request for `endpoint` (must start with `/`), attaching the
    /// bearer token when one is supplied.
    ///
    /// Prefer the typed endpoint wrappers; this is the escape hatch for
    /// custom calls.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<RequestBuilder> {
        // `Url` renders a bare origin with a trailing `/`; endpoints always
        // start with one, so trim to avoid a double slash.
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = Url::parse(&format!("{base}{endpoint}"))?;
        let mut rb = self.http.request(method, url);
        if let Some(token) = token {
            rb = rb.bearer_auth(token);
        }
        Ok(rb)
    }
}
