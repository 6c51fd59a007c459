//! Client layer: holds configuration and dispatches assembled requests.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{
    ActionOptions, ApiResponse, BaseUrl, CreateAction, CreatePage, Credentials, DonationPush,
    FindPages, ListPages, PageId, UserId, ValidationError,
};
use crate::transport::{HttpMethod, HttpRequest};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<ApiResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<ApiResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self
                .client
                .request(method, request.url.as_str())
                .basic_auth(credentials.username(), Some(credentials.password()));
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ApiResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Connector`].
///
/// Remote statuses are not errors: any response that arrives, 2xx or not, is returned as an
/// [`ApiResponse`].
pub enum ActionKitError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc), passed through unmodified.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A donation submission was rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`Connector`].
///
/// Use this when you need to customize the timeout or user-agent of the underlying HTTP client.
pub struct ConnectorBuilder {
    credentials: Credentials,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ConnectorBuilder {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            base_url: BaseUrl::new(base_url),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Connector, ActionKitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ActionKitError::Transport(Box::new(err)))?;

        Ok(Connector {
            credentials: self.credentials,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// ActionKit REST client.
///
/// Holds the basic-auth credentials and base URL; both can be changed between calls. Each
/// operation sends exactly one request and returns the raw [`ApiResponse`], whatever its status.
pub struct Connector {
    credentials: Credentials,
    base_url: BaseUrl,
    http: Arc<dyn HttpTransport>,
}

impl Connector {
    /// Create a connector with a default HTTP client.
    ///
    /// For more customization, use [`Connector::builder`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            base_url: BaseUrl::new(base_url),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ConnectorBuilder {
        ConnectorBuilder::new(username, password, base_url)
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Credentials the next request will authenticate with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.credentials = Credentials::new(username, self.credentials.password());
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials = Credentials::new(self.credentials.username(), password);
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = BaseUrl::new(base_url);
    }

    /// `GET /petitionpage/` with `_limit` and `_offset`.
    pub async fn list_petition_pages(
        &self,
        request: ListPages,
    ) -> Result<ApiResponse, ActionKitError> {
        self.dispatch(crate::transport::encode_list_pages(&self.base_url, &request))
            .await
    }

    /// `GET /petitionpage/` with `_limit`, `_offset` and `name`.
    pub async fn find_petition_pages(
        &self,
        request: FindPages,
    ) -> Result<ApiResponse, ActionKitError> {
        self.dispatch(crate::transport::encode_find_pages(&self.base_url, &request))
            .await
    }

    /// `GET /petitionpage/{id}/`.
    pub async fn petition_page(&self, id: PageId) -> Result<ApiResponse, ActionKitError> {
        self.dispatch(crate::transport::encode_get_page(&self.base_url, id))
            .await
    }

    /// `POST /petitionpage/` creating a visible petition page.
    pub async fn create_petition_page(
        &self,
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Result<ApiResponse, ActionKitError> {
        self.create_page(CreatePage::petition(name, title, language, canonical_url))
            .await
    }

    /// `POST /donationpage/` creating a visible donation page.
    pub async fn create_donation_page(
        &self,
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Result<ApiResponse, ActionKitError> {
        self.create_page(CreatePage::donation(name, title, language, canonical_url))
            .await
    }

    async fn create_page(&self, request: CreatePage) -> Result<ApiResponse, ActionKitError> {
        let request = crate::transport::encode_create_page(&self.base_url, &request)
            .map_err(|err| ActionKitError::Encode(Box::new(err)))?;
        self.dispatch(request).await
    }

    /// `POST /action/` for `email` on the page named `page`.
    ///
    /// Only the options ActionKit accepts are forwarded; see [`crate::filter_action_options`].
    pub async fn create_action(
        &self,
        page: impl Into<String>,
        email: impl Into<String>,
        options: ActionOptions,
    ) -> Result<ApiResponse, ActionKitError> {
        let action = CreateAction::new(page, email).with_options(options);
        let request = crate::transport::encode_create_action(&self.base_url, &action)
            .map_err(|err| ActionKitError::Encode(Box::new(err)))?;
        self.dispatch(request).await
    }

    /// `POST /donationpush/` with a validated submission.
    ///
    /// Errors:
    /// - Returns [`ActionKitError::Validation`] before any request is sent when a required key
    ///   is missing; the first failing gate wins.
    pub async fn create_donation_action(
        &self,
        submission: Value,
    ) -> Result<ApiResponse, ActionKitError> {
        let push = DonationPush::from_value(submission).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected donation submission");
        })?;
        let request = crate::transport::encode_donation_push(&self.base_url, &push)
            .map_err(|err| ActionKitError::Encode(Box::new(err)))?;
        self.dispatch(request).await
    }

    /// `GET /user/{id}/`.
    pub async fn user(&self, id: UserId) -> Result<ApiResponse, ActionKitError> {
        self.dispatch(crate::transport::encode_get_user(&self.base_url, id))
            .await
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<ApiResponse, ActionKitError> {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            username = self.credentials.username(),
            "sending ActionKit request"
        );
        let response = self
            .http
            .execute(request, &self.credentials)
            .await
            .map_err(ActionKitError::Transport)?;
        tracing::debug!(status = response.status, "received ActionKit response");
        Ok(response)
    }
}
