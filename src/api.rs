// API client module: a small blocking client for the Assembly64 search
// service. Every call goes through `exchange`, which performs exactly one
// request/response round-trip with an explicit timeout.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, info_span, Span};

use crate::config::{ClientConfig, Timeout};
use crate::error::{Error, Result};
use crate::models::{ContentEntries, Preset, SearchResultItem};
use crate::transport::{HttpMethod, HttpRequest, ReqwestTransport, Transport};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_BINARY: &str = "application/octet-stream";

/// Decoded response body, shaped by the declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Binary(Vec<u8>),
    Text(String),
}

/// Per-call parameters of an exchange. The timeout is passed separately.
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    /// Appended verbatim to the client's base URL.
    pub path: String,
    pub body: Option<String>,
    /// Form-encoded into the query string, in order.
    pub query: Option<Vec<(String, String)>>,
    pub content_type: String,
    /// Overrides the GET/POST choice made from the presence of a body.
    pub method: Option<HttpMethod>,
    pub cookie: Option<String>,
}

impl ExchangeRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: None,
            query: None,
            content_type: CONTENT_TYPE_JSON.to_string(),
            method: None,
            cookie: None,
        }
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie;
        self
    }
}

/// Client for one Assembly64 endpoint.
///
/// Holds the endpoint configuration, the transport and the tracing span all
/// of its log events are recorded under.
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
    span: Span,
}

impl ApiClient<ReqwestTransport> {
    /// Build a client that talks HTTP through a blocking `reqwest` client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let span = info_span!("assembly64", base_url = %config.base_url);
        Self {
            transport,
            config,
            span,
        }
    }

    /// Replace the span log events are recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve an `ExchangeRequest` into the request that goes on the wire.
    pub fn build_request(&self, req: &ExchangeRequest, timeout: Timeout) -> HttpRequest {
        let mut url = format!("{}{}", self.config.base_url, req.path);
        if let Some(query) = &req.query {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }

        let mut headers = Vec::new();
        if req.body.is_some() {
            headers.push(("Content-Type".to_string(), req.content_type.clone()));
        }
        if let Some(cookie) = &req.cookie {
            headers.push(("cookie".to_string(), cookie.clone()));
            headers.push(("origin".to_string(), self.config.base_url.clone()));
            headers.push(("accept".to_string(), "text/html".to_string()));
            headers.push(("cache-control".to_string(), "max-age=0".to_string()));
        }

        let method = req.method.unwrap_or(if req.body.is_some() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        });

        HttpRequest {
            method,
            url,
            headers,
            body: req.body.as_ref().map(|b| b.as_bytes().to_vec()),
            timeout: timeout.duration(),
        }
    }

    /// Perform one exchange and decode the body according to
    /// `req.content_type`. An empty body yields `None`.
    pub fn exchange(&self, req: &ExchangeRequest, timeout: Timeout) -> Result<Option<Payload>> {
        let Some(body) = self.send(req, timeout)? else {
            return Ok(None);
        };
        let payload = match req.content_type.as_str() {
            CONTENT_TYPE_JSON => Payload::Json(serde_json::from_slice(&body)?),
            CONTENT_TYPE_BINARY => Payload::Binary(body),
            _ => Payload::Text(String::from_utf8(body)?),
        };
        Ok(Some(payload))
    }

    /// Exchange and deserialize the JSON body into `D`.
    pub fn exchange_json<D: DeserializeOwned>(
        &self,
        req: &ExchangeRequest,
        timeout: Timeout,
    ) -> Result<Option<D>> {
        match self.send(req, timeout)? {
            Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
            None => Ok(None),
        }
    }

    /// Exchange and return the body bytes untouched.
    pub fn exchange_binary(&self, req: &ExchangeRequest, timeout: Timeout) -> Result<Option<Vec<u8>>> {
        self.send(req, timeout)
    }

    pub fn exchange_text(&self, req: &ExchangeRequest, timeout: Timeout) -> Result<Option<String>> {
        match self.send(req, timeout)? {
            Some(body) => Ok(Some(String::from_utf8(body)?)),
            None => Ok(None),
        }
    }

    /// Shared round-trip: log, execute, check the status, drop empty bodies.
    fn send(&self, req: &ExchangeRequest, timeout: Timeout) -> Result<Option<Vec<u8>>> {
        let _enter = self.span.enter();
        let request = self.build_request(req, timeout);

        debug!(method = request.method.as_str(), url = %request.url, "opening URL");
        if let Some(body) = &req.body {
            debug!(content_type = %req.content_type, "attaching request body");
            if req.content_type == CONTENT_TYPE_JSON {
                debug!(%body, "POST data");
            }
        }

        let response = self.transport.execute(&request)?;
        if !response.is_success() {
            error!(
                status = response.status,
                reason = %response.reason,
                "HTTP error"
            );
            let body = if response.body.is_empty() {
                info!("no HTTP error body");
                None
            } else {
                let text = String::from_utf8_lossy(&response.body).into_owned();
                error!(body = %text, "HTTP error body");
                Some(text)
            };
            return Err(Error::Http {
                status: response.status,
                reason: response.reason,
                body,
            });
        }

        if response.body.is_empty() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    fn endpoint(&self, path: String) -> ExchangeRequest {
        ExchangeRequest::new(path).cookie(self.config.cookie.clone())
    }

    /// List the server's filter presets.
    pub fn presets(&self) -> Result<Vec<Preset>> {
        let req = self.endpoint("/search/aql/presets".to_string());
        Ok(self.exchange_json(&req, self.config.timeout)?.unwrap_or_default())
    }

    /// Run an AQL query (see `query::build_query`).
    pub fn search(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        let req = self
            .endpoint("/search/aql".to_string())
            .query_param("query", query);
        Ok(self.exchange_json(&req, self.config.timeout)?.unwrap_or_default())
    }

    /// Content entries of a search result.
    pub fn entries(&self, id: &str, category: u32) -> Result<ContentEntries> {
        let req = self.endpoint(format!("/search/entries/{id}/{category}"));
        Ok(self.exchange_json(&req, self.config.timeout)?.unwrap_or_default())
    }

    /// Raw bytes of one content item. An empty file comes back as an empty vec.
    pub fn download(&self, id: &str, category: u32, item_id: u32) -> Result<Vec<u8>> {
        let req = self
            .endpoint(format!("/search/bin/{id}/{category}/{item_id}"))
            .content_type(CONTENT_TYPE_BINARY);
        Ok(self.exchange_binary(&req, self.config.timeout)?.unwrap_or_default())
    }
}
