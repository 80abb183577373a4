//! Blocking GitHub client for issue comments.

use crate::config::{Settings, TOKEN_ENV};
use crate::core::{Comment, PrNumber, Repository};
use crate::error::{ApiError, ConfigError, Result};
use crate::github::traits::CommentApi;
use crate::github::{ACCEPT_MEDIA_TYPE, API_VERSION, COMMENTS_PER_PAGE, USER_AGENT};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::debug;

const API_VERSION_HEADER: &str = "x-github-api-version";

/// JSON payload for create and update requests.
#[derive(Serialize)]
struct CommentPayload<'a> {
    body: &'a str,
}

/// GitHub REST client scoped to one repository.
///
/// Authentication, API version and media type are sent as default
/// headers on every request.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    repository: Repository,
}

impl GitHubClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is not a valid header
    /// value, or an API error if the HTTP client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token.expose()))
            .map_err(|_| ConfigError::InvalidToken { name: TOKEN_ENV })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            repository: settings.repository.clone(),
        })
    }

    fn issue_comments_url(&self, pr: PrNumber) -> String {
        format!(
            "{}/repos/{}/{}/issues/{pr}/comments",
            self.api_url, self.repository.owner, self.repository.name
        )
    }

    fn comment_url(&self, id: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/comments/{id}",
            self.api_url, self.repository.owner, self.repository.name
        )
    }
}

impl CommentApi for GitHubClient {
    fn repository(&self) -> &Repository {
        &self.repository
    }

    fn list_comments(&self, pr: PrNumber) -> Result<Vec<Comment>> {
        let url = format!("{}?per_page={COMMENTS_PER_PAGE}", self.issue_comments_url(pr));
        debug!(%url, "fetching PR comments");

        let response = self.http.get(&url).send()?;
        let response = ensure_success(response, |status, reason| ApiError::FetchFailed {
            status,
            reason,
        })?;
        let comments: Vec<Comment> = decode(response)?;

        debug!(count = comments.len(), "fetched PR comments");
        Ok(comments)
    }

    fn update_comment(&self, id: u64, body: &str) -> Result<Comment> {
        let url = self.comment_url(id);
        debug!(%url, bytes = body.len(), "updating comment");

        let response = self
            .http
            .patch(&url)
            .json(&CommentPayload { body })
            .send()?;
        let response = ensure_success(response, |status, reason| ApiError::UpdateFailed {
            id,
            status,
            reason,
        })?;
        decode(response)
    }

    fn create_comment(&self, pr: PrNumber, body: &str) -> Result<Comment> {
        let url = self.issue_comments_url(pr);
        debug!(%url, bytes = body.len(), "creating comment");

        let response = self
            .http
            .post(&url)
            .json(&CommentPayload { body })
            .send()?;
        let response = ensure_success(response, |status, reason| ApiError::CreateFailed {
            status,
            reason,
        })?;
        decode(response)
    }
}

/// Maps a non-success status to the error built by `on_failure`.
fn ensure_success(
    response: Response,
    on_failure: impl FnOnce(u16, String) -> ApiError,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    debug!(status = status.as_u16(), "request rejected");
    Err(on_failure(status.as_u16(), reason_phrase(status)).into())
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown Status").to_string()
}

fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text()?;
    serde_json::from_str(&text).map_err(|e| ApiError::from(e).into())
}
