//! REST client for the Rooli backend
//!
//! One method per backend operation. Responses arrive wrapped in a
//! `{ "data": ... }` envelope; non-2xx responses carry a `message` which is
//! surfaced in the returned error. No retry policy lives here.

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::{
    ContentType, CreatePostPayload, MediaFile, Platform, PostStatus, ScheduledPost, SocialProfile,
    User,
};

/// Client for the backend REST API
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

/// Tokens and user returned by a successful login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub access_token: String,
    /// Refresh token, when the backend issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Organization the user belongs to
    #[serde(default)]
    pub organization_id: Option<String>,
    /// The authenticated user
    pub user: User,
}

/// Filters for listing workspace posts
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    /// Only posts in this status
    pub status: Option<PostStatus>,
    /// Only posts of this content type
    pub content_type: Option<ContentType>,
    /// Free-text search
    pub search: Option<String>,
}

impl PostQuery {
    /// Render as a URL query string (empty when no filter is set)
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(status) = self.status {
            params.push(format!("status={}", status.as_str()));
        }
        if let Some(content_type) = self.content_type {
            params.push(format!("contentType={}", content_type.as_str()));
        }
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// The backend's `{ "data": ... }` response envelope
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct AuthUrl {
    url: String,
}

impl ApiClient {
    /// Create an unauthenticated client (login only)
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Create a client that sends the given bearer token
    pub fn with_token(base_url: &str, access_token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: Some(access_token.to_string()),
        }
    }

    /// Build API URL
    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Attach the bearer token, when present
    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Exchange credentials for tokens and the user profile
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Failed to reach the login endpoint")?;

        read_data(response, "logging in").await
    }

    /// List the social profiles connected to a workspace
    pub async fn social_profiles(&self, workspace_id: &str) -> Result<Vec<SocialProfile>> {
        let response = self
            .authed(
                self.client
                    .get(self.url(&format!("/workspaces/{workspace_id}/social-profiles"))),
            )
            .send()
            .await
            .context("Failed to fetch social profiles")?;

        read_data(response, "fetching social profiles").await
    }

    /// Get the OAuth URL to connect a new social account
    pub async fn connect_auth_url(
        &self,
        platform: Platform,
        organization_id: &str,
    ) -> Result<String> {
        let query = format!(
            "?platform={}&organizationId={}",
            platform.as_str(),
            urlencoding::encode(organization_id)
        );
        let response = self
            .authed(
                self.client
                    .get(self.url(&format!("/social-connections/auth-url{query}"))),
            )
            .send()
            .await
            .context("Failed to fetch the connect URL")?;

        let auth: AuthUrl = read_data(response, "fetching the connect URL").await?;
        Ok(auth.url)
    }

    /// Create a scheduled post in a workspace
    pub async fn create_post(
        &self,
        workspace_id: &str,
        payload: &CreatePostPayload,
    ) -> Result<ScheduledPost> {
        let response = self
            .authed(
                self.client
                    .post(self.url(&format!("/workspaces/{workspace_id}/posts")))
                    .json(payload),
            )
            .send()
            .await
            .context("Failed to create post")?;

        read_data(response, "creating the post").await
    }

    /// List a workspace's posts
    pub async fn posts(&self, workspace_id: &str, query: &PostQuery) -> Result<Vec<ScheduledPost>> {
        let response = self
            .authed(self.client.get(self.url(&format!(
                "/workspaces/{workspace_id}/posts{}",
                query.to_query_string()
            ))))
            .send()
            .await
            .context("Failed to fetch posts")?;

        read_data(response, "fetching posts").await
    }

    /// Fetch one post by id
    pub async fn post(&self, workspace_id: &str, post_id: &str) -> Result<ScheduledPost> {
        let response = self
            .authed(
                self.client
                    .get(self.url(&format!("/workspaces/{workspace_id}/posts/{post_id}"))),
            )
            .send()
            .await
            .context("Failed to fetch post")?;

        read_data(response, "fetching the post").await
    }

    /// Delete a post
    pub async fn delete_post(&self, workspace_id: &str, post_id: &str) -> Result<()> {
        let response = self
            .authed(
                self.client
                    .delete(self.url(&format!("/workspaces/{workspace_id}/posts/{post_id}"))),
            )
            .send()
            .await
            .context("Failed to delete post")?;

        ensure_success(response, "deleting the post").await
    }

    /// Upload a file to the workspace's media library
    ///
    /// Only the resulting media id and metadata are kept; the bytes are
    /// never inspected client-side.
    pub async fn upload_media(&self, workspace_id: &str, path: &Path) -> Result<MediaFile> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let filename = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().to_string());

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(filename),
            );

        let response = self
            .authed(
                self.client
                    .post(self.url(&format!("/workspaces/{workspace_id}/media/upload")))
                    .multipart(form),
            )
            .send()
            .await
            .context("Failed to upload media")?;

        read_data(response, "uploading media").await
    }

    /// Delete a media file
    pub async fn delete_media(&self, workspace_id: &str, media_id: &str) -> Result<()> {
        let response = self
            .authed(
                self.client
                    .delete(self.url(&format!("/workspaces/{workspace_id}/media/{media_id}"))),
            )
            .send()
            .await
            .context("Failed to delete media")?;

        ensure_success(response, "deleting media").await
    }
}

/// Unwrap the data envelope, turning non-2xx responses into errors
async fn read_data<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> Result<T> {
    let response = check_status(response, what).await?;
    let envelope: Envelope<T> = response
        .json()
        .await
        .with_context(|| format!("Failed to parse the response while {what}"))?;
    Ok(envelope.data)
}

/// Like [`read_data`] but discards the body
async fn ensure_success(response: reqwest::Response, what: &str) -> Result<()> {
    check_status(response, what).await.map(|_| ())
}

async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(body);
    anyhow::bail!("Backend error {status} while {what}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(PostQuery::default().to_query_string(), "");
    }

    #[test]
    fn query_filters_use_wire_names() {
        let query = PostQuery {
            page: Some(2),
            limit: Some(10),
            status: Some(PostStatus::PendingApproval),
            content_type: Some(ContentType::Reel),
            search: Some("spring launch".to_string()),
        };

        assert_eq!(
            query.to_query_string(),
            "?page=2&limit=10&status=PENDING_APPROVAL&contentType=REEL&search=spring%20launch"
        );
    }
}
