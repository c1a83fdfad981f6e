use http::Method;
use tracing::debug;

use crate::config::*;
use crate::core::errors::Result;
use crate::core::helpers::{decode_json, ensure_success, json_request};
use crate::core::transport::Transport;
use crate::models::models::{FeedScope, NewPost, Post, ProfileDetails};

/// Typed calls against the posts backend.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        ApiClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, method: Method, path: &str, body: Vec<u8>) -> Result<http::Response<Vec<u8>>> {
        let request = json_request(method.clone(), path, body)?;
        let response = self.transport.send(request).await?;
        debug!(%method, path, status = %response.status(), "api call");
        ensure_success(response)
    }

    pub async fn list_posts(&self, scope: &FeedScope) -> Result<Vec<Post>> {
        let path = match scope {
            FeedScope::All => POSTS_PATH.to_string(),
            FeedScope::User(user_id) => user_posts_path(user_id),
        };
        let response = self.call(Method::GET, &path, Vec::new()).await?;
        decode_json(&response)
    }

    pub async fn add_post(&self, draft: &NewPost) -> Result<Post> {
        let body = serde_json::to_vec(draft)?;
        let response = self.call(Method::POST, ADD_POST_PATH, body).await?;
        decode_json(&response)
    }

    pub async fn profile_details(&self) -> Result<ProfileDetails> {
        let response = self.call(Method::GET, PROFILE_DETAILS_PATH, Vec::new()).await?;
        decode_json(&response)
    }

    /// The follow endpoints' bodies carry nothing the client uses.
    pub async fn follow(&self, user_id: &str) -> Result<()> {
        self.call(Method::POST, &follow_path(user_id), Vec::new()).await?;
        Ok(())
    }

    pub async fn unfollow(&self, user_id: &str) -> Result<()> {
        self.call(Method::POST, &unfollow_path(user_id), Vec::new()).await?;
        Ok(())
    }

    /// Returns the location to navigate to: the `Location` header when the
    /// server answers with a redirect, otherwise the edit-profile path itself.
    /// A redirect without `Location` is a failed request.
    pub async fn edit_profile_page(&self) -> Result<String> {
        let request = json_request(Method::GET, EDIT_PROFILE_PATH, Vec::new())?;
        let response = self.transport.send(request).await?;
        debug!(path = EDIT_PROFILE_PATH, status = %response.status(), "api call");

        if response.status().is_redirection() {
            if let Some(location) = response
                .headers()
                .get(http::header::LOCATION)
                .and_then(|v| v.to_str().ok())
            {
                return Ok(location.to_string());
            }
        }

        ensure_success(response)?;
        Ok(EDIT_PROFILE_PATH.to_string())
    }
}
