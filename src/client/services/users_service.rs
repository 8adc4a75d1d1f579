use anyhow::anyhow;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use url::Url;

use crate::client::models::user::UserRecord;

/// HTTP access to the remote `/users` collection.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool,
/// so every in-flight operation gets its own copy.
#[derive(Debug, Clone)]
pub struct UsersService {
    client: Client,
    base_url: Url,
}

impl UsersService {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `{base}/users` or `{base}/users/{id}`, with `id` percent-encoded as a
    /// single path segment.
    pub fn endpoint(&self, id: Option<&str>) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("base URL cannot hold a path: {}", self.base_url))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// GET /users
    pub async fn list(&self) -> anyhow::Result<Vec<UserRecord>> {
        let url = self.endpoint(None)?;
        let resp = self.send(Method::GET, url, None).await?;
        let users = resp.json::<Vec<UserRecord>>().await?;
        debug!("[USERS] fetched {} users", users.len());
        Ok(users)
    }

    /// DELETE /users/{id}. Any 2xx counts as success, the body is ignored.
    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let url = self.endpoint(Some(id))?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// PUT /users/{id} with the whole record; returns the record as stored by the server.
    pub async fn update(&self, user: &UserRecord) -> anyhow::Result<UserRecord> {
        let url = self.endpoint(Some(&user.id))?;
        let body = serde_json::to_string(user)?;
        let resp = self.send(Method::PUT, url, Some(body)).await?;
        Ok(resp.json::<UserRecord>().await?)
    }

    async fn send(&self, method: Method, url: Url, json_body: Option<String>) -> anyhow::Result<Response> {
        debug!("[USERS] {} {}", method, url);
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = json_body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = request.send().await.map_err(|e| {
            warn!("[USERS] {} {} failed: {}", method, url, e);
            e
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("[USERS] {} {} returned {}", method, url, status);
            return Err(anyhow!("{} {} returned {}", method, url, status));
        }
        Ok(resp)
    }
}
