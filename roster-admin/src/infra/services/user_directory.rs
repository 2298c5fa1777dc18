use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use roster_core::UserRecord;

use crate::infra::api_client::ApiClient;

/// Source of the member list.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}

/// Reads the member list from a JSON array at a fixed URL.
#[derive(Clone, Debug)]
pub struct HttpUserDirectory {
    client: Arc<ApiClient>,
    url: String,
}

impl HttpUserDirectory {
    pub fn new(client: Arc<ApiClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.client
            .get_json::<Vec<UserRecord>>(&self.url)
            .await
            .context("Failed to load members")
    }
}
