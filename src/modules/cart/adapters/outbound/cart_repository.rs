use async_trait::async_trait;

use crate::modules::cart::core::line_item::CartLineItem;

/// Cart rows held by the hosted backend, keyed by session or user id.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self, session_id: &str) -> anyhow::Result<Vec<CartLineItem>>;
    async fn upsert_line(&self, session_id: &str, line: &CartLineItem) -> anyhow::Result<()>;
    async fn delete_line(&self, session_id: &str, line_id: &str) -> anyhow::Result<()>;
    async fn clear(&self, session_id: &str) -> anyhow::Result<()>;
}
