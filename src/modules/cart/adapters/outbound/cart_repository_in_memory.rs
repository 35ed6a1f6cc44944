// In memory cart repository.
//
// Purpose
// - Stand in for the hosted backend's cart table in tests and local runs.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::cart::adapters::outbound::cart_repository::CartRepository;
use crate::modules::cart::core::line_item::CartLineItem;

#[derive(Default)]
pub struct InMemoryCartRepository {
    rows: RwLock<HashMap<String, Vec<CartLineItem>>>,
    is_offline: bool,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn lines(&self, session_id: &str) -> Vec<CartLineItem> {
        self.rows
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Cart repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn load(&self, session_id: &str) -> anyhow::Result<Vec<CartLineItem>> {
        self.ensure_online()?;
        Ok(self.lines(session_id).await)
    }

    async fn upsert_line(&self, session_id: &str, line: &CartLineItem) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let lines = guard.entry(session_id.to_string()).or_default();
        match lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => *existing = line.clone(),
            None => lines.push(line.clone()),
        }
        Ok(())
    }

    async fn delete_line(&self, session_id: &str, line_id: &str) -> anyhow::Result<()> {
        self.ensure_online()?;
        if let Some(lines) = self.rows.write().await.get_mut(session_id) {
            lines.retain(|line| line.id != line_id);
        }
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.rows.write().await.remove(session_id);
        Ok(())
    }
}
