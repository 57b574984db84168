use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Length of a generated item identifier, in hex characters
pub const ID_LEN: usize = 8;

/// A single stored item with its timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// In-memory item store shareable across async handlers
///
/// Every operation takes the lock exactly once, so creates, updates and
/// deletes are atomic to concurrent callers and readers only ever see
/// whole items.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<HashMap<String, Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item under a freshly generated identifier
    ///
    /// The caller is expected to have validated `name` already.
    pub async fn create(&self, name: String) -> Item {
        let mut items = self.inner.write().await;

        let mut id = new_id();
        while items.contains_key(&id) {
            tracing::debug!("Identifier collision on {}, regenerating", id);
            id = new_id();
        }

        let item = Item {
            id: id.clone(),
            name,
            created_at: Utc::now(),
            updated_at: None,
        };
        items.insert(id, item.clone());

        tracing::debug!("Created item with id: {}", item.id);
        item
    }

    /// Read an item by its identifier
    ///
    /// # Returns
    /// * `Some(item)` - Item found
    /// * `None` - No item with that identifier
    pub async fn get(&self, id: &str) -> Option<Item> {
        self.inner.read().await.get(id).cloned()
    }

    /// List items whose name contains `filter`, ignoring case
    ///
    /// An absent or empty filter matches every item. Results are ordered by
    /// creation time, then identifier.
    pub async fn list(&self, filter: Option<&str>) -> Vec<Item> {
        let needle = filter
            .filter(|f| !f.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<Item> = {
            let items = self.inner.read().await;
            items
                .values()
                .filter(|item| match &needle {
                    Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
                    None => true,
                })
                .cloned()
                .collect()
        };

        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        matched
    }

    /// Replace an item's name and stamp `updated_at`
    ///
    /// `id` and `created_at` are preserved. Returns `None` if the item does
    /// not exist.
    pub async fn update(&self, id: &str, name: String) -> Option<Item> {
        let mut items = self.inner.write().await;
        let item = items.get_mut(id)?;

        item.name = name;
        item.updated_at = Some(Utc::now());

        tracing::debug!("Updated item with id: {}", id);
        Some(item.clone())
    }

    /// Remove an item, returning whether it existed
    pub async fn delete(&self, id: &str) -> bool {
        let removed = self.inner.write().await.remove(id).is_some();
        if removed {
            tracing::debug!("Deleted item with id: {}", id);
        }
        removed
    }
}

fn new_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_store_is_clonable_and_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<ItemStore>();
        assert_send_sync::<ItemStore>();
    }

    #[test]
    fn test_new_id_shape() {
        let id = new_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = ItemStore::new();

        let created = store.create("First".to_string()).await;
        assert_eq!(created.name, "First");
        assert_eq!(created.id.len(), ID_LEN);
        assert!(created.updated_at.is_none());

        let fetched = store.get(&created.id).await.expect("item should exist");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = ItemStore::new();
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_list_filter_is_case_insensitive() {
        let store = ItemStore::new();
        store.create("First".to_string()).await;
        store.create("second".to_string()).await;
        store.create("FIRESIDE".to_string()).await;

        let all = store.list(None).await;
        assert_eq!(all.len(), 3);

        let empty_filter = store.list(Some("")).await;
        assert_eq!(empty_filter.len(), 3);

        let fir: HashSet<String> = store
            .list(Some("fIr"))
            .await
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(
            fir,
            HashSet::from(["First".to_string(), "FIRESIDE".to_string()])
        );

        assert!(store.list(Some("zzz")).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_order_is_stable() {
        let store = ItemStore::new();
        for i in 0..10 {
            store.create(format!("item {}", i)).await;
        }

        let first: Vec<String> = store.list(None).await.into_iter().map(|i| i.id).collect();
        let second: Vec<String> = store.list(None).await.into_iter().map(|i| i.id).collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let store = ItemStore::new();
        let created = store.create("Before".to_string()).await;

        let updated = store
            .update(&created.id, "After".to_string())
            .await
            .expect("item should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "After");
        assert!(updated.updated_at.is_some());
        assert_eq!(store.get(&created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = ItemStore::new();
        assert!(store.update("nope", "X".to_string()).await.is_none());
        assert!(store.list(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let store = ItemStore::new();
        let created = store.create("Doomed".to_string()).await;

        assert!(store.delete(&created.id).await);
        assert!(store.get(&created.id).await.is_none());
        assert!(store.update(&created.id, "Back".to_string()).await.is_none());
        assert!(!store.delete(&created.id).await);
    }

    #[tokio::test]
    async fn test_concurrent_mutations() {
        let store = ItemStore::new();

        let mut tasks = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let item = store.create(format!("task {}", i)).await;
                if i % 2 == 0 {
                    store.update(&item.id, format!("renamed {}", i)).await;
                }
                if i % 4 == 0 {
                    store.delete(&item.id).await;
                }
                item.id
            }));
        }

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap());
        }
        assert_eq!(ids.len(), 64, "identifiers must be unique");

        let remaining = store.list(None).await;
        assert_eq!(remaining.len(), 48);
        assert_eq!(store.list(Some("renamed")).await.len(), 16);
        for item in remaining {
            assert!(!item.name.trim().is_empty());
        }
    }
}
