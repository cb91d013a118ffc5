use crate::util;
use common::{Todo, TodoError, TodoList};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

pub const TODOS_FILE: &str = "todos.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
}

// The to-do list shared by every request, mirrored to disk after each change
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Arc<RwLock<TodoList>>,
    path: PathBuf,
}

impl TodoStore {
    pub async fn load(data_dir: &Path) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: data_dir.to_path_buf(),
                source,
            })?;
        let path = data_dir.join(TODOS_FILE);
        let todos = read_todos(&path).await;
        info!("loaded {} todos from {}", todos.items().len(), path.display());
        Ok(TodoStore {
            todos: Arc::new(RwLock::new(todos)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn items(&self) -> Vec<Todo> {
        self.todos.read().await.items().to_vec()
    }

    pub async fn add(&self, title: &str) -> Result<Todo, TodoError> {
        let mut todos = self.todos.write().await;
        let todo = todos.add(title, now_micros())?;
        self.save(&todos).await;
        Ok(todo)
    }

    pub async fn toggle(&self, id: i64) -> Result<Todo, TodoError> {
        let mut todos = self.todos.write().await;
        let todo = todos.toggle(id)?;
        self.save(&todos).await;
        Ok(todo)
    }

    pub async fn remove(&self, id: i64) -> Result<Todo, TodoError> {
        let mut todos = self.todos.write().await;
        let todo = todos.remove(id)?;
        self.save(&todos).await;
        Ok(todo)
    }

    // The in-memory change stands even if the file can't be written
    async fn save(&self, todos: &TodoList) {
        let bytes = match serde_json::to_vec_pretty(todos) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("{}", StoreError::from(err));
                return;
            }
        };
        if util::retry(1, || write_todos(self.path.clone(), bytes.clone()))
            .await
            .is_err()
        {
            error!("could not persist todos to {}", self.path.display());
        }
    }
}

async fn read_todos(path: &Path) -> TodoList {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return TodoList::default(),
        Err(err) => {
            warn!("Error reading todos from {}: {}", path.display(), err);
            return TodoList::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(todos) => todos,
        Err(err) => {
            warn!("Error parsing todos from {}: {}", path.display(), err);
            TodoList::default()
        }
    }
}

async fn write_todos(path: PathBuf, bytes: Vec<u8>) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| StoreError::Io { path, source })
}

fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup_store() -> (TempDir, TodoStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = TodoStore::load(dir.path()).await.expect("Failed to load store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let (dir, store) = setup_store().await;
        assert!(store.items().await.is_empty());
        assert_eq!(store.path(), dir.path().join(TODOS_FILE));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_load_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested").join("data");
        TodoStore::load(&data_dir).await.unwrap();
        assert!(data_dir.is_dir());
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(TODOS_FILE), "{not json").unwrap();
        let store = TodoStore::load(dir.path()).await.unwrap();
        assert!(store.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_persist() {
        let (dir, store) = setup_store().await;
        let milk = store.add("Buy milk").await.unwrap();
        let dog = store.add("Walk dog").await.unwrap();
        assert!(store.toggle(milk.id).await.unwrap().completed);
        store.remove(dog.id).await.unwrap();

        let reloaded = TodoStore::load(dir.path()).await.unwrap();
        let items = reloaded.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, milk.id);
        assert_eq!(items[0].title, "Buy milk");
        assert!(items[0].completed);
    }

    #[tokio::test]
    async fn test_file_format() {
        let (_dir, store) = setup_store().await;
        store.add("a").await.unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"items\": ["));
        assert!(text.contains("\"createdAt\""));
    }

    #[tokio::test]
    async fn test_errors_leave_file_untouched() {
        let (_dir, store) = setup_store().await;
        assert_eq!(store.add("").await, Err(TodoError::TitleRequired));
        assert_eq!(store.toggle(1).await, Err(TodoError::NotFound(1)));
        assert_eq!(store.remove(1).await, Err(TodoError::NotFound(1)));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let (_dir, store) = setup_store().await;
        let other = store.clone();
        let todo = other.add("shared").await.unwrap();
        assert_eq!(store.items().await, vec![todo]);
    }
}
