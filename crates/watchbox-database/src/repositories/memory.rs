//! In-memory repository and unit-of-work adapters.
//!
//! Mirror the PostgreSQL adapters' semantics (active-only reads,
//! case-insensitive user uniqueness, active-scoped folder names) over a
//! shared in-process store. Suitable for tests and single-node
//! experiments; transactions are real here, implemented as
//! snapshot/restore of the store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use watchbox_core::error::AppError;
use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;
use watchbox_entity::folder::{Folder, FolderRepository};
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_entity::user::{User, UserRepository};

/// Backing store shared by the memory repositories of one unit of work.
#[derive(Debug, Default)]
struct MemoryStore {
    users: Vec<User>,
    folders: Vec<Folder>,
    next_user_id: i64,
    next_folder_id: i64,
    /// Pre-transaction copy of both tables, present while a transaction
    /// is open. Identity counters do not roll back, like sequences.
    snapshot: Option<(Vec<User>, Vec<Folder>)>,
}

/// In-memory user repository.
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: Arc<Mutex<MemoryStore>>,
}

#[async_trait]
impl Repository<User, i64> for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let store = self.store.lock().await;
        Ok(store
            .users
            .iter()
            .find(|u| u.id == id && u.is_active)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let store = self.store.lock().await;
        Ok(store.users.iter().filter(|u| u.is_active).cloned().collect())
    }

    async fn add(&self, entity: &User) -> AppResult<User> {
        let mut store = self.store.lock().await;

        // Same backstop the unique indexes provide in PostgreSQL.
        if store
            .users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&entity.username))
        {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                entity.username
            )));
        }
        if store
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&entity.email))
        {
            return Err(AppError::conflict("Email already in use".to_string()));
        }

        store.next_user_id += 1;
        let mut stored = entity.clone();
        stored.id = store.next_user_id;
        store.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, entity: &User) -> AppResult<User> {
        let mut store = self.store.lock().await;
        let row = store
            .users
            .iter_mut()
            .find(|u| u.id == entity.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", entity.id)))?;
        *row = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut store = self.store.lock().await;
        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        Ok(store.users.len() < before)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let store = self.store.lock().await;
        Ok(store
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.is_active)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let store = self.store.lock().await;
        Ok(store
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username) && u.is_active)
            .cloned())
    }

    async fn is_email_unique(&self, email: &str) -> AppResult<bool> {
        let store = self.store.lock().await;
        Ok(!store
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn is_username_unique(&self, username: &str) -> AppResult<bool> {
        let store = self.store.lock().await;
        Ok(!store
            .users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(username)))
    }
}

/// In-memory folder repository.
#[derive(Debug, Clone)]
pub struct MemoryFolderRepository {
    store: Arc<Mutex<MemoryStore>>,
}

#[async_trait]
impl Repository<Folder, i64> for MemoryFolderRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        let store = self.store.lock().await;
        Ok(store
            .folders
            .iter()
            .find(|f| f.id == id && f.is_active)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let store = self.store.lock().await;
        Ok(store
            .folders
            .iter()
            .filter(|f| f.is_active)
            .cloned()
            .collect())
    }

    async fn add(&self, entity: &Folder) -> AppResult<Folder> {
        let mut store = self.store.lock().await;

        if store
            .folders
            .iter()
            .any(|f| f.name == entity.name && f.user_id == entity.user_id && f.is_active)
        {
            return Err(AppError::conflict(format!(
                "Folder '{}' already exists",
                entity.name
            )));
        }

        store.next_folder_id += 1;
        let mut stored = entity.clone();
        stored.id = store.next_folder_id;
        store.folders.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, entity: &Folder) -> AppResult<Folder> {
        let mut store = self.store.lock().await;
        let row = store
            .folders
            .iter_mut()
            .find(|f| f.id == entity.id)
            .ok_or_else(|| AppError::not_found(format!("Folder {} not found", entity.id)))?;
        *row = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut store = self.store.lock().await;
        let before = store.folders.len();
        store.folders.retain(|f| f.id != id);
        Ok(store.folders.len() < before)
    }
}

#[async_trait]
impl FolderRepository for MemoryFolderRepository {
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Folder>> {
        let store = self.store.lock().await;
        Ok(store
            .folders
            .iter()
            .filter(|f| f.user_id == user_id && f.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_name_and_user_id(
        &self,
        name: &str,
        user_id: i64,
    ) -> AppResult<Option<Folder>> {
        let store = self.store.lock().await;
        Ok(store
            .folders
            .iter()
            .find(|f| f.name == name && f.user_id == user_id && f.is_active)
            .cloned())
    }

    async fn is_name_unique_for_user(&self, name: &str, user_id: i64) -> AppResult<bool> {
        let store = self.store.lock().await;
        Ok(!store
            .folders
            .iter()
            .any(|f| f.name == name && f.user_id == user_id && f.is_active))
    }
}

/// In-memory unit of work over a shared [`MemoryStore`].
pub struct MemoryUnitOfWork {
    store: Arc<Mutex<MemoryStore>>,
    users: Arc<MemoryUserRepository>,
    folders: Arc<MemoryFolderRepository>,
}

impl MemoryUnitOfWork {
    /// Creates an empty in-memory unit of work.
    pub fn new() -> Self {
        let store = Arc::new(Mutex::new(MemoryStore::default()));
        Self {
            users: Arc::new(MemoryUserRepository {
                store: Arc::clone(&store),
            }),
            folders: Arc::new(MemoryFolderRepository {
                store: Arc::clone(&store),
            }),
            store,
        }
    }
}

impl Default for MemoryUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.users) as Arc<dyn UserRepository>
    }

    fn folders(&self) -> Arc<dyn FolderRepository> {
        Arc::clone(&self.folders) as Arc<dyn FolderRepository>
    }

    async fn save_changes(&self) -> AppResult<()> {
        let mut store = self.store.lock().await;
        store.snapshot = None;
        Ok(())
    }

    async fn begin_transaction(&self) -> AppResult<()> {
        let mut store = self.store.lock().await;
        if store.snapshot.is_some() {
            return Err(AppError::database("A transaction is already in progress"));
        }
        let snapshot = (store.users.clone(), store.folders.clone());
        store.snapshot = Some(snapshot);
        Ok(())
    }

    async fn commit_transaction(&self) -> AppResult<()> {
        let mut store = self.store.lock().await;
        store.snapshot = None;
        Ok(())
    }

    async fn rollback_transaction(&self) -> AppResult<()> {
        let mut store = self.store.lock().await;
        if let Some((users, folders)) = store.snapshot.take() {
            store.users = users;
            store.folders = folders;
        }
        Ok(())
    }
}
