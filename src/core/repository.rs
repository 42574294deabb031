use std::path::{Path, PathBuf};
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails if the key already exists
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, fails if the key does not exist
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // delete an entity, returns number of removed records
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in stored order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

// DocumentStore points at the backing document. Clones share one lock so that each
// load-mutate-save cycle runs alone.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl DocumentStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}
