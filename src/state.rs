use crate::storage::StorePaths;
use crate::store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub paths: StorePaths,
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(paths: StorePaths, store: Store) -> Self {
        Self {
            paths,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
