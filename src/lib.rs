pub mod app;
pub mod calendar;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod moods;
pub mod pixels;
pub mod series;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_custom_tags, load_entries, resolve_store_paths};
pub use store::Store;
