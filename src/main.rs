use mood_journal::{load_custom_tags, load_entries, resolve_store_paths, router, AppState, Store};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let paths = resolve_store_paths();
    if let Some(parent) = paths.entries.parent() {
        fs::create_dir_all(parent).await?;
    }

    let entries = load_entries(&paths.entries).await;
    let custom_tags = load_custom_tags(&paths.custom_tags).await;
    info!(
        "loaded {} entries and {} custom tags",
        entries.len(),
        custom_tags.len()
    );

    let state = AppState::new(paths, Store::new(entries, custom_tags));
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
