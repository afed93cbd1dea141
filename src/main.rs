use movie_links::config::Config;
use movie_links::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting movie link service on {} (catalog: {})",
        config.bind_addr,
        config.catalog_path.display()
    );

    server::run(config).await
}
