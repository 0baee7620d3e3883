//! Server: reads settings from the environment, picks PostgreSQL or a JSON fixture, serves the EBA routes.

use eba_npl_api::{app, AppState, Backend, Catalog, MemoryRepository, PgRepository, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eba_npl_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let catalog = Catalog::eba()?;

    let state = match &settings.backend {
        Backend::Postgres { url, max_connections } => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(url)
                .await?;
            tracing::info!(schema = %settings.schema, "using PostgreSQL repository");
            AppState::new(catalog, PgRepository::new(pool, settings.schema.clone()), settings.public_host.as_str())
        }
        Backend::Fixture(path) => {
            let repo = MemoryRepository::load(path, &catalog).await?;
            tracing::info!(path = %path.display(), "using fixture repository");
            AppState::new(catalog, repo, settings.public_host.as_str())
        }
    };

    let app = app(state, &settings.api_prefix);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
