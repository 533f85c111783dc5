use dotenvy::dotenv;
use registry_api::{AppState, config::AppConfig, create_app};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment (.env) if present
    dotenv().ok();

    // Initialize tracing (logging); RUST_LOG overrides the default level
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Registry API v{}...", env!("CARGO_PKG_VERSION"));
    let config = AppConfig::from_env()?;

    let app_state = match config.database_url.as_deref() {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await?;
            info!("Connected to Postgres");

            info!("Applying database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Migrations applied successfully.");

            AppState::postgres(pool)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory stores");
            AppState::in_memory()
        }
    };

    let app = create_app(app_state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Registry API listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
