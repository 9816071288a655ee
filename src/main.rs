use agency_seo::{
    api::{self, AppState},
    config::{self, database},
    core::settings,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::site::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(site = %app_config.site.base_url(), "Configuration loaded.");

    // 4. Connect and make sure every table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Load or create the global settings row
    let seo_settings = settings::ensure_global_settings(&db, &app_config.site.name)
        .await
        .inspect_err(|e| error!("Failed to initialize SEO settings: {}", e))?;
    info!(site_name = %seo_settings.site_name, "SEO settings ready.");

    // 6. Serve
    let bind_address = app_config.server.bind_address();
    let state = AppState::new(db, &app_config);
    api::serve(state, &bind_address).await
}
