use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Server};

use shopping_list_backend::api::build_routes;
use shopping_list_backend::cli::migrate::run_migrations;
use shopping_list_backend::cli::{Cli, Commands};
use shopping_list_backend::config::{init_database, init_logging, migrate_database, BootstrapSettings};
use shopping_list_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", bootstrap_settings);
    bootstrap_settings.log_sources();

    if cli.command() == &Commands::Migrate {
        return run_migrations(&bootstrap_settings).await;
    }

    let db = init_database(&bootstrap_settings).await?;
    migrate_database(&db).await?;
    tracing::info!("Database ready");

    let app_data = Arc::new(AppData::init(db));

    let server_address = bootstrap_settings.server_address();
    let server_url = format!("http://localhost:{}", bootstrap_settings.server_port());
    let app = build_routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", server_address);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", bootstrap_settings.server_port());

    Server::new(TcpListener::bind(server_address))
        .run(app)
        .await?;

    Ok(())
}
