use prominent_payroll::api::{AppState, create_router};
use prominent_payroll::config::{ConfigLoader, ServerSettings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServerSettings::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_target(false)
        .init();

    let loader = match &settings.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::builtin(),
    };
    info!(
        schedule = %loader.metadata().code,
        effective_date = %loader.metadata().effective_date,
        "Statutory schedule loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "Server starting...");

    axum::serve(listener, router).await?;
    Ok(())
}
