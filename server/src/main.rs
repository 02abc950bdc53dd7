mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "schooldesk server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;
    let port = config.port;
    tracing::info!(upstream = %config.frappe_url, tenant = %config.tenant_name, "configuration loaded");

    let state = state::AppState::new(config).map_err(|e| format!("http client: {e}"))?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("bind port {port}: {e}"))?;

    tracing::info!(%port, "schooldesk listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
