use quiz_submission_backend::{
    config::{get_config, init_config},
    database::connection::ConnectionManager,
    middleware::cors::allow_list_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let manager = ConnectionManager::from_config(config);
    let app_state = AppState::new(manager.clone(), config);

    {
        let database_url = config.database_url.clone();
        tokio::spawn(async move {
            // Returns only for a missing connection string; every other
            // failure is retried inside the loop. The HTTP surface keeps
            // serving 503s either way.
            if let Err(e) = manager.run(database_url).await {
                tracing::error!(error = %e, "store connection lifecycle aborted");
            }
        });
    }

    let app = routes::router(app_state)
        .layer(allow_list_cors(&config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(environment = %config.environment, "Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
