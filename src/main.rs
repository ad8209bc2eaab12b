mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    let upstream = config.upstream.clone();
    let state = state::AppState::new(config).expect("http client init failed");

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %upstream, "civic-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
