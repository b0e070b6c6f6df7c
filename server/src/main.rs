mod config;
mod routes;
mod state;
mod tasks;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let tasks = tasks::load_tasks(config.tasks_file.as_deref()).expect("failed to load tasks file");
    tracing::info!(count = tasks.len(), "tasks loaded");

    let state = state::AppState::new(tasks);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "taskgate listening");
    axum::serve(listener, app).await.expect("server failed");
}
