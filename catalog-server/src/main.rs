use catalog_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!("Catalog server starting...");

    // 2. Initialize stores and feed client
    let state = ServerState::initialize(&config).await?;

    // 3. Run (mirror warm-up happens inside, before the listener binds)
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
