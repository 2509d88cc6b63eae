use rental_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Rental quote server starting...");

    // 2. Server state (credits client)
    let state = ServerState::initialize(&config)?;

    // 3. HTTP server
    let server = Server::new(state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
