use anyhow::Context;
use author_service::prelude::*;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config).context("failed to initialise tracing")?;

    let authors = Author::samples();
    tracing::info!(count = authors.len(), "seeding in-memory author repository");

    let repository: MemoryRepository<Uuid, Author> = MemoryRepository::with_data(authors);
    let state = AppState::new(config.clone(), AuthorService::new(repository));

    Server::new(config)
        .serve(app(state))
        .await
        .context("server terminated with an error")?;

    Ok(())
}
