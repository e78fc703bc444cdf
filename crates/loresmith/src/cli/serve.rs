//! `serve` and `migrate` handlers.

use loresmith_database::{
    InMemoryStore, LoreStore, create_pool, database_url_from_env, run_migrations,
};
use loresmith_error::LoresmithResult;
use loresmith_generation::seed_default_prompts;
use loresmith_interface::LoreRepository;
use loresmith_ipfs::PinataClient;
use loresmith_models::AnthropicClient;
use loresmith_server::{AppState, LoresmithConfig, serve};
use std::sync::Arc;
use tracing::{info, warn};

/// Open the PostgreSQL store described by `DATABASE_URL` and the config.
pub fn open_store(config: &LoresmithConfig) -> LoresmithResult<LoreStore> {
    let url = database_url_from_env()?;
    let pool = create_pool(&url, config.database.pool_size)?;
    Ok(LoreStore::new(pool))
}

/// Run the HTTP API until Ctrl-C.
pub async fn run_server(config: &LoresmithConfig, in_memory: bool) -> LoresmithResult<()> {
    let repo: Arc<dyn LoreRepository> = if in_memory {
        let store = InMemoryStore::new();
        seed_default_prompts(&store).await?;
        warn!("Using in-memory store; documents are lost on exit");
        Arc::new(store)
    } else {
        let store = open_store(config)?;
        run_migrations(store.pool())?;
        Arc::new(store)
    };

    let driver = AnthropicClient::from_env(config.anthropic.model.clone())?
        .with_api_url(config.anthropic.api_url.clone())
        .with_max_tokens(config.anthropic.max_tokens)
        .with_temperature(config.anthropic.temperature);
    info!(model = %config.anthropic.model, "Anthropic driver ready");

    let mut state = AppState::new(repo, Arc::new(driver));
    match PinataClient::from_env() {
        Ok(pinata) => {
            let pinata = pinata
                .with_api_url(config.ipfs.api_url.clone())
                .with_gateway_url(config.ipfs.gateway_url.clone());
            state = state.with_pinner(Arc::new(pinata));
        }
        Err(e) => warn!(error = %e.kind, "IPFS pinning disabled"),
    }

    serve(&config.bind_address(), state).await
}

/// Apply pending migrations.
pub fn migrate(config: &LoresmithConfig) -> LoresmithResult<()> {
    let store = open_store(config)?;
    let applied = run_migrations(store.pool())?;
    println!("Applied {applied} migration(s)");
    Ok(())
}
