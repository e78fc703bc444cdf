//! Shared handler state.

use loresmith_generation::LoreGenerator;
use loresmith_interface::{LoreRepository, LoresmithDriver, MetadataPinner};
use std::sync::Arc;

/// State shared by every handler.
///
/// Everything inside is immutable or internally synchronized, so clones are
/// cheap handles onto the same clients and pool.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn LoreRepository>,
    generator: LoreGenerator,
    pinner: Option<Arc<dyn MetadataPinner>>,
}

impl AppState {
    /// Build state from a store and a driver. Pinning starts disabled.
    pub fn new(repo: Arc<dyn LoreRepository>, driver: Arc<dyn LoresmithDriver>) -> Self {
        Self {
            generator: LoreGenerator::new(repo.clone(), driver),
            repo,
            pinner: None,
        }
    }

    /// Enable IPFS pinning.
    pub fn with_pinner(mut self, pinner: Arc<dyn MetadataPinner>) -> Self {
        self.pinner = Some(pinner);
        self
    }

    /// Document store.
    pub fn repo(&self) -> &dyn LoreRepository {
        self.repo.as_ref()
    }

    /// Content generators.
    pub fn generator(&self) -> &LoreGenerator {
        &self.generator
    }

    /// Pinning client, when configured.
    pub fn pinner(&self) -> Option<&dyn MetadataPinner> {
        self.pinner.as_deref()
    }
}
