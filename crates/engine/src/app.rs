//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    memory::{
        InMemoryCampaignRepo, InMemoryCharacterRepo, InMemoryDocumentRepo, LocalUploadAuthorizer,
    },
    ports::{CampaignRepo, CharacterRepo, ClockPort, DocumentRepo, UploadAuthorizer},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the injected ports and the use cases built on them.
/// Passed to the request dispatcher by whatever transport fronts the engine.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub config: EngineConfig,
}

/// Port traits injected directly.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub campaign: Arc<dyn CampaignRepo>,
    pub document: Arc<dyn DocumentRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub creation: use_cases::CharacterCreationUseCases,
    pub character: use_cases::CharacterUseCases,
    pub documents: use_cases::DocumentUseCases,
}

impl App {
    /// Create a new App with all dependencies wired.
    pub fn new(
        repositories: Repositories,
        uploads: Arc<dyn UploadAuthorizer>,
        clock: Arc<dyn ClockPort>,
        config: EngineConfig,
    ) -> Self {
        let use_cases = UseCases {
            creation: use_cases::CharacterCreationUseCases::new(
                repositories.character.clone(),
                repositories.campaign.clone(),
                clock.clone(),
                config.default_setting,
            ),
            character: use_cases::CharacterUseCases::new(repositories.character.clone()),
            documents: use_cases::DocumentUseCases::new(
                repositories.document.clone(),
                uploads,
                clock,
                &config,
            ),
        };

        Self {
            repositories,
            use_cases,
            config,
        }
    }

    /// Wires the in-memory stores, the local upload authorizer and the system clock.
    pub fn in_memory(config: EngineConfig) -> Self {
        let campaigns = Arc::new(InMemoryCampaignRepo::new());
        let repositories = Repositories {
            character: Arc::new(InMemoryCharacterRepo::new(campaigns.clone())),
            campaign: campaigns,
            document: Arc::new(InMemoryDocumentRepo::new()),
        };
        let uploads = Arc::new(LocalUploadAuthorizer::new(config.storage_base_url.clone()));
        Self::new(repositories, uploads, Arc::new(SystemClock::new()), config)
    }
}
