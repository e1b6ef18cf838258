// src/application/state.rs

use std::sync::Arc;

use crate::events::{create_event_bus, EventBus};
use crate::repositories::KeyValueRepository;
use crate::services::{BookStore, Confirmation, EditSession, SessionConfig, StoreConfig};

/// Application state owned by the front end.
/// Built once at startup; the session owns the store.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session: EditSession,
}

impl AppState {
    /// Wire store and session over a persisted slot and hydrate the store
    pub fn bootstrap(
        repo: Arc<dyn KeyValueRepository>,
        confirmation: Arc<dyn Confirmation>,
        store_config: StoreConfig,
        session_config: SessionConfig,
    ) -> Self {
        let event_bus = Arc::new(create_event_bus());

        let mut store = BookStore::new(repo, Arc::clone(&event_bus), store_config);
        store.load();

        let session = EditSession::new(
            store,
            confirmation,
            Arc::clone(&event_bus),
            session_config,
        );

        Self { event_bus, session }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryKeyValueRepository, KeyValueRepository};
    use crate::services::AlwaysConfirm;

    #[test]
    fn test_bootstrap_hydrates_store() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        repo.set(
            "livros",
            r#"[{"id":"1","titulo":"Dune","autor":"Herbert","anoPublicacao":1965}]"#,
        )
        .unwrap();

        let state = AppState::bootstrap(
            repo,
            Arc::new(AlwaysConfirm),
            StoreConfig::default(),
            SessionConfig::default(),
        );

        assert_eq!(state.session.store().len(), 1);
        let log = state.event_bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "CollectionLoaded");
    }
}
