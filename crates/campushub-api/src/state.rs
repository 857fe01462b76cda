//! Shared application state threaded through the router.

use std::sync::Arc;

use campushub_auth::{PolicyEngine, SessionManager, ZoneTable};
use campushub_core::config::AppConfig;
use campushub_database::store::Stores;
use campushub_service::{DashboardService, RecordsService, RegistrationService};

/// Everything handlers and middleware need, cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Path-to-zone classification table.
    pub zones: Arc<ZoneTable>,
    /// The pure access decision function.
    pub engine: PolicyEngine,
    /// Session lifecycle manager.
    pub sessions: Arc<SessionManager>,
    /// Student registration service.
    pub registration: RegistrationService,
    /// Student dashboard service.
    pub dashboard: DashboardService,
    /// Admin records service.
    pub records: RecordsService,
}

impl AppState {
    /// Wires the full state from configuration and a store bundle.
    pub fn build(config: AppConfig, stores: Stores) -> Self {
        let sessions = Arc::new(SessionManager::new(
            Arc::clone(&stores.identities),
            Arc::clone(&stores.profiles),
            Arc::clone(&stores.sessions),
            config.session.clone(),
        ));
        let registration = RegistrationService::new(
            Arc::clone(&stores.identities),
            Arc::clone(&stores.profiles),
        );
        let dashboard = DashboardService::new(
            Arc::clone(&stores.subjects),
            Arc::clone(&stores.results),
            Arc::clone(&stores.attendance),
        );
        let records = RecordsService::new(
            stores.identities,
            stores.profiles,
            stores.subjects,
            stores.results,
            stores.attendance,
        );

        Self {
            config: Arc::new(config),
            zones: Arc::new(ZoneTable::with_default_routes()),
            engine: PolicyEngine::new(),
            sessions,
            registration,
            dashboard,
            records,
        }
    }
}
