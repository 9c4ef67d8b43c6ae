use std::sync::Arc;
use crate::clients::{HttpClient, Transport};
use crate::config::Settings;
use crate::error::Result;
use crate::services::{Notifier, RelayService, SimulatedNotifier};

pub struct AppState {
    pub relay: RelayService,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Arc<Self>> {
        let transport: Arc<dyn Transport> = Arc::new(HttpClient::new(settings.upstream.timeout())?);
        let notifier: Arc<dyn Notifier> = Arc::new(SimulatedNotifier::new(&settings.notifier));

        Ok(Self::with_parts(settings, transport, notifier))
    }

    /// Builds the state around caller-supplied collaborators.
    pub fn with_parts(
        settings: &Settings,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        Arc::new(Self {
            relay: RelayService::new(settings, transport),
            notifier,
        })
    }
}
