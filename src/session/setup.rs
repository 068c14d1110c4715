//! Session setup and initialization

use crate::api::types::Kernel;
use crate::api::{ApiClient, ClassifierApi};
use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::{DashboardController, EventSender, TriggerControl};
use crate::environment::Environment;
use crate::events::Event;
use crate::pretty::print_cmd_warn;
use crate::session::messages::SessionMessage;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for operation events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Shutdown broadcast for the running mode
    pub shutdown_sender: broadcast::Sender<()>,
    /// Drives the dashboard operations
    pub controller: Arc<DashboardController>,
    /// Environment the session runs against
    pub environment: Environment,
    /// Kernel preselected from the config file, if any
    pub preferred_kernel: Option<Kernel>,
}

/// Sets up a dashboard session.
///
/// This function handles the common setup for both TUI and headless modes:
/// 1. Builds the API client (config base-URL override applied)
/// 2. Pings the service health endpoint and reports the outcome
/// 3. Creates the event channel and controller
/// 4. Fires the initial metrics load
pub async fn setup_session(environment: Environment, config: Config) -> SessionData {
    let base_url = config.resolve_base_url(&environment);
    let api = Arc::new(ApiClient::with_base_url(environment, base_url));

    // Best-effort liveness report before the terminal takes over.
    match api.health().await {
        Ok(health) => {
            SessionMessage::info(format!(
                "Service {} (model {})",
                health.status,
                if health.model_loaded {
                    "loaded"
                } else {
                    "not loaded"
                }
            ))
            .print();
        }
        Err(e) => {
            print_cmd_warn!(
                "Service unreachable",
                "Health check failed: {}. The dashboard will retry on demand.",
                e
            );
        }
    }

    let preferred_kernel = config
        .kernel
        .as_deref()
        .and_then(|name| name.parse::<Kernel>().ok());

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);
    let train_trigger = Arc::new(Mutex::new(TriggerControl::default()));

    let controller = Arc::new(DashboardController::new(
        Arc::clone(&api) as Arc<dyn ClassifierApi>,
        EventSender::new(event_sender),
        train_trigger,
    ));

    // Initial page-load fetch; events buffer until the mode's loop drains them.
    let initial = Arc::clone(&controller);
    tokio::spawn(async move { initial.load_metrics().await });

    SessionData {
        event_receiver,
        shutdown_sender,
        controller,
        environment,
        preferred_kernel,
    }
}
