//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::ui_timing;
use crate::events::{ActionSource, EventType};
use crate::schedule::{Region, ScheduledAction, Scheduler};
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. The deferred post-training metrics reload
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut scheduler = Scheduler::new();
    let mut ticker = tokio::time::interval(ui_timing::poll_interval());

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                // Same deferred reload the dashboard runs, keyed so a second
                // training run supersedes a still-pending one.
                if event.source == ActionSource::Trainer
                    && event.event_type == EventType::Success
                {
                    scheduler.schedule(
                        Region::Metrics,
                        ui_timing::post_training_reload(),
                        ScheduledAction::ReloadMetrics,
                    );
                }
            }
            _ = ticker.tick() => {
                for action in scheduler.take_due(Instant::now()) {
                    if action == ScheduledAction::ReloadMetrics {
                        let controller = Arc::clone(&session.controller);
                        tokio::spawn(async move { controller.load_metrics().await });
                    }
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    print_session_exit_success();

    Ok(())
}
