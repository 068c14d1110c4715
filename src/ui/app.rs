//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::types::Kernel;
use crate::consts::cli_consts::{controls, ui_timing};
use crate::controller::{DashboardController, TriggerControl};
use crate::environment::Environment;
use crate::events::Event as OperationEvent;
use crate::schedule::ScheduledAction;
use crate::ui::dashboard::state::InputMode;
use crate::ui::dashboard::updaters::{set_c_value, set_kernel};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying classifier metrics and analysis panels.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from running operations.
    event_receiver: mpsc::Receiver<OperationEvent>,

    /// Broadcasts shutdown signal on exit.
    shutdown_sender: broadcast::Sender<()>,

    /// Drives the dashboard operations.
    controller: Arc<DashboardController>,

    /// Kernel preselected from the config file, if any.
    preferred_kernel: Option<Kernel>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<OperationEvent>,
        shutdown_sender: broadcast::Sender<()>,
        controller: Arc<DashboardController>,
        preferred_kernel: Option<Kernel>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            shutdown_sender,
            controller,
            preferred_kernel,
        }
    }

    fn enter_dashboard(&mut self) {
        let mut state = DashboardState::new(self.environment, self.start_time);
        if let Some(kernel) = self.preferred_kernel {
            state.controls = set_kernel(&state.controls, kernel);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let train_trigger = app.controller.train_trigger();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.trigger_view = TriggerControl::snapshot(&train_trigger);
            for action in state.update(Instant::now()) {
                match action {
                    ScheduledAction::ReloadMetrics => {
                        let controller = Arc::clone(&app.controller);
                        tokio::spawn(async move { controller.load_metrics().await });
                    }
                    ScheduledAction::ClearHighlight => {}
                }
            }
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui_timing::splash_duration() {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_timing::poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        // Any other key press skips the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        // A blocking notice swallows input until acknowledged.
                        if state.notice.is_some() {
                            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                                state.dismiss_notice();
                            }
                            continue;
                        }

                        match state.input.mode {
                            InputMode::Normal => {
                                if handle_normal_key(key.code, state, &app.controller) {
                                    let _ = app.shutdown_sender.send(());
                                    return Ok(());
                                }
                            }
                            mode => handle_editing_key(key.code, mode, state, &app.controller),
                        }
                    }
                }
            }
        }
    }
}

/// Handle a key press in normal mode. Returns true when the app should exit.
fn handle_normal_key(
    code: KeyCode,
    state: &mut DashboardState,
    controller: &Arc<DashboardController>,
) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => return true,
        KeyCode::Char('a') => {
            state.input.mode = InputMode::EditingUrl;
            state.input.buffer.clear();
        }
        KeyCode::Char('u') => {
            state.input.mode = InputMode::EditingPath;
            state.input.buffer.clear();
        }
        KeyCode::Char('k') => {
            state.controls = set_kernel(&state.controls, state.controls.kernel.next());
        }
        KeyCode::Left => {
            state.controls =
                set_c_value(&state.controls, state.controls.c_value - controls::C_STEP);
        }
        KeyCode::Right => {
            state.controls =
                set_c_value(&state.controls, state.controls.c_value + controls::C_STEP);
        }
        KeyCode::Char('t') => {
            // The trigger stays dead while a run is in flight.
            if state.trigger_view.enabled {
                let controller = Arc::clone(controller);
                let kernel: Kernel = state.controls.kernel;
                let c = state.controls.c_value;
                tokio::spawn(async move { controller.train_model(kernel, c).await });
            }
        }
        KeyCode::Char('r') => {
            let controller = Arc::clone(controller);
            tokio::spawn(async move { controller.load_metrics().await });
        }
        _ => {}
    }
    false
}

/// Handle a key press while a text prompt is open.
fn handle_editing_key(
    code: KeyCode,
    mode: InputMode,
    state: &mut DashboardState,
    controller: &Arc<DashboardController>,
) {
    match code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut state.input.buffer);
            state.input.mode = InputMode::Normal;

            let controller = Arc::clone(controller);
            match mode {
                InputMode::EditingUrl => {
                    tokio::spawn(async move { controller.analyze_url(&input).await });
                }
                InputMode::EditingPath => {
                    tokio::spawn(
                        async move { controller.upload_dataset(&PathBuf::from(input)).await },
                    );
                }
                InputMode::Normal => {}
            }
        }
        KeyCode::Esc => {
            state.input.mode = InputMode::Normal;
            state.input.buffer.clear();
        }
        KeyCode::Backspace => {
            state.input.buffer.pop();
        }
        KeyCode::Char(c) => {
            state.input.buffer.push(c);
        }
        _ => {}
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
