//! Dashboard screen: view-state records, updaters, and rendering.

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
