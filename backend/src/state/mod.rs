// State management module
// Handles the shared handles every request needs

pub mod app_state;

pub use app_state::AppState;
