pub mod app_state;
pub mod gate_state;

pub use app_state::AppState;
pub use gate_state::GateUiState;
