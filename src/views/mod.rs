pub mod app;
pub mod chatbot;
pub mod home;
pub mod password_reset;
pub mod permission_gate;
pub mod route_plan;

pub use app::render_app;
pub use chatbot::render_chatbot;
pub use home::render_home;
pub use password_reset::render_password_reset;
pub use permission_gate::render_permission_gate;
pub use route_plan::render_route_plan;
