pub mod session_token;

pub use session_token::{SearchSessionManager, SessionReport};
