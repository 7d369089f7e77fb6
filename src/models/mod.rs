pub mod chat;
pub mod consent;
pub mod route_plan;

pub use chat::{ChatAuthor, ChatMessage, ChatRequest, ChatResponse};
pub use consent::{ConsentPayload, ConsentState, Coordinates, PermissionType};
pub use route_plan::{parse_route_plan, RoutePlan, TimeSlot, Waypoint};
