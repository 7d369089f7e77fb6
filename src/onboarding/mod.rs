pub mod descriptor;
pub mod gate;
pub mod redirector;

pub use descriptor::PermissionDescriptor;
pub use gate::{GateDecision, GatePhase, PermissionGate};
pub use redirector::{advance, OnboardingStep, Route};
