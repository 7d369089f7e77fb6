// ============================================================================
// GATE STATE - Estado de UI de un Permission Gate
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::onboarding::gate::GatePhase;

/// Estado observable por la vista de un gate: fase actual + error inline
#[derive(Clone)]
pub struct GateUiState {
    pub phase: Rc<RefCell<GatePhase>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl GateUiState {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(RefCell::new(GatePhase::Checking)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_phase(&self, phase: GatePhase) {
        *self.phase.borrow_mut() = phase;
    }

    pub fn get_phase(&self) -> GatePhase {
        *self.phase.borrow()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Volver al prompt tras un grant fallido, con el mensaje reintentable
    pub fn fail_back_to_prompt(&self, message: String) {
        self.set_phase(GatePhase::Prompting);
        self.set_error(Some(message));
    }
}

impl Default for GateUiState {
    fn default() -> Self {
        Self::new()
    }
}
