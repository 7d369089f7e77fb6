// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::chat::ChatMessage;
use crate::models::consent::PermissionType;
use crate::models::route_plan::RoutePlan;
use crate::onboarding::redirector::Route;
use crate::search::SearchSessionManager;
use crate::state::gate_state::GateUiState;

const USER_ID_KEY: &str = "ecomovexUserId";

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,

    // Onboarding
    pub location_gate: GateUiState,
    pub photo_gate: GateUiState,

    // Sesión de búsqueda del geocoding facturado (inyectada, no singleton)
    pub search_session: Rc<RefCell<SearchSessionManager>>,
    pub search_suggestions: Rc<RefCell<Vec<String>>>,

    // Chatbot
    pub chat_messages: Rc<RefCell<Vec<ChatMessage>>>,
    pub chat_sending: Rc<RefCell<bool>>,

    // Itinerario
    pub route_plan: Rc<RefCell<Option<RoutePlan>>>,
    pub route_plan_failed: Rc<RefCell<bool>>,

    // Password reset
    pub reset_feedback: Rc<RefCell<Option<Result<String, String>>>>,
    pub reset_sending: Rc<RefCell<bool>>,

    // Identidad anónima por dispositivo (para el chatbot)
    pub user_id: Rc<RefCell<String>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación. El onboarding siempre arranca en el
    /// gate de localización; los gates ya decididos hacen bypass al renderizar.
    pub fn new() -> Self {
        let user_id = Self::load_or_create_user_id();

        Self {
            route: Rc::new(RefCell::new(Route::LocationGate)),
            location_gate: GateUiState::new(),
            photo_gate: GateUiState::new(),
            search_session: Rc::new(RefCell::new(SearchSessionManager::new())),
            search_suggestions: Rc::new(RefCell::new(Vec::new())),
            chat_messages: Rc::new(RefCell::new(Vec::new())),
            chat_sending: Rc::new(RefCell::new(false)),
            route_plan: Rc::new(RefCell::new(None)),
            route_plan_failed: Rc::new(RefCell::new(false)),
            reset_feedback: Rc::new(RefCell::new(None)),
            reset_sending: Rc::new(RefCell::new(false)),
            user_id: Rc::new(RefCell::new(user_id)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Id anónimo estable por dispositivo (se crea la primera vez)
    fn load_or_create_user_id() -> String {
        if let Some(existing) = crate::utils::storage::get_raw(USER_ID_KEY) {
            return existing;
        }
        let fresh = uuid::Uuid::new_v4().to_string();
        if let Err(e) = crate::utils::storage::set_raw(USER_ID_KEY, &fresh) {
            log::warn!("⚠️ No se pudo persistir el user id: {}", e);
        }
        fresh
    }

    /// Estado de UI del gate correspondiente a un permiso
    pub fn gate_ui(&self, permission: PermissionType) -> &GateUiState {
        match permission {
            PermissionType::Location => &self.location_gate,
            PermissionType::Photo => &self.photo_gate,
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Cambiar de ruta y notificar para re-renderizar
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 Navegando a {}", route.path());
        *self.route.borrow_mut() = route;
        self.notify_change();
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_change(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> =
            self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}
