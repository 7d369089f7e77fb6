// ============================================================================
// APP VIEW - Dispatch de vistas según la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::consent::PermissionType;
use crate::onboarding::Route;
use crate::state::AppState;
use crate::views::{
    render_chatbot, render_home, render_password_reset, render_permission_gate, render_route_plan,
};

/// Renderizar la vista correspondiente a la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app-root").build();

    let view = match state.current_route() {
        Route::LocationGate => render_permission_gate(state, PermissionType::Location)?,
        Route::PhotoGate => render_permission_gate(state, PermissionType::Photo)?,
        Route::Home => render_home(state)?,
        Route::Chatbot => render_chatbot(state)?,
        Route::PasswordReset => render_password_reset(state)?,
        Route::RoutePlan => render_route_plan(state)?,
    };

    crate::dom::append_child(&root, &view)?;
    Ok(root)
}
