// ============================================================================
// EVENT HANDLING - Helpers para registrar listeners
// ============================================================================
// Los listeners se registran con Closure + forget(). Para listeners en
// elementos del DOM esto es seguro: al destruir el elemento (p.ej. con
// set_inner_html("")) el navegador limpia los listeners asociados.
// Listeners globales (window/document) solo deben registrarse UNA vez.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FocusEvent, InputEvent, MouseEvent};

/// Click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo mientras el elemento exista
    closure.forget();
    Ok(())
}

/// Input handler
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Focus handler
pub fn on_focus<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(FocusEvent)>);
    element.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit handler (hace preventDefault antes de delegar)
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
