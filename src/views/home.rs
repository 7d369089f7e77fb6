// ============================================================================
// HOME VIEW - Superficie principal tras el onboarding
// ============================================================================
// El input de búsqueda de destinos gobierna la sesión del geocoding
// facturado: focus abre sesión, cada lookup incrementa el contador y la
// selección de una sugerencia cierra la sesión (un evento facturable por
// par start/end).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_focus, on_input, ElementBuilder};
use crate::onboarding::Route;
use crate::services::geocoding_service;
use crate::state::AppState;

/// Renderizar la pantalla de inicio
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("home-screen").build();

    let header = ElementBuilder::new("header")?.class("home-header").build();
    let title = ElementBuilder::new("h1")?.text("EcomoveX").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Voyagez mieux, polluez moins")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&container, &header)?;

    // --- Búsqueda de destino (sesión de geocoding) ---
    let search_section = ElementBuilder::new("div")?.class("search-section").build();

    let search_input = ElementBuilder::new("input")?
        .class("search-input")
        .id("destination-search")?
        .attr("type", "text")?
        .attr("placeholder", "Où voulez-vous aller ?")?
        .build();

    // Focus: abrir sesión de búsqueda si no hay una activa
    {
        let state_clone = state.clone();
        on_focus(&search_input, move |_| {
            let mut manager = state_clone.search_session.borrow_mut();
            if !manager.has_active_session() {
                manager.start_session();
            }
        })?;
    }

    // Input: lookup de sugerencias con el token de la sesión activa
    {
        let state_clone = state.clone();
        on_input(&search_input, move |event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let query = input.value();
            if query.trim().len() < 3 {
                return;
            }

            let token = {
                let mut manager = state_clone.search_session.borrow_mut();
                if !manager.has_active_session() {
                    manager.start_session();
                }
                manager.increment_request_count();
                manager.get_token().unwrap_or_default().to_string()
            };

            let state_inner = state_clone.clone();
            spawn_local(async move {
                match geocoding_service::suggest_places(&query, &token).await {
                    Ok(suggestions) => {
                        *state_inner.search_suggestions.borrow_mut() = suggestions
                            .into_iter()
                            .map(|s| s.full_address.unwrap_or(s.name))
                            .collect();
                        state_inner.notify_change();
                    }
                    Err(e) => {
                        log::warn!("⚠️ Lookup de destinos falló: {}", e);
                    }
                }
            });
        })?;
    }

    append_child(&search_section, &search_input)?;

    // Sugerencias: seleccionar una cierra la sesión de búsqueda
    let suggestions = state.search_suggestions.borrow().clone();
    if !suggestions.is_empty() {
        let list = ElementBuilder::new("ul")?.class("suggestion-list").build();
        for suggestion in suggestions {
            let item = ElementBuilder::new("li")?
                .class("suggestion-item")
                .text(&suggestion)
                .build();

            let state_clone = state.clone();
            on_click(&item, move |_| {
                log::info!("🎯 Destino elegido: {}", suggestion);
                state_clone.search_session.borrow_mut().end_session();
                state_clone.search_suggestions.borrow_mut().clear();
                state_clone.notify_change();
            })?;

            append_child(&list, &item)?;
        }
        append_child(&search_section, &list)?;
    }

    append_child(&container, &search_section)?;

    // --- Navegación a las otras pantallas ---
    let nav = ElementBuilder::new("nav")?.class("home-nav").build();
    for (label, route) in [
        ("🗺️ Mon itinéraire", Route::RoutePlan),
        ("💬 Assistant", Route::Chatbot),
        ("🔑 Mot de passe oublié", Route::PasswordReset),
    ] {
        let button = ElementBuilder::new("button")?
            .class("nav-button")
            .text(label)
            .build();
        let state_clone = state.clone();
        on_click(&button, move |_| {
            state_clone.navigate(route);
        })?;
        append_child(&nav, &button)?;
    }
    append_child(&container, &nav)?;

    Ok(container)
}
