// ============================================================================
// ROUTE PLAN VIEW - Itinerario con paradas ordenadas por fecha y franja
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::route_plan::TimeSlot;
use crate::onboarding::Route;
use crate::services::route_service;
use crate::state::AppState;

/// Renderizar la pantalla de itinerario
pub fn render_route_plan(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("plan-screen").build();

    let back = ElementBuilder::new("button")?
        .class("btn-back")
        .text("← Retour")
        .build();
    {
        let state_clone = state.clone();
        on_click(&back, move |_| {
            state_clone.navigate(Route::Home);
        })?;
    }
    append_child(&container, &back)?;

    let title = ElementBuilder::new("h2")?.text("Mon itinéraire").build();
    append_child(&container, &title)?;

    let plan = state.route_plan.borrow().clone();
    let failed = *state.route_plan_failed.borrow();

    match (plan, failed) {
        (Some(plan), _) => {
            let list = ElementBuilder::new("ul")?.class("waypoint-list").build();
            for waypoint in &plan.waypoints {
                let slot_label = match waypoint.time_slot {
                    TimeSlot::Morning => "matin",
                    TimeSlot::Afternoon => "après-midi",
                    TimeSlot::Evening => "soir",
                };
                let line = format!(
                    "{} — {} ({})",
                    waypoint.date.format("%d/%m/%Y"),
                    waypoint.label,
                    slot_label
                );
                let item = ElementBuilder::new("li")?
                    .class("waypoint-item")
                    .text(&line)
                    .build();
                append_child(&list, &item)?;
            }
            append_child(&container, &list)?;
        }
        (None, true) => {
            // Payload malformado o backend caído: estado de error contenido
            let empty = ElementBuilder::new("p")?
                .class("plan-empty")
                .text("Impossible de charger votre itinéraire pour le moment.")
                .build();
            append_child(&container, &empty)?;
        }
        (None, false) => {
            let loading = ElementBuilder::new("p")?
                .class("plan-loading")
                .text("Chargement de votre itinéraire...")
                .build();
            append_child(&container, &loading)?;

            let state_clone = state.clone();
            spawn_local(async move {
                match route_service::fetch_current_plan().await {
                    Ok(plan) => {
                        log::info!("🗺️ Itinerario cargado: {} paradas", plan.waypoints.len());
                        *state_clone.route_plan.borrow_mut() = Some(plan);
                    }
                    Err(_) => {
                        // Ya logueado en la frontera del service
                        *state_clone.route_plan_failed.borrow_mut() = true;
                    }
                }
                state_clone.notify_change();
            });
        }
    }

    Ok(container)
}
