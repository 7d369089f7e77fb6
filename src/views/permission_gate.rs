// ============================================================================
// PERMISSION GATE VIEW - Prompt de permiso del onboarding
// ============================================================================
// El evaluate se hace ANTES de construir cualquier markup del prompt: un
// usuario que ya decidió nunca ve un flash del prompt (fase Checking
// renderiza un contenedor vacío mientras se programa la navegación).
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::consent::PermissionType;
use crate::onboarding::{
    advance, GateDecision, GatePhase, OnboardingStep, PermissionDescriptor, PermissionGate,
};
use crate::services::consent_store::{ConsentStore, LocalStorageBackend};
use crate::services::resolvers::{BrowserLocationResolver, PermissionResolver, PhotoAccessResolver};
use crate::state::AppState;

/// Renderizar el gate de un permiso
pub fn render_permission_gate(
    state: &AppState,
    permission: PermissionType,
) -> Result<Element, JsValue> {
    let descriptor = PermissionDescriptor::for_permission(permission);
    let gate = Rc::new(PermissionGate::new(
        descriptor,
        ConsentStore::new(LocalStorageBackend::new()),
    ));
    let ui = state.gate_ui(permission).clone();

    let container = ElementBuilder::new("div")?.class("permission-gate").build();

    // Evaluate síncrono al montar: con decisión previa no se muestra nada
    // y se avanza en el próximo tick
    if gate.evaluate() == GateDecision::Bypass {
        ui.set_phase(GatePhase::Proceeding);
        let state_clone = state.clone();
        Timeout::new(0, move || {
            state_clone.navigate(advance(OnboardingStep::for_permission(permission)));
        })
        .forget();
        return Ok(container);
    }

    if ui.get_phase() == GatePhase::Checking {
        ui.set_phase(GatePhase::Prompting);
    }

    let card = ElementBuilder::new("div")?.class("gate-card").build();

    let icon = ElementBuilder::new("div")?
        .class("gate-icon")
        .text(match permission {
            PermissionType::Location => "📍",
            PermissionType::Photo => "🖼️",
        })
        .build();

    let title = ElementBuilder::new("h1")?
        .text(descriptor.prompt_title)
        .build();

    let body = ElementBuilder::new("p")?
        .class("gate-body")
        .text(descriptor.prompt_body)
        .build();

    append_child(&card, &icon)?;
    append_child(&card, &title)?;
    append_child(&card, &body)?;

    // Error inline reintentable de un grant fallido
    if let Some(error) = ui.get_error() {
        let error_el = ElementBuilder::new("p")?
            .class("gate-error")
            .text(&error)
            .build();
        append_child(&card, &error_el)?;
    }

    let granting = ui.get_phase() == GatePhase::Granting;

    // Botón de conceder (deshabilitado mientras hay un grant en vuelo)
    let grant_btn = ElementBuilder::new("button")?
        .class("btn-grant")
        .text(if granting { "Autorisation..." } else { "Autoriser" })
        .build();
    if granting {
        grant_btn.set_attribute("disabled", "true")?;
    }

    {
        let gate = gate.clone();
        let ui = ui.clone();
        let state_clone = state.clone();
        on_click(&grant_btn, move |_| {
            if gate.is_granting() {
                return;
            }
            ui.set_phase(GatePhase::Granting);
            ui.set_error(None);
            state_clone.notify_change();

            let resolver: Box<dyn PermissionResolver> = match permission {
                PermissionType::Location => Box::new(BrowserLocationResolver::new()),
                PermissionType::Photo => Box::new(PhotoAccessResolver::new()),
            };

            let ui = ui.clone();
            let state_inner = state_clone.clone();
            gate.grant(resolver.as_ref(), move |result| match result {
                Ok(()) => {
                    ui.set_phase(GatePhase::Proceeding);
                    state_inner.navigate(advance(OnboardingStep::for_permission(permission)));
                }
                Err(message) => {
                    ui.fail_back_to_prompt(message);
                    state_inner.notify_change();
                }
            });
        })?;
    }

    // Botón de omitir (síncrono, nunca falla)
    let skip_btn = ElementBuilder::new("button")?
        .class("btn-skip")
        .text("Plus tard")
        .build();

    {
        let gate = gate.clone();
        let ui = ui.clone();
        let state_clone = state.clone();
        on_click(&skip_btn, move |_| {
            gate.skip();
            ui.set_phase(GatePhase::Proceeding);
            state_clone.navigate(advance(OnboardingStep::for_permission(permission)));
        })?;
    }

    append_child(&card, &grant_btn)?;
    append_child(&card, &skip_btn)?;
    append_child(&container, &card)?;

    Ok(container)
}
