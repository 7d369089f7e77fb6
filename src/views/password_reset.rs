// ============================================================================
// PASSWORD RESET VIEW - Solicitud de email de recuperación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, get_element_by_id, on_click, on_submit, ElementBuilder};
use crate::onboarding::Route;
use crate::services::auth_service;
use crate::state::AppState;
use crate::utils::validation::is_valid_email;

const EMAIL_INPUT_ID: &str = "reset-email";

/// Renderizar el formulario de reset de contraseña
pub fn render_password_reset(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("reset-screen").build();

    let back = ElementBuilder::new("button")?
        .class("btn-back")
        .text("← Retour")
        .build();
    {
        let state_clone = state.clone();
        on_click(&back, move |_| {
            *state_clone.reset_feedback.borrow_mut() = None;
            state_clone.navigate(Route::Home);
        })?;
    }
    append_child(&container, &back)?;

    let title = ElementBuilder::new("h2")?
        .text("Mot de passe oublié")
        .build();
    let body = ElementBuilder::new("p")?
        .text("Entrez votre adresse email pour recevoir un lien de réinitialisation.")
        .build();
    append_child(&container, &title)?;
    append_child(&container, &body)?;

    // Feedback inline del último intento (éxito o error reintentable)
    if let Some(feedback) = state.reset_feedback.borrow().as_ref() {
        let (class, text) = match feedback {
            Ok(message) => ("reset-feedback success", message.as_str()),
            Err(message) => ("reset-feedback error", message.as_str()),
        };
        let feedback_el = ElementBuilder::new("p")?.class(class).text(text).build();
        append_child(&container, &feedback_el)?;
    }

    let form = ElementBuilder::new("form")?.class("reset-form").build();
    let input = ElementBuilder::new("input")?
        .class("reset-input")
        .id(EMAIL_INPUT_ID)?
        .attr("type", "email")?
        .attr("placeholder", "votre@email.com")?
        .build();
    let submit = ElementBuilder::new("button")?
        .class("btn-submit")
        .attr("type", "submit")?
        .text("Envoyer le lien")
        .build();
    if *state.reset_sending.borrow() {
        submit.set_attribute("disabled", "true")?;
    }
    append_child(&form, &input)?;
    append_child(&form, &submit)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            submit_reset_request(&state_clone);
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

/// Validar localmente y pedir el email de reset. Sin retry automático:
/// el usuario reintenta reenviando el formulario.
fn submit_reset_request(state: &AppState) {
    if *state.reset_sending.borrow() {
        return;
    }

    let Some(input) = get_element_by_id(EMAIL_INPUT_ID) else {
        return;
    };
    let input: HtmlInputElement = match wasm_bindgen::JsCast::dyn_into(input) {
        Ok(el) => el,
        Err(_) => return,
    };
    let email = input.value().trim().to_string();

    if !is_valid_email(&email) {
        *state.reset_feedback.borrow_mut() =
            Some(Err("Adresse email invalide".to_string()));
        state.notify_change();
        return;
    }

    *state.reset_sending.borrow_mut() = true;
    *state.reset_feedback.borrow_mut() = None;
    state.notify_change();

    let state_clone = state.clone();
    spawn_local(async move {
        let feedback = match auth_service::request_password_reset(&email).await {
            Ok(response) => Ok(response.message),
            Err(e) => {
                log::warn!("⚠️ Reset de contraseña falló: {}", e);
                Err("Impossible d'envoyer l'email. Réessayez.".to_string())
            }
        };
        *state_clone.reset_feedback.borrow_mut() = Some(feedback);
        *state_clone.reset_sending.borrow_mut() = false;
        state_clone.notify_change();
    });
}
