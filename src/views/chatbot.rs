// ============================================================================
// CHATBOT VIEW - Conversación con el asistente de viaje
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, get_element_by_id, on_click, on_submit, ElementBuilder};
use crate::models::chat::{ChatAuthor, ChatMessage};
use crate::onboarding::Route;
use crate::services::chat_service;
use crate::state::AppState;

const CHAT_INPUT_ID: &str = "chat-input";

/// Renderizar la vista del chatbot
pub fn render_chatbot(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("chat-screen").build();

    // Header con vuelta a home
    let header = ElementBuilder::new("header")?.class("chat-header").build();
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
    let title = ElementBuilder::new("h2")?.text("Assistant EcomoveX").build();
    append_child(&header, &back)?;
    append_child(&header, &title)?;
    append_child(&container, &header)?;

    // Historial de mensajes
    let messages_el = ElementBuilder::new("div")?.class("chat-messages").build();
    for message in state.chat_messages.borrow().iter() {
        let class = match message.author {
            ChatAuthor::User => "chat-bubble user",
            ChatAuthor::Bot => "chat-bubble bot",
        };
        let bubble = ElementBuilder::new("div")?
            .class(class)
            .text(&message.text)
            .build();
        append_child(&messages_el, &bubble)?;
    }
    if *state.chat_sending.borrow() {
        let typing = ElementBuilder::new("div")?
            .class("chat-bubble bot typing")
            .text("...")
            .build();
        append_child(&messages_el, &typing)?;
    }
    append_child(&container, &messages_el)?;

    // Formulario de envío
    let form = ElementBuilder::new("form")?.class("chat-form").build();
    let input = ElementBuilder::new("input")?
        .class("chat-input")
        .id(CHAT_INPUT_ID)?
        .attr("type", "text")?
        .attr("placeholder", "Écrivez votre message...")?
        .build();
    let send_btn = ElementBuilder::new("button")?
        .class("btn-send")
        .attr("type", "submit")?
        .text("Envoyer")
        .build();
    if *state.chat_sending.borrow() {
        send_btn.set_attribute("disabled", "true")?;
    }
    append_child(&form, &input)?;
    append_child(&form, &send_btn)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            send_current_message(&state_clone);
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

/// Enviar el mensaje del input. Un fallo de transporte del backend se
/// convierte en un mensaje de fallback del bot (nunca un error al usuario).
fn send_current_message(state: &AppState) {
    if *state.chat_sending.borrow() {
        return;
    }

    let Some(input) = get_element_by_id(CHAT_INPUT_ID) else {
        return;
    };
    let input: HtmlInputElement = match wasm_bindgen::JsCast::dyn_into(input) {
        Ok(el) => el,
        Err(_) => return,
    };
    let text = input.value().trim().to_string();
    if text.is_empty() {
        return;
    }
    input.set_value("");

    state
        .chat_messages
        .borrow_mut()
        .push(ChatMessage::from_user(text.clone()));
    *state.chat_sending.borrow_mut() = true;
    state.notify_change();

    let state_clone = state.clone();
    let user_id = state.user_id.borrow().clone();
    spawn_local(async move {
        let reply = chat_service::send_message(&user_id, &text).await;
        state_clone
            .chat_messages
            .borrow_mut()
            .push(ChatMessage::from_bot(reply));
        *state_clone.chat_sending.borrow_mut() = false;
        state_clone.notify_change();
    });
}
