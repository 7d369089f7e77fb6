// ============================================================================
// CHAT SERVICE - SOLO COMUNICACIÓN HTTP con el backend del chatbot
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::chat::{ChatRequest, ChatResponse};

/// Mensaje de fallback cuando el backend del chatbot no responde.
/// Un fallo de transporte nunca se propaga como error al usuario: el bot
/// contesta esto y el usuario puede reintentar escribiendo de nuevo.
pub const FALLBACK_BOT_MESSAGE: &str =
    "Désolé, je rencontre un problème technique. Réessayez dans un instant.";

/// Enviar un mensaje al chatbot. Siempre devuelve un texto de bot:
/// cualquier fallo de red/parseo se convierte en el mensaje de fallback.
pub async fn send_message(user_id: &str, message: &str) -> String {
    let url = format!("{}/v1/chat", CONFIG.backend_url());
    let request = ChatRequest {
        user_id: user_id.to_string(),
        room_id: CONFIG.chat_room_id.clone(),
        message: message.to_string(),
    };

    let response = match Request::post(&url).json(&request) {
        Ok(req) => req.send().await,
        Err(e) => {
            log::error!("❌ Error serializando mensaje de chat: {}", e);
            return FALLBACK_BOT_MESSAGE.to_string();
        }
    };

    match response {
        Ok(resp) if resp.ok() => match resp.json::<ChatResponse>().await {
            Ok(body) => body.response,
            Err(e) => {
                log::error!("❌ Error parseando respuesta del chatbot: {}", e);
                FALLBACK_BOT_MESSAGE.to_string()
            }
        },
        Ok(resp) => {
            log::warn!("⚠️ Chatbot respondió HTTP {}", resp.status());
            FALLBACK_BOT_MESSAGE.to_string()
        }
        Err(e) => {
            log::warn!("⚠️ Error de red hablando con el chatbot: {}", e);
            FALLBACK_BOT_MESSAGE.to_string()
        }
    }
}
