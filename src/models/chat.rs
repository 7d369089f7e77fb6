// ============================================================================
// CHAT MODELS - Estructuras del chatbot (contrato con el backend)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Request al backend del chatbot
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub room_id: String,
    pub message: String,
}

/// Respuesta del backend del chatbot
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Autor de un mensaje en la conversación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Bot,
}

/// Mensaje mostrado en la vista del chat
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self { author: ChatAuthor::User, text: text.into() }
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self { author: ChatAuthor::Bot, text: text.into() }
    }
}
