// ============================================================================
// AUTH SERVICE - Flujo de reset de contraseña (wrappers HTTP finos)
// ============================================================================

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;

#[derive(Debug, Clone, Serialize)]
struct PasswordResetRequest {
    email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetResponse {
    pub message: String,
}

/// Pedir un email de reset de contraseña.
/// Un fallo se devuelve como mensaje inline; el usuario reintenta
/// reenviando el formulario (sin retry automático).
pub async fn request_password_reset(email: &str) -> Result<PasswordResetResponse, String> {
    let url = format!("{}/v1/auth/password-reset", CONFIG.backend_url());
    let request = PasswordResetRequest {
        email: email.to_string(),
    };

    log::info!("🔐 Solicitando reset de contraseña");

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Error serializando request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if response.ok() {
        response
            .json::<PasswordResetResponse>()
            .await
            .map_err(|e| format!("Error parseando respuesta: {}", e))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Error desconocido".to_string());
        Err(format!("HTTP {}: {}", response.status(), error_text))
    }
}
