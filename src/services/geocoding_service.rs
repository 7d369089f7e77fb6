// ============================================================================
// GEOCODING SERVICE - Búsqueda de destinos en el API externo facturado
// ============================================================================
// Cada llamada dentro de una sesión lleva el session_token activo adjunto;
// el API factura un único evento por par start/end, no por request.
// La contabilidad del token vive en SearchSessionManager, no aquí.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::CONFIG;

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    #[serde(default)]
    pub full_address: Option<String>,
    pub mapbox_id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<PlaceSuggestion>,
}

/// Pedir sugerencias de destino. `session_token` es el token de la sesión
/// de búsqueda activa; el llamador incrementa el contador de la sesión.
pub async fn suggest_places(
    query: &str,
    session_token: &str,
) -> Result<Vec<PlaceSuggestion>, String> {
    let url = format!(
        "{}/suggest?q={}&session_token={}&access_token={}",
        CONFIG.geocoding_base_url,
        js_sys::encode_uri_component(query),
        session_token,
        CONFIG.geocoding_token(),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json::<SuggestResponse>()
        .await
        .map(|body| body.suggestions)
        .map_err(|e| format!("Error parseando sugerencias: {}", e))
}
