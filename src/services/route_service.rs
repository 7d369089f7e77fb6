// ============================================================================
// ROUTE SERVICE - Carga del itinerario actual desde el backend
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::route_plan::{parse_route_plan, RoutePlan};

/// Obtener el itinerario actual. Un payload malformado se captura aquí, en
/// la frontera: se loguea y se devuelve error para que la vista renderice
/// un estado vacío en lugar de propagarlo.
pub async fn fetch_current_plan() -> Result<RoutePlan, String> {
    let url = format!("{}/v1/route-plans/current", CONFIG.backend_url());

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

    let raw = response
        .text()
        .await
        .map_err(|e| format!("Error leyendo respuesta: {}", e))?;

    parse_route_plan(&raw).map_err(|e| {
        log::error!("❌ Itinerario malformado recibido del backend: {}", e);
        e
    })
}
