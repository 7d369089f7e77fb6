// ============================================================================
// PERMISSION RESOLVERS - Capacidades externas asíncronas (geolocalización...)
// ============================================================================
// Los resolvers son colaboradores del Permission Gate: el gate no persiste
// nada si el resolver falla. Estilo callback (como la Geolocation API)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::consent::{ConsentPayload, Coordinates};

/// Clasificación de fallos de un resolver (ver taxonomía de errores)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// La capacidad no existe en este navegador/dispositivo
    Unsupported,
    /// El usuario denegó el permiso en el diálogo nativo
    Denied,
    /// Posición no disponible o timeout del navegador
    Unavailable,
}

impl ResolverError {
    /// Mensaje reintentable para mostrar inline en el prompt.
    /// Las tres variantes se tratan igual de cara al usuario: ninguna
    /// persiste una decisión.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResolverError::Unsupported => {
                "La géolocalisation n'est pas disponible sur cet appareil. Réessayez ou passez cette étape."
            }
            ResolverError::Denied => {
                "Impossible d'obtenir votre position. Réessayez ou passez cette étape."
            }
            ResolverError::Unavailable => {
                "Position indisponible pour le moment. Réessayez ou passez cette étape."
            }
        }
    }
}

/// Resultado de un resolver: payload opcional a persistir junto al permiso
pub type ResolverResult = Result<Option<ConsentPayload>, ResolverError>;

/// Capacidad externa asíncrona de la que depende un grant
pub trait PermissionResolver {
    fn resolve(&self, on_done: Box<dyn FnOnce(ResolverResult)>);
}

/// Resolver real de localización: Geolocation API del navegador
#[derive(Clone, Default)]
pub struct BrowserLocationResolver;

impl BrowserLocationResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionResolver for BrowserLocationResolver {
    fn resolve(&self, on_done: Box<dyn FnOnce(ResolverResult)>) {
        let geolocation = match web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
        {
            Some(geo) => geo,
            None => {
                log::warn!("⚠️ Geolocation API no soportada en este navegador");
                on_done(Err(ResolverError::Unsupported));
                return;
            }
        };

        // El callback de éxito y el de error comparten el mismo FnOnce:
        // solo uno de los dos lo consumirá
        let on_done = Rc::new(RefCell::new(Some(on_done)));

        let on_done_success = on_done.clone();
        let success = Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            let payload = ConsentPayload::Coordinates(Coordinates {
                lat: coords.latitude(),
                lng: coords.longitude(),
            });
            log::info!("📍 Posición obtenida del navegador");
            if let Some(callback) = on_done_success.borrow_mut().take() {
                callback(Ok(Some(payload)));
            }
        });

        let on_done_error = on_done.clone();
        let error = Closure::once(move |err: web_sys::PositionError| {
            // Códigos de la Geolocation API: 1=denied, 2=unavailable, 3=timeout
            let classified = match err.code() {
                1 => ResolverError::Denied,
                _ => ResolverError::Unavailable,
            };
            log::warn!("⚠️ Geolocalización falló (code {}): {:?}", err.code(), classified);
            if let Some(callback) = on_done_error.borrow_mut().take() {
                callback(Err(classified));
            }
        });

        let result = geolocation.get_current_position_with_error_callback(
            success.as_ref().unchecked_ref(),
            Some(error.as_ref().unchecked_ref()),
        );

        if let Err(e) = result {
            log::error!("❌ Error invocando getCurrentPosition: {:?}", e);
            if let Some(callback) = on_done.borrow_mut().take() {
                callback(Err(ResolverError::Unavailable));
            }
        }

        // closure.forget(): el navegador invoca el callback una sola vez;
        // sin forget() el closure moriría antes de resolverse
        success.forget();
        error.forget();
    }
}

/// Resolver de acceso a fotos. El navegador no expone un prompt previo para
/// la galería (el picker nativo ya media el acceso), así que conceder aquí
/// solo registra la preferencia, sin payload.
#[derive(Clone, Default)]
pub struct PhotoAccessResolver;

impl PhotoAccessResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionResolver for PhotoAccessResolver {
    fn resolve(&self, on_done: Box<dyn FnOnce(ResolverResult)>) {
        if web_sys::window().and_then(|w| w.document()).is_none() {
            on_done(Err(ResolverError::Unsupported));
            return;
        }
        on_done(Ok(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_failures_map_to_retry_eligible_messages() {
        // Las tres clases de fallo producen un mensaje inline reintentable
        for error in [
            ResolverError::Unsupported,
            ResolverError::Denied,
            ResolverError::Unavailable,
        ] {
            assert!(error.user_message().contains("Réessayez"));
        }
    }
}
