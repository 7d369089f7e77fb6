// ============================================================================
// CONSENT STORE - Persistencia clave-valor de decisiones de permisos
// ============================================================================
// Abstraído detrás de un trait para poder testear el Permission Gate con un
// backend en memoria (el backend real es localStorage del navegador)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::consent::{ConsentPayload, ConsentState, Coordinates};
use crate::onboarding::descriptor::PermissionDescriptor;

/// Valor sentinela para registros sin payload
pub const GRANTED_SENTINEL: &str = "granted";
pub const SKIPPED_SENTINEL: &str = "skipped";
pub const SKIP_MARKER_VALUE: &str = "true";

/// Backend clave-valor durable por dispositivo.
/// `get` nunca falla (la ausencia es un resultado válido); `set` puede fallar
/// si la cuota del storage está agotada; `remove` es idempotente.
pub trait ConsentStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Backend real: localStorage del navegador
#[derive(Clone, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ConsentStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        crate::utils::storage::get_raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        crate::utils::storage::set_raw(key, value)
    }

    fn remove(&self, key: &str) {
        // Remover una clave ausente es un no-op; un fallo de acceso se ignora
        let _ = crate::utils::storage::remove_raw(key);
    }
}

/// Backend en memoria para tests (mismo contrato que localStorage)
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot del contenido (solo para asserts en tests)
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl ConsentStorage for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Store tipado de consentimientos sobre un backend clave-valor
#[derive(Clone)]
pub struct ConsentStore<S: ConsentStorage> {
    backend: S,
}

impl<S: ConsentStorage> ConsentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Leer el estado de decisión de un permiso. Nunca falla: sin registro
    /// el permiso está implícitamente `Undecided`.
    pub fn read_state(&self, descriptor: &PermissionDescriptor) -> ConsentState {
        if let Some(value) = self.backend.get(descriptor.storage_key) {
            if value == SKIPPED_SENTINEL {
                return ConsentState::Skipped;
            }
            if value == GRANTED_SENTINEL {
                return ConsentState::Granted(None);
            }
            // Registro con payload: coordenadas serializadas en JSON
            match serde_json::from_str::<Coordinates>(&value) {
                Ok(coords) => {
                    return ConsentState::Granted(Some(ConsentPayload::Coordinates(coords)))
                }
                Err(e) => {
                    // Registro corrupto: se loguea y se trata como decidido
                    // (el valor existe, el usuario ya pasó por el gate)
                    log::warn!(
                        "⚠️ Registro de consentimiento ilegible para {}: {}",
                        descriptor.storage_key,
                        e
                    );
                    return ConsentState::Granted(None);
                }
            }
        }

        if let Some(skip_key) = descriptor.skip_marker_key {
            if self.backend.get(skip_key).is_some() {
                return ConsentState::Skipped;
            }
        }

        ConsentState::Undecided
    }

    /// Persistir una concesión. Limpia un marcador de skip previo: el skip
    /// no es pegajoso una vez que el permiso se concede de verdad.
    /// Un fallo de escritura se loguea y se abandona (degradación aceptada:
    /// al recargar se volverá a mostrar el prompt).
    pub fn record_granted(
        &self,
        descriptor: &PermissionDescriptor,
        payload: Option<&ConsentPayload>,
    ) {
        let value = match payload {
            Some(ConsentPayload::Coordinates(coords)) => match serde_json::to_string(coords) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("❌ Error serializando payload de permiso: {}", e);
                    return;
                }
            },
            None => GRANTED_SENTINEL.to_string(),
        };

        if let Err(e) = self.backend.set(descriptor.storage_key, &value) {
            log::warn!(
                "⚠️ No se pudo persistir el permiso {}: {}",
                descriptor.permission.label(),
                e
            );
            return;
        }

        if let Some(skip_key) = descriptor.skip_marker_key {
            self.backend.remove(skip_key);
        }
    }

    /// Persistir un skip explícito. Síncrono, sin llamadas externas.
    pub fn record_skipped(&self, descriptor: &PermissionDescriptor) {
        let result = match descriptor.skip_marker_key {
            Some(skip_key) => self.backend.set(skip_key, SKIP_MARKER_VALUE),
            None => self.backend.set(descriptor.storage_key, SKIPPED_SENTINEL),
        };

        if let Err(e) = result {
            log::warn!(
                "⚠️ No se pudo persistir el skip de {}: {}",
                descriptor.permission.label(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::descriptor::PermissionDescriptor;

    /// Backend cuyo `set` falla siempre (cuota agotada); lecturas y removes
    /// delegan en un backend en memoria para poder observar el estado
    #[derive(Clone, Default)]
    struct QuotaExhaustedBackend {
        inner: MemoryBackend,
    }

    impl ConsentStorage for QuotaExhaustedBackend {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("cuota de storage agotada".to_string())
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn test_absent_record_is_undecided() {
        let store = ConsentStore::new(MemoryBackend::new());
        assert_eq!(
            store.read_state(&PermissionDescriptor::location()),
            ConsentState::Undecided
        );
        assert_eq!(
            store.read_state(&PermissionDescriptor::photo()),
            ConsentState::Undecided
        );
    }

    #[test]
    fn test_granted_location_persists_payload() {
        let backend = MemoryBackend::new();
        let store = ConsentStore::new(backend.clone());
        let descriptor = PermissionDescriptor::location();
        let coords = Coordinates { lat: 10.0, lng: 20.0 };

        store.record_granted(&descriptor, Some(&ConsentPayload::Coordinates(coords)));

        match store.read_state(&descriptor) {
            ConsentState::Granted(Some(ConsentPayload::Coordinates(c))) => {
                assert_eq!(c, coords);
            }
            other => panic!("estado inesperado: {:?}", other),
        }
        assert!(backend.snapshot().contains_key("userLocation"));
    }

    #[test]
    fn test_grant_clears_previous_skip_marker() {
        let backend = MemoryBackend::new();
        let store = ConsentStore::new(backend.clone());
        let descriptor = PermissionDescriptor::location();

        store.record_skipped(&descriptor);
        assert_eq!(
            backend.get("locationSkipped").as_deref(),
            Some(SKIP_MARKER_VALUE)
        );

        let coords = Coordinates { lat: 10.0, lng: 20.0 };
        store.record_granted(&descriptor, Some(&ConsentPayload::Coordinates(coords)));

        assert!(backend.get("locationSkipped").is_none());
        assert!(store.read_state(&descriptor).is_decided());
    }

    #[test]
    fn test_photo_skip_uses_sentinel_value() {
        let backend = MemoryBackend::new();
        let store = ConsentStore::new(backend.clone());
        let descriptor = PermissionDescriptor::photo();

        store.record_skipped(&descriptor);

        assert_eq!(
            backend.get("photoPermission").as_deref(),
            Some(SKIPPED_SENTINEL)
        );
        assert_eq!(store.read_state(&descriptor), ConsentState::Skipped);
    }

    #[test]
    fn test_failed_grant_write_is_abandoned_and_keeps_skip_marker() {
        // Escenario: locationSkipped=true y la cuota del storage agotada.
        // La escritura del grant se abandona sin tocar el marcador de skip:
        // el estado observable sigue siendo Skipped, nunca uno parcial.
        let backend = QuotaExhaustedBackend::default();
        backend.inner.set("locationSkipped", SKIP_MARKER_VALUE).unwrap();
        let store = ConsentStore::new(backend.clone());
        let descriptor = PermissionDescriptor::location();

        let coords = Coordinates { lat: 10.0, lng: 20.0 };
        store.record_granted(&descriptor, Some(&ConsentPayload::Coordinates(coords)));

        assert!(backend.get("userLocation").is_none());
        assert_eq!(
            backend.get("locationSkipped").as_deref(),
            Some(SKIP_MARKER_VALUE)
        );
        assert_eq!(store.read_state(&descriptor), ConsentState::Skipped);
    }

    #[test]
    fn test_failed_skip_write_leaves_permission_undecided() {
        // El skip tampoco persiste nada si la escritura falla: al recargar
        // el prompt se vuelve a mostrar
        let backend = QuotaExhaustedBackend::default();
        let store = ConsentStore::new(backend.clone());

        store.record_skipped(&PermissionDescriptor::location());
        store.record_skipped(&PermissionDescriptor::photo());

        assert!(backend.inner.snapshot().is_empty());
        assert_eq!(
            store.read_state(&PermissionDescriptor::location()),
            ConsentState::Undecided
        );
        assert_eq!(
            store.read_state(&PermissionDescriptor::photo()),
            ConsentState::Undecided
        );
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let backend = MemoryBackend::new();
        backend.remove("no-existe");
        assert!(backend.snapshot().is_empty());
    }
}
