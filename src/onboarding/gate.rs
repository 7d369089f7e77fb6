// ============================================================================
// PERMISSION GATE - Máquina de estados prompt-vs-bypass por permiso
// ============================================================================
// Checking -> Bypass -> Proceeding
// Checking -> Prompting -> { Granting -> Proceeding | Proceeding (skip) }
// Granting puede fallar de vuelta a Prompting con un mensaje reintentable
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::onboarding::descriptor::PermissionDescriptor;
use crate::services::consent_store::{ConsentStorage, ConsentStore};
use crate::services::resolvers::PermissionResolver;

/// Resultado de evaluar el gate al montar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Ya hay decisión registrada: saltar directo al siguiente paso
    Bypass,
    /// Sin decisión: mostrar el prompt
    Prompt,
}

/// Fase del gate para la vista. En `Checking` no se renderiza nada
/// (evita el flash del prompt para usuarios que ya decidieron).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Checking,
    Prompting,
    Granting,
    Proceeding,
}

/// Gate genérico por tipo de permiso, parametrizado por descriptor
pub struct PermissionGate<S: ConsentStorage + Clone + 'static> {
    descriptor: PermissionDescriptor,
    store: ConsentStore<S>,
    granting: Rc<Cell<bool>>,
}

impl<S: ConsentStorage + Clone + 'static> PermissionGate<S> {
    pub fn new(descriptor: PermissionDescriptor, store: ConsentStore<S>) -> Self {
        Self {
            descriptor,
            store,
            granting: Rc::new(Cell::new(false)),
        }
    }

    pub fn descriptor(&self) -> &PermissionDescriptor {
        &self.descriptor
    }

    /// Evaluar al montar: lectura síncrona del Consent Store, sin red.
    /// `Bypass` si y solo si existe un registro granted o skipped.
    pub fn evaluate(&self) -> GateDecision {
        if self.store.read_state(&self.descriptor).is_decided() {
            log::info!(
                "⏭️ Permiso {} ya decidido, bypass del prompt",
                self.descriptor.permission.label()
            );
            GateDecision::Bypass
        } else {
            GateDecision::Prompt
        }
    }

    /// Skip explícito: registro incondicional, síncrono, nunca falla.
    pub fn skip(&self) {
        log::info!("⏭️ Usuario omitió el permiso {}", self.descriptor.permission.label());
        self.store.record_skipped(&self.descriptor);
    }

    /// ¿Hay un grant en vuelo? (la vista deshabilita el botón mientras tanto)
    pub fn is_granting(&self) -> bool {
        self.granting.get()
    }

    /// Conceder vía resolver externo. Solo un intento en vuelo por gate.
    ///
    /// Éxito: persiste `granted` (+payload), limpia un skip previo y señala
    /// avanzar. Fallo: NO se escribe nada (el permiso sigue `Undecided` y el
    /// prompt se volverá a mostrar) y se entrega un mensaje reintentable.
    /// La escritura al store es independiente de la vida de la vista: si la
    /// vista ya no existe cuando llega el callback, el registro igual queda.
    pub fn grant<F>(&self, resolver: &dyn PermissionResolver, on_done: F)
    where
        F: FnOnce(Result<(), String>) + 'static,
    {
        if self.granting.get() {
            log::warn!(
                "⚠️ Grant de {} ya en curso, ignorando intento duplicado",
                self.descriptor.permission.label()
            );
            return;
        }
        self.granting.set(true);

        let descriptor = self.descriptor;
        let store = self.store.clone();
        let granting = self.granting.clone();

        resolver.resolve(Box::new(move |result| {
            granting.set(false);
            match result {
                Ok(payload) => {
                    store.record_granted(&descriptor, payload.as_ref());
                    log::info!("✅ Permiso {} concedido", descriptor.permission.label());
                    on_done(Ok(()));
                }
                Err(e) => {
                    // Política deliberada: solo un grant exitoso o un skip
                    // explícito cuentan como decisión
                    log::warn!(
                        "⚠️ Grant de {} falló: {:?}",
                        descriptor.permission.label(),
                        e
                    );
                    on_done(Err(e.user_message().to_string()));
                }
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::models::consent::{ConsentPayload, ConsentState, Coordinates};
    use crate::services::consent_store::MemoryBackend;
    use crate::services::resolvers::{ResolverError, ResolverResult};

    /// Resolver de test que responde inmediatamente con un resultado fijo
    struct ImmediateResolver(ResolverResult);

    impl PermissionResolver for ImmediateResolver {
        fn resolve(&self, on_done: Box<dyn FnOnce(ResolverResult)>) {
            on_done(self.0.clone());
        }
    }

    /// Resolver de test que retiene el callback hasta que el test lo dispare
    #[derive(Clone, Default)]
    struct PendingResolver {
        pending: Rc<RefCell<Option<Box<dyn FnOnce(ResolverResult)>>>>,
    }

    impl PendingResolver {
        fn fire(&self, result: ResolverResult) {
            if let Some(callback) = self.pending.borrow_mut().take() {
                callback(result);
            }
        }
    }

    impl PermissionResolver for PendingResolver {
        fn resolve(&self, on_done: Box<dyn FnOnce(ResolverResult)>) {
            *self.pending.borrow_mut() = Some(on_done);
        }
    }

    fn gate_with_backend(
        descriptor: PermissionDescriptor,
    ) -> (PermissionGate<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        let gate = PermissionGate::new(descriptor, ConsentStore::new(backend.clone()));
        (gate, backend)
    }

    #[test]
    fn test_evaluate_prompts_when_store_empty() {
        let (gate, _) = gate_with_backend(PermissionDescriptor::location());
        assert_eq!(gate.evaluate(), GateDecision::Prompt);

        let (gate, _) = gate_with_backend(PermissionDescriptor::photo());
        assert_eq!(gate.evaluate(), GateDecision::Prompt);
    }

    #[test]
    fn test_evaluate_bypasses_granted_and_skipped() {
        let (gate, backend) = gate_with_backend(PermissionDescriptor::location());
        backend
            .set("userLocation", r#"{"lat":1.0,"lng":2.0}"#)
            .unwrap();
        assert_eq!(gate.evaluate(), GateDecision::Bypass);

        let (gate, backend) = gate_with_backend(PermissionDescriptor::photo());
        backend.set("photoPermission", "skipped").unwrap();
        assert_eq!(gate.evaluate(), GateDecision::Bypass);
    }

    #[test]
    fn test_skip_then_remount_bypasses() {
        // Escenario: store vacío -> Prompt -> skip -> remount -> Bypass
        let (gate, backend) = gate_with_backend(PermissionDescriptor::location());
        assert_eq!(gate.evaluate(), GateDecision::Prompt);

        gate.skip();
        assert_eq!(backend.get("locationSkipped").as_deref(), Some("true"));

        let remounted =
            PermissionGate::new(PermissionDescriptor::location(), ConsentStore::new(backend));
        assert_eq!(remounted.evaluate(), GateDecision::Bypass);
    }

    #[test]
    fn test_successful_grant_persists_and_clears_skip() {
        // Escenario: locationSkipped=true -> grant exitoso -> payload escrito
        // y marcador de skip ausente
        let (gate, backend) = gate_with_backend(PermissionDescriptor::location());
        backend.set("locationSkipped", "true").unwrap();

        let coords = Coordinates { lat: 10.0, lng: 20.0 };
        let resolver = ImmediateResolver(Ok(Some(ConsentPayload::Coordinates(coords))));
        let outcome = Rc::new(RefCell::new(None));
        let outcome_clone = outcome.clone();
        gate.grant(&resolver, move |result| {
            *outcome_clone.borrow_mut() = Some(result);
        });

        assert!(matches!(*outcome.borrow(), Some(Ok(()))));
        assert!(backend.get("locationSkipped").is_none());
        let stored = backend.get("userLocation").unwrap();
        let parsed: Coordinates = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, coords);
        assert!(!gate.is_granting());
    }

    #[test]
    fn test_failed_grant_leaves_store_untouched() {
        for error in [
            ResolverError::Unsupported,
            ResolverError::Denied,
            ResolverError::Unavailable,
        ] {
            let (gate, backend) = gate_with_backend(PermissionDescriptor::location());
            let resolver = ImmediateResolver(Err(error));

            let outcome = Rc::new(RefCell::new(None));
            let outcome_clone = outcome.clone();
            gate.grant(&resolver, move |result| {
                *outcome_clone.borrow_mut() = Some(result);
            });

            // Fallo: ningún registro escrito, el permiso sigue Undecided
            assert!(backend.snapshot().is_empty());
            assert!(matches!(*outcome.borrow(), Some(Err(_))));
            assert_eq!(gate.evaluate(), GateDecision::Prompt);
        }
    }

    #[test]
    fn test_at_most_one_grant_in_flight() {
        let (gate, _) = gate_with_backend(PermissionDescriptor::location());
        let resolver = PendingResolver::default();

        let calls = Rc::new(Cell::new(0u32));
        let calls_first = calls.clone();
        gate.grant(&resolver, move |_| {
            calls_first.set(calls_first.get() + 1);
        });
        assert!(gate.is_granting());

        // Segundo intento mientras hay uno en vuelo: ignorado
        let calls_second = calls.clone();
        gate.grant(&resolver, move |_| {
            calls_second.set(calls_second.get() + 1);
        });

        resolver.fire(Ok(None));
        assert_eq!(calls.get(), 1);
        assert!(!gate.is_granting());
    }

    #[test]
    fn test_late_callback_after_gate_teardown_still_writes() {
        // La escritura al store es independiente de la vida de la vista/gate
        let backend = MemoryBackend::new();
        let resolver = PendingResolver::default();
        {
            let gate = PermissionGate::new(
                PermissionDescriptor::photo(),
                ConsentStore::new(backend.clone()),
            );
            gate.grant(&resolver, |_| {});
            // El gate se destruye con el grant todavía en vuelo
        }
        resolver.fire(Ok(None));

        let store = ConsentStore::new(backend);
        assert_eq!(
            store.read_state(&PermissionDescriptor::photo()),
            ConsentState::Granted(None)
        );
    }

    #[test]
    fn test_photo_skip_then_remount_bypasses() {
        let (gate, backend) = gate_with_backend(PermissionDescriptor::photo());
        gate.skip();

        let remounted =
            PermissionGate::new(PermissionDescriptor::photo(), ConsentStore::new(backend));
        assert_eq!(remounted.evaluate(), GateDecision::Bypass);
    }
}
