// ============================================================================
// SEARCH SESSION MANAGER - Token de sesión para el API de geocoding facturado
// ============================================================================
// El API externo factura por sesión: un token agrupa todas las búsquedas
// entre un start y un end en un único evento facturable. Instancia construida
// explícitamente e inyectada (nada de singletons a nivel de módulo).
// ============================================================================

use uuid::Uuid;

/// Reporte emitido al cerrar una sesión (telemetría/logs)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub token: String,
    pub request_count: u32,
    pub duration_ms: i64,
}

/// Gestor del token de sesión de búsqueda.
/// Invariante: como mucho un token activo a la vez; el contador solo tiene
/// sentido mientras hay sesión activa.
pub struct SearchSessionManager {
    token: Option<String>,
    request_count: u32,
    started_at_ms: Option<i64>,
}

impl SearchSessionManager {
    pub fn new() -> Self {
        Self {
            token: None,
            request_count: 0,
            started_at_ms: None,
        }
    }

    /// Iniciar sesión: token UUID v4 fresco (128 bits de entropía, forma
    /// textual canónica), contador a cero, timestamp de inicio. Si ya había
    /// una sesión activa se cierra primero: ningún token se filtra.
    pub fn start_session(&mut self) -> String {
        if self.token.is_some() {
            log::info!("🔁 Sesión de búsqueda activa al iniciar otra, cerrando la anterior");
            self.end_session();
        }

        let token = Uuid::new_v4().to_string();
        self.token = Some(token.clone());
        self.request_count = 0;
        self.started_at_ms = Some(now_ms());
        log::info!("🔎 Sesión de búsqueda iniciada: {}", token);
        token
    }

    /// Lectura pura del token activo
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Lectura pura: ¿hay sesión activa?
    pub fn has_active_session(&self) -> bool {
        self.token.is_some()
    }

    /// Contabilizar una llamada al API. Seguro sin sesión activa: el
    /// contador incrementa igual pero carece de sentido y se ignora aguas
    /// abajo (los llamadores solo deberían invocarlo con sesión activa).
    pub fn increment_request_count(&mut self) {
        self.request_count += 1;
        if self.token.is_none() {
            log::warn!("⚠️ increment_request_count sin sesión activa");
        }
    }

    /// Cerrar sesión. Sin sesión activa es un no-op. Con sesión activa,
    /// token, contador y timestamp se limpian juntos: ningún estado parcial
    /// es observable.
    pub fn end_session(&mut self) -> Option<SessionReport> {
        let token = self.token.take()?;
        let started = self.started_at_ms.take().unwrap_or_else(now_ms);
        let report = SessionReport {
            token,
            request_count: self.request_count,
            duration_ms: (now_ms() - started).max(0),
        };
        self.request_count = 0;

        log::info!(
            "🧾 Sesión de búsqueda cerrada: {} requests en {} ms",
            report.request_count,
            report.duration_ms
        );
        Some(report)
    }

    /// end + start inmediato: nunca dos tokens vivos, sin hueco inconsistente
    pub fn restart_session(&mut self) -> String {
        self.end_session();
        self.start_session()
    }
}

impl Default for SearchSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_creates_canonical_uuid_token() {
        let mut manager = SearchSessionManager::new();
        let token = manager.start_session();
        assert!(manager.has_active_session());
        assert_eq!(manager.get_token(), Some(token.as_str()));
        // Forma textual canónica de UUID: 36 chars con guiones
        assert_eq!(token.len(), 36);
        assert!(Uuid::parse_str(&token).is_ok());
    }

    #[test]
    fn test_end_reports_count_and_clears_everything() {
        // Escenario: start -> dos increments -> end reporta 2 y el token
        // deja de ser observable
        let mut manager = SearchSessionManager::new();
        let token = manager.start_session();
        manager.increment_request_count();
        manager.increment_request_count();

        let report = manager.end_session().unwrap();
        assert_eq!(report.token, token);
        assert_eq!(report.request_count, 2);
        assert!(report.duration_ms >= 0);

        assert!(manager.get_token().is_none());
        assert!(!manager.has_active_session());
    }

    #[test]
    fn test_end_with_zero_requests_then_double_end() {
        let mut manager = SearchSessionManager::new();
        manager.start_session();

        let report = manager.end_session().unwrap();
        assert_eq!(report.request_count, 0);

        // Segundo end seguido: no-op
        assert!(manager.end_session().is_none());
    }

    #[test]
    fn test_restart_always_yields_single_active_token() {
        let mut manager = SearchSessionManager::new();
        let mut previous: Option<String> = None;
        for _ in 0..5 {
            let token = manager.restart_session();
            assert!(manager.has_active_session());
            assert_eq!(manager.get_token(), Some(token.as_str()));
            if let Some(prev) = previous {
                assert_ne!(prev, token);
            }
            previous = Some(token);
        }
    }

    #[test]
    fn test_start_over_active_session_replaces_token() {
        let mut manager = SearchSessionManager::new();
        let first = manager.start_session();
        manager.increment_request_count();

        let second = manager.start_session();
        assert_ne!(first, second);
        assert_eq!(manager.get_token(), Some(second.as_str()));

        // El contador se reinició con la nueva sesión
        let report = manager.end_session().unwrap();
        assert_eq!(report.request_count, 0);
    }

    #[test]
    fn test_increment_without_session_is_safe() {
        let mut manager = SearchSessionManager::new();
        manager.increment_request_count();
        assert!(!manager.has_active_session());
        // Sin sesión no hay reporte que observe el contador
        assert!(manager.end_session().is_none());
    }
}
