// ============================================================================
// NAVIGATION REDIRECTOR - Avance por la secuencia fija de onboarding
// ============================================================================

use crate::models::consent::PermissionType;

/// Rutas de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    LocationGate,
    PhotoGate,
    Home,
    Chatbot,
    PasswordReset,
    RoutePlan,
}

impl Route {
    /// Identificador de ruta (para logs y para el hash de la URL)
    pub fn path(&self) -> &'static str {
        match self {
            Route::LocationGate => "/onboarding/location",
            Route::PhotoGate => "/onboarding/photo",
            Route::Home => "/home",
            Route::Chatbot => "/chatbot",
            Route::PasswordReset => "/password-reset",
            Route::RoutePlan => "/route-plan",
        }
    }
}

/// Paso actual dentro de la secuencia de onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Location,
    Photo,
    Home,
}

impl OnboardingStep {
    pub fn for_permission(permission: PermissionType) -> Self {
        match permission {
            PermissionType::Location => OnboardingStep::Location,
            PermissionType::Photo => OnboardingStep::Photo,
        }
    }
}

/// Mapeo puro paso actual -> siguiente ruta de la secuencia
/// localización -> fotos -> home. Idempotente en `Home`: avanzar desde home
/// deja al usuario en home.
pub fn advance(current: OnboardingStep) -> Route {
    match current {
        OnboardingStep::Location => Route::PhotoGate,
        OnboardingStep::Photo => Route::Home,
        OnboardingStep::Home => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_location_photo_home() {
        assert_eq!(advance(OnboardingStep::Location), Route::PhotoGate);
        assert_eq!(advance(OnboardingStep::Photo), Route::Home);
    }

    #[test]
    fn test_advance_is_idempotent_at_home() {
        let mut route = advance(OnboardingStep::Home);
        assert_eq!(route, Route::Home);
        // Repetir el avance no mueve al usuario de home
        for _ in 0..3 {
            route = advance(OnboardingStep::Home);
            assert_eq!(route, Route::Home);
        }
    }

    #[test]
    fn test_step_for_permission() {
        assert_eq!(
            advance(OnboardingStep::for_permission(PermissionType::Location)),
            Route::PhotoGate
        );
        assert_eq!(
            advance(OnboardingStep::for_permission(PermissionType::Photo)),
            Route::Home
        );
    }
}
