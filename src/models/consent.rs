// ============================================================================
// CONSENT MODELS - Permisos de onboarding y su registro persistido
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tipo de permiso gestionado por el onboarding (abierto a extensión)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionType {
    Location,
    Photo,
}

impl PermissionType {
    /// Nombre legible para logs
    pub fn label(&self) -> &'static str {
        match self {
            PermissionType::Location => "location",
            PermissionType::Photo => "photo",
        }
    }
}

/// Estado de decisión de un permiso
#[derive(Debug, Clone, PartialEq)]
pub enum ConsentState {
    /// Sin registro: primer arranque o storage limpiado
    Undecided,
    /// Concedido, con payload opcional (p.ej. coordenadas)
    Granted(Option<ConsentPayload>),
    /// Omitido explícitamente por el usuario
    Skipped,
}

impl ConsentState {
    /// Un permiso está decidido si fue concedido u omitido
    pub fn is_decided(&self) -> bool {
        !matches!(self, ConsentState::Undecided)
    }
}

/// Payload específico del permiso (por ahora solo coordenadas de localización)
#[derive(Debug, Clone, PartialEq)]
pub enum ConsentPayload {
    Coordinates(Coordinates),
}

/// Par de coordenadas geográficas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
