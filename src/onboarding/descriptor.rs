// ============================================================================
// PERMISSION DESCRIPTOR - Parametrización del gate por tipo de permiso
// ============================================================================
// Un único gate genérico en lugar de un componente casi duplicado por
// permiso: el descriptor aporta las claves de storage y los textos del prompt
// ============================================================================

use crate::models::consent::PermissionType;

/// Descriptor de un permiso: claves de persistencia y contenido del prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDescriptor {
    pub permission: PermissionType,
    /// Clave del registro de decisión (payload o sentinela)
    pub storage_key: &'static str,
    /// Clave separada para el marcador de skip, si el permiso usa una
    pub skip_marker_key: Option<&'static str>,
    pub prompt_title: &'static str,
    pub prompt_body: &'static str,
}

impl PermissionDescriptor {
    /// Permiso de localización: payload de coordenadas + marcador de skip aparte
    pub fn location() -> Self {
        Self {
            permission: PermissionType::Location,
            storage_key: "userLocation",
            skip_marker_key: Some("locationSkipped"),
            prompt_title: "Activer la localisation",
            prompt_body: "EcomoveX utilise votre position pour calculer des trajets éco-responsables près de vous.",
        }
    }

    /// Permiso de fotos: una sola clave con sentinela granted/skipped
    pub fn photo() -> Self {
        Self {
            permission: PermissionType::Photo,
            storage_key: "photoPermission",
            skip_marker_key: None,
            prompt_title: "Accès aux photos",
            prompt_body: "Autorisez l'accès aux photos pour partager vos trajets et souvenirs de voyage.",
        }
    }

    /// Descriptor correspondiente a un tipo de permiso
    pub fn for_permission(permission: PermissionType) -> Self {
        match permission {
            PermissionType::Location => Self::location(),
            PermissionType::Photo => Self::photo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_per_permission() {
        let location = PermissionDescriptor::location();
        assert_eq!(location.storage_key, "userLocation");
        assert_eq!(location.skip_marker_key, Some("locationSkipped"));

        let photo = PermissionDescriptor::photo();
        assert_eq!(photo.storage_key, "photoPermission");
        assert_eq!(photo.skip_marker_key, None);
    }

    #[test]
    fn test_for_permission_maps_to_same_descriptor() {
        assert_eq!(
            PermissionDescriptor::for_permission(PermissionType::Location),
            PermissionDescriptor::location()
        );
        assert_eq!(
            PermissionDescriptor::for_permission(PermissionType::Photo),
            PermissionDescriptor::photo()
        );
    }
}
