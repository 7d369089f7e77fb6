// ============================================================================
// STORAGE HELPERS - Acceso a localStorage del navegador
// ============================================================================

use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer un valor crudo. La ausencia (o un storage inaccesible) es `None`.
pub fn get_raw(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

/// Escribir un valor crudo. Puede fallar por cuota agotada: el llamador
/// decide si la escritura abandonada es fatal (en esta app nunca lo es).
pub fn set_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage (cuota?)".to_string())?;
    Ok(())
}

/// Eliminar una clave. Idempotente: eliminar una clave ausente es un no-op.
pub fn remove_raw(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
