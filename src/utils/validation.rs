// ============================================================================
// VALIDATION - Helpers puros de validación de formularios
// ============================================================================

/// Validación ligera de email: algo@algo.algo, sin espacios.
/// El backend hace la validación real; esto solo evita requests inútiles.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(' ') {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // El dominio necesita al menos un punto interior
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    dot > 0 && dot < domain.len() - 1 && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana.perez@mail.example.org "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@example..com"));
        assert!(!is_valid_email("ana maria@example.com"));
    }
}
