//! Utilidades de validación
//!
//! Validaciones de formato que no cubren los derives de `validator`.

use validator::ValidationError;

/// Validar formato de matrícula de vehículo
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 2 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("AB-123-CD").is_ok());
        assert!(validate_plate("A").is_err());
        assert!(validate_plate("ABCDEFGHIJK").is_err());
    }
}
