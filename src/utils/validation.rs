//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que no se expresan bien con los atributos derive de `validator`.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Placas estilo filipino/latino: letras, números y separadores opcionales
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Za-z0-9]{2,4}[- ]?[A-Za-z0-9]{2,5}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa de vehículo
pub fn validate_plate_number(value: &str) -> Result<(), ValidationError> {
    if !PLATE_RE.is_match(value.trim()) {
        let mut error = ValidationError::new("plate_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("DT-01").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from(12500)).is_ok());
        assert!(validate_non_negative(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_plate_number() {
        assert!(validate_plate_number("ABC-1234").is_ok());
        assert!(validate_plate_number("NDF 7215").is_ok());
        assert!(validate_plate_number("AB12CD").is_ok());
        assert!(validate_plate_number("A").is_err());
        assert!(validate_plate_number("!!-????").is_err());
    }
}
