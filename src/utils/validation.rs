//! Utilidades de validación
//! 
//! Funciones de validación personalizadas para `validator` y
//! formateo de errores para las respuestas de la API.

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// Precio máximo representable en NUMERIC(10,2)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_409_065_407, 2, 0, false, 2);

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que el precio sea no negativo y quepa en NUMERIC(10,2)
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("range");
        error.message = Some("must not be negative".into());
        return Err(error);
    }
    if value.round_dp(2) > MAX_PRICE {
        let mut error = ValidationError::new("range");
        error.add_param("max".into(), &MAX_PRICE.to_string());
        error.message = Some("exceeds the maximum price".into());
        return Err(error);
    }
    Ok(())
}

/// Convertir los errores de `validator` en una línea legible
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{} {}", field, reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
