use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::product::NewProduct;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_not_blank, validate_price};

// Request para crear un producto. Los campos obligatorios son Option
// para que su ausencia llegue a la validación y no al extractor JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "is required"),
        length(max = 255, message = "must be at most 255 characters"),
        custom = "validate_not_blank"
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(required(message = "is required"), custom = "validate_price")]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock: Option<i32>,

    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub category: Option<String>,

    #[validate(url(message = "must be a valid URL"), length(max = 255))]
    pub image_url: Option<String>,

    pub is_active: Option<bool>,
}

impl CreateProductRequest {
    /// Los campos opcionales vacíos (el formulario de admin envía "")
    /// se tratan como ausentes antes de validar.
    pub fn normalized(self) -> Self {
        Self {
            description: non_blank(self.description),
            category: non_blank(self.category),
            image_url: non_blank(self.image_url),
            ..self
        }
    }
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = AppError;

    /// Validación explícita antes de cualquier acceso a los stores
    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let request = request.normalized();
        request.validate()?;

        let name = request
            .name
            .map(|n| n.trim().to_string())
            .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;
        let price = request
            .price
            .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;

        Ok(NewProduct {
            name,
            description: request.description,
            price: to_money(price),
            stock: request.stock.unwrap_or(0),
            category: request.category,
            image_url: request.image_url,
            is_active: request.is_active.unwrap_or(true),
        })
    }
}

// Redondear a exactamente 2 decimales, como NUMERIC(10,2)
fn to_money(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp(2);
    rounded.rescale(2);
    rounded
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> CreateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request_applies_defaults() {
        let product = NewProduct::try_from(parse(json!({
            "name": "  Test Pen ",
            "price": 10,
            "description": ""
        })))
        .unwrap();

        assert_eq!(product.name, "Test Pen");
        assert_eq!(product.price.to_string(), "10.00");
        assert_eq!(product.stock, 0);
        assert!(product.is_active);
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let product = NewProduct::try_from(parse(json!({ "name": "Widget", "price": 19.999 }))).unwrap();
        assert_eq!(product.price.to_string(), "20.00");
    }

    #[test]
    fn test_missing_name_is_validation_error() {
        let err = NewProduct::try_from(parse(json!({ "price": 10.0 }))).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("name"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = NewProduct::try_from(parse(json!({ "name": "   ", "price": 1 }))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let err = NewProduct::try_from(parse(json!({ "name": "A", "price": -1 }))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = NewProduct::try_from(parse(json!({ "name": "A", "price": 1, "stock": -5 }))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_optional_fields_are_dropped_before_validation() {
        let product = NewProduct::try_from(parse(json!({
            "name": "Pen",
            "description": "Blue pen",
            "price": 10.0,
            "stock": 5,
            "category": "  ",
            "image_url": ""
        })))
        .unwrap();

        assert_eq!(product.description.as_deref(), Some("Blue pen"));
        assert_eq!(product.category, None);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_invalid_image_url_is_rejected() {
        let err = NewProduct::try_from(parse(json!({
            "name": "A",
            "price": 1,
            "image_url": "not a url"
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
