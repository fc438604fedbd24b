use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const MIN_PRICE: Decimal = Decimal::ONE;
const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
/// Matches the `DECIMAL(18,2)` column
const PRICE_SCALE: u32 = 2;

/// Price must lie in `[1, 10000]` with at most two decimal places
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        let mut error = ValidationError::new("price_range");
        error.message = Some("price must be between 1 and 10000".into());
        return Err(error);
    }
    if price.normalize().scale() > PRICE_SCALE {
        let mut error = ValidationError::new("price_scale");
        error.message = Some("price must have at most 2 decimal places".into());
        return Err(error);
    }
    Ok(())
}

/// Product as exchanged over HTTP.
///
/// `id` is ignored on create and identifies the row on update. The
/// zero value (`id == 0`) stands for "no product" in the conversion layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i64,

    #[validate(length(min = 1, max = 150))]
    #[schema(example = "Widget")]
    pub name: String,

    /// Decimal price, sent as a JSON number
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(length(max = 50))]
    #[schema(example = "Tools")]
    pub category_name: Option<String>,

    #[validate(length(max = 300))]
    pub image_url: Option<String>,
}
