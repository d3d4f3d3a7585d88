use rust_decimal::Decimal;
use validator::ValidationError;

pub mod cart;
pub mod orders;
pub mod products;
pub mod regions;
pub mod reviews;
pub mod users;

/// Money amounts may be zero but never negative.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}
