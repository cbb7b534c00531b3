use crate::error::AppError;

pub const PRICE_MIN: i32 = 0;
pub const PRICE_MAX: i32 = 10_000;

/// Price bounds check applied on both create and update.
pub fn validate_price(price: i32) -> Result<(), AppError> {
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(AppError::InvalidPrice(price));
    }
    Ok(())
}
