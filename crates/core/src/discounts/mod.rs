//! Discount resolution
//!
//! Turns a coupon's discount rule into a concrete amount of money for a
//! given course price.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::coupons::CouponDiscount;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage discounts above 100% are invalid.
    #[error("percent discount must be less than or equal to 100%")]
    PercentTooLarge,

    /// The coupon has neither a fixed nor a percentage discount.
    #[error("coupon has no discount")]
    NoDiscount,

    /// A fixed discount was given in a different currency to the price.
    #[error("discount currency {found} does not match price currency {expected}")]
    CurrencyMismatch {
        /// Currency of the price being discounted
        expected: &'static str,
        /// Currency of the fixed discount
        found: &'static str,
    },

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Resolve the amount of money a discount takes off `price`.
///
/// Fixed amounts are returned unchanged, independent of the price. Percentages
/// are taken of the price and rounded to the nearest minor unit.
///
/// # Errors
///
/// - [`DiscountError::NoDiscount`]: the discount is [`CouponDiscount::None`].
/// - [`DiscountError::PercentTooLarge`]: the percentage exceeds 100%.
/// - [`DiscountError::CurrencyMismatch`]: a fixed amount is in another currency.
/// - [`DiscountError::PercentConversion`]: the percentage amount overflowed.
pub fn discount_amount<'a>(
    discount: &CouponDiscount<'a>,
    price: &Money<'a, Currency>,
) -> Result<Money<'a, Currency>, DiscountError> {
    match discount {
        CouponDiscount::Fixed(amount) => {
            ensure_same_currency(price, amount)?;

            Ok(*amount)
        }
        CouponDiscount::Percent(percent) => {
            if exceeds_whole(percent) {
                return Err(DiscountError::PercentTooLarge);
            }

            let minor = percent_of_minor(percent, price.to_minor_units())?;

            Ok(Money::from_minor(minor, price.currency()))
        }
        CouponDiscount::None => Err(DiscountError::NoDiscount),
    }
}

/// Subtract a resolved discount from a price.
///
/// # Errors
///
/// Returns [`DiscountError::Money`] if the money arithmetic fails.
pub fn discounted_price<'a>(
    price: &Money<'a, Currency>,
    discount: &Money<'a, Currency>,
) -> Result<Money<'a, Currency>, DiscountError> {
    ensure_same_currency(price, discount)?;

    Ok(price.sub(*discount)?)
}

/// Whether a percentage is greater than 100%.
pub fn exceeds_whole(percent: &Percentage) -> bool {
    // decimal_percentage doesn't expose the underlying Decimal
    ((*percent) * Decimal::ONE) > Decimal::ONE
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the calculation overflows or
/// cannot be safely represented.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE)
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

fn ensure_same_currency(
    price: &Money<'_, Currency>,
    other: &Money<'_, Currency>,
) -> Result<(), DiscountError> {
    if price.currency() == other.currency() {
        Ok(())
    } else {
        Err(DiscountError::CurrencyMismatch {
            expected: price.currency().iso_alpha_code,
            found: other.currency().iso_alpha_code,
        })
    }
}
