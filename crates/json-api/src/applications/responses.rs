//! Coupon Application Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use coupons::prelude::CouponApplication;

/// Coupon Application Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplicationResponse {
    /// Whether the coupon was applied
    pub applied: bool,

    /// Why the coupon was, or was not, applied
    pub reason: Option<String>,

    /// Human-readable restatement of the outcome
    pub message: String,

    /// The price left to pay, in pence/cents
    pub final_price: i64,

    /// ISO currency code of the final price
    pub currency: String,
}

impl From<&CouponApplication<'_>> for ApplicationResponse {
    fn from(application: &CouponApplication<'_>) -> Self {
        ApplicationResponse {
            applied: application.is_applied(),
            reason: application.reason().map(|reason| reason.as_str().to_string()),
            message: application.message(),
            final_price: application.final_price().to_minor_units(),
            currency: application
                .final_price()
                .currency()
                .iso_alpha_code
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use coupons::prelude::ApplicationReason;
    use rusty_money::{Money, iso::GBP};

    use super::*;

    #[test]
    fn rejected_application_keeps_reason_text() {
        let application = CouponApplication::rejected(
            "NOPE",
            ApplicationReason::NotFound,
            Money::from_minor(5000, GBP),
        );

        let response = ApplicationResponse::from(&application);

        assert!(!response.applied);
        assert_eq!(response.reason.as_deref(), Some("Coupon not found"));
        assert_eq!(response.final_price, 5000);
        assert_eq!(response.currency, "GBP");
    }
}
