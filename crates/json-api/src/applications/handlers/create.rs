//! Create Coupon Application Handler

use std::sync::Arc;

use rusty_money::Money;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use coupons::prelude::Course;

use crate::{applications::responses::ApplicationResponse, extensions::*, state::State};

/// Course to price
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CourseRequest {
    /// Course display name
    pub name: String,

    /// Course price in pence/cents, in the server's currency
    pub price: i64,
}

/// Create Coupon Application Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateApplicationRequest {
    /// Coupon code to redeem
    pub code: String,

    /// Course to redeem it against
    pub course: CourseRequest,
}

/// Create Coupon Application Handler
///
/// Applies a coupon code to a course. Rejected coupons are reported in the
/// response body, not as an error status.
#[endpoint(
    tags("applications"),
    summary = "Apply Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon application result"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateApplicationRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplicationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let currency = state.course.price().currency();
    let course = Course::new(
        request.course.name,
        Money::from_minor(request.course.price, currency),
    );

    let application = state.service.apply_coupon(&course, &request.code);

    Ok(Json(ApplicationResponse::from(&application)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{demo_state, state_service};

    use super::*;

    fn make_service() -> Service {
        state_service(
            demo_state("10PERCENT"),
            Router::with_path("applications").post(handler),
        )
    }

    async fn apply(code: &str, price: i64) -> TestResult<(Option<StatusCode>, ApplicationResponse)> {
        let mut res = TestClient::post("http://example.com/applications")
            .json(&json!({ "code": code, "course": { "name": "Testing", "price": price } }))
            .send(&make_service())
            .await;

        let body: ApplicationResponse = res.take_json().await?;

        Ok((res.status_code, body))
    }

    #[tokio::test]
    async fn test_percent_coupon_is_applied() -> TestResult {
        let (status, body) = apply("10PERCENT", 5000).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert!(body.applied);
        assert_eq!(body.reason, None);
        assert_eq!(body.final_price, 4500);

        Ok(())
    }

    #[tokio::test]
    async fn test_fixed_coupon_covering_price_is_free() -> TestResult {
        let (status, body) = apply("FIVER", 300).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert!(body.applied);
        assert_eq!(
            body.reason.as_deref(),
            Some("Discount met or exceeded course price")
        );
        assert_eq!(body.final_price, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_percent_over_one_hundred_is_rejected() -> TestResult {
        let (status, body) = apply("TOOMUCH", 5000).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert!(!body.applied);
        assert_eq!(
            body.reason.as_deref(),
            Some("Percent discount must be less than or equal to 100%")
        );
        assert_eq!(body.final_price, 5000);

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let res = TestClient::post("http://example.com/applications")
            .json(&json!({ "code": 10 }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
