//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{applications::handlers, healthcheck, observability, state::State};

/// Build the full application router around shared state.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(observability::request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(handlers::demo::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("applications").post(handlers::create::handler));

    let doc = OpenApi::new("Coupons API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{applications::responses::ApplicationResponse, test_helpers::demo_state};

    use super::*;

    fn make_service() -> Service {
        Service::new(app_router(demo_state("10PERCENT")))
    }

    #[tokio::test]
    async fn test_root_serves_demo_application() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .send(&make_service())
            .await;

        let body: ApplicationResponse = serde_json::from_str(&res.take_string().await?)?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.final_price, 4500);

        Ok(())
    }

    #[tokio::test]
    async fn test_applications_route_is_mounted() -> TestResult {
        let mut res = TestClient::post("http://example.com/applications")
            .json(&json!({ "code": "EMPTY", "course": { "name": "Testing", "price": 5000 } }))
            .send(&make_service())
            .await;

        let body: ApplicationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.applied);
        assert_eq!(body.reason.as_deref(), Some("No valid discount on coupon"));

        Ok(())
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let res = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
