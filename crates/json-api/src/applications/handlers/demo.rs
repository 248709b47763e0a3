//! Demo Coupon Application Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{applications::responses::ApplicationResponse, extensions::*, state::State};

/// Demo Handler
///
/// Applies the configured demo code to the configured course and returns the
/// result as JSON text.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let application = state.service.apply_coupon(&state.course, &state.demo_code);

    let body = serde_json::to_string(&ApplicationResponse::from(&application))
        .or_500("failed to serialize demo application")?;

    res.status_code(StatusCode::OK);
    res.render(Text::Plain(body));

    Ok(())
}
