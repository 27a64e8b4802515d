use axum::{Router, routing::get};

use crate::controllers::predict_controller::{
    predict, predict_info, solar_predict, solar_predict_info,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", get(predict_info).post(predict))
        .route("/solar-predict", get(solar_predict_info).post(solar_predict))
        .with_state(state)
}
