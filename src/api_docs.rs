use utoipa::OpenApi;

use crate::controllers::predict_controller;
use crate::models::prediction;

#[derive(OpenApi)]
#[openapi(
    paths(
        predict_controller::solar_predict,
        predict_controller::solar_predict_info,
        predict_controller::predict,
        predict_controller::predict_info
    ),
    components(
        schemas(
            prediction::SolarPredictRequest,
            prediction::ManualPredictRequest,
            prediction::PredictionEnvelope,
            prediction::PredictionResult,
            prediction::WeatherData,
            prediction::Analysis,
            prediction::Recommendation,
            prediction::Priority
        )
    ),
    tags(
        (name = "solar-predict", description = "Solar Power Prediction API")
    )
)]
pub struct ApiDoc;
