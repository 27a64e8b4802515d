pub mod fallback;
pub mod ml_client;
pub mod power_model;
pub mod prediction_service;
pub mod recommendations;
pub mod solar_geometry;
pub mod validation;
pub mod weather;
