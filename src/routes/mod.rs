pub mod predict_routes;
