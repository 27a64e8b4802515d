pub mod predict_controller;
