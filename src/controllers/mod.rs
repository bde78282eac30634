//! Controllers de la API
//!
//! Orquestan requests validados contra los motores puros y el store.

pub mod dashboard_controller;
pub mod delivery_controller;
pub mod expense_controller;
pub mod report_controller;
pub mod vehicle_controller;
