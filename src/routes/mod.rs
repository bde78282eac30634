pub mod dashboard_routes;
pub mod delivery_routes;
pub mod expense_routes;
pub mod platform_routes;
pub mod report_routes;
pub mod vehicle_routes;
