pub mod assignment_routes;
pub mod operator_routes;
pub mod van_routes;
