pub mod assignment_controller;
pub mod operator_controller;
pub mod van_controller;
