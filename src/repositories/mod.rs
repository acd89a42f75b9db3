//! Repositorios
//!
//! Todo el SQL vive aquí; un repositorio por agregado.

pub mod assignment_repository;
pub mod operator_repository;
pub mod van_repository;

pub use assignment_repository::AssignmentRepository;
pub use operator_repository::OperatorRepository;
pub use van_repository::VanRepository;
