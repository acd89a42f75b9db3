//! Modelos de dominio
//!
//! Structs que mapean a las tablas de PostgreSQL.

pub mod assignment;
pub mod operator;
pub mod van;

pub use assignment::Assignment;
pub use operator::Operator;
pub use van::Van;
