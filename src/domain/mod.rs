//! Domain Layer
//!
//! Core business objects and the ports the application depends on.

pub mod entities;
pub mod errors;
pub mod ports;
