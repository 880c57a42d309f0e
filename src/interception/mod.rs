//! Declarative proxy registration.
//!
//! An application entry point declares which interfaces should be proxied,
//! either by listing them or by naming namespaces to scan for interfaces
//! carrying a marker. During bootstrap the registrar resolves that
//! declaration into a target set and registers exactly one installer record
//! in the host registry. The installer later wraps every constructed
//! instance of a target type. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
