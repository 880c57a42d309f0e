//! Autoproxy: declarative proxy registration for application bootstrap.
//!
//! An entry point declares which interfaces should be proxied. During
//! bootstrap the registrar discovers those target interfaces (listed
//! explicitly or found by scanning namespaces for a marker) and registers a
//! single installer record into the host's component registry. The installer
//! then wraps every constructed instance of a target type before the rest of
//! the application sees it.
//!
//! # Architecture
//!
//! Autoproxy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure declaration, type and namespace model
//! - **Ports**: Abstract trait interfaces for introspection, scanning,
//!   registration and proxy construction
//! - **Adapters**: In-memory implementations of ports
//!
//! # Modules
//!
//! - [`interception`]: Target discovery, installer registration and installation
//! - [`config`]: Registrar configuration loading

pub mod config;
pub mod interception;
