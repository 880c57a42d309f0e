//! In-memory adapters for hosts without a type catalog of their own and for
//! tests.

mod entry_point;
mod registry;
mod scanner;

pub use entry_point::StaticEntryPoint;
pub use registry::InMemoryComponentRegistry;
pub use scanner::InMemoryCandidateScanner;
