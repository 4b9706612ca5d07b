//! Infrastructure layer for topic-consensus
//!
//! Adapters implementing the application-layer store ports. Persistence
//! mechanics are out of scope for the consensus core, so the reference
//! adapter is an in-memory store suite; it doubles as the harness for the
//! end-to-end tests. A TOML fixture loader seeds a store from a
//! declarative file.

pub mod fixture;
pub mod memory;

// Re-export commonly used types
pub use fixture::{ConsensusFixture, FixtureLoader};
pub use memory::InMemoryStore;
