//! Use cases of the consensus core

pub mod assemble_profile;
pub mod compute_consensus;
