//! Groups and their voting configuration

pub mod entities;
pub mod voting_mode;
