//! Topics, submitted rankings, and phase tracking

pub mod entities;
pub mod expertise;
