//! Core data models for the stats service.

mod league;
mod record;
mod riot;
mod riot_id;
mod valorant;

pub use league::*;
pub use record::*;
pub use riot::*;
pub use riot_id::*;
pub use valorant::*;
