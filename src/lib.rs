//! # Elo Insight
//!
//! A gaming statistics backend that pulls match history from Riot and
//! Steam and reshapes it into unified per-player statistics.
//!
//! ## Architecture
//!
//! - **models**: Wire/response types and the normalized match record
//! - **fetch**: Upstream HTTP clients (Riot, Steam)
//! - **normalize**: Provider payload to match record reduction
//! - **calculate**: KDA, incremental means, aggregation and scores
//! - **stats**: Bounded, ordered fetch pipeline and response assembly
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod stats;

pub use models::*;
