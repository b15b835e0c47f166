//! Game rules.
//!
//! - `GameEngine`: applies answers and mini-game results, rotates turns
//! - `LifePolicy`: how an answer changes life
//! - `Route` / `PlayerStatus`: routing outcomes and the per-player state machine
//! - `FinalProfile`: normalized end-of-game attribute chart

pub mod engine;
pub mod policy;
pub mod profile;
pub mod route;

pub use engine::GameEngine;
pub use policy::LifePolicy;
pub use profile::FinalProfile;
pub use route::{PlayerStatus, Route};
