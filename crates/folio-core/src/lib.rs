//! Motion engine behind the portfolio site's cursor, 3D logo, magnetic
//! buttons and loading screen.
//!
//! Everything here is pure: input handlers overwrite samples, and a host
//! frame driver calls `tick(dt)` once per displayed frame.

pub mod animation;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod follower;
pub mod hover;
pub mod inertia;
pub mod loader;
pub mod magnetic;
pub mod rotation;
pub mod sampler;

pub use animation::*;
pub use config::*;
pub use cursor::*;
pub use error::ConfigError;
pub use follower::*;
pub use hover::*;
pub use inertia::*;
pub use loader::*;
pub use magnetic::*;
pub use rotation::*;
pub use sampler::*;
