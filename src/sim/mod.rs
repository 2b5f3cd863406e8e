//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::crossed_platform_top;
pub use rect::Rect;
pub use state::{Camera, GameEvent, GameState, Level, Platform, PlatformKind, Player};
pub use tick::{TickInput, tick};
