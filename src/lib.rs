//! Sky Bounce - a vertical platform-bouncing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platform collision,
//!   camera scrolling, procedural level generation)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Web Audio synthesis (background music + sound effects)
//! - `settings`: User preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// World coordinates are in pixels, origin top-left, y grows downward.
/// The camera offset becomes more negative as the player climbs.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Viewport dimensions in world pixels
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// Player spawn point: horizontally centered, lower quarter of the window
    pub const PLAYER_SPAWN_X: f32 = (WINDOW_WIDTH - PLAYER_WIDTH) / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = WINDOW_HEIGHT / 2.0 + WINDOW_HEIGHT / 4.0 - PLAYER_HEIGHT;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2400.0;
    /// Fall speed cap (pixels/s)
    pub const TERMINAL_VELOCITY: f32 = 1100.0;
    /// Instantaneous upward velocity assigned on landing (pixels/s)
    pub const BOUNCE_VELOCITY: f32 = -900.0;
    /// Held-key horizontal speed (pixels/s)
    pub const MOVE_SPEED: f32 = 360.0;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Vertical gap between consecutive platforms (pixels).
    /// The max gap must stay below the bounce apex (BOUNCE_VELOCITY² / 2·GRAVITY ≈ 169).
    pub const PLATFORM_GAP_MIN: f32 = 60.0;
    pub const PLATFORM_GAP_MAX: f32 = 140.0;
    /// Lookahead above the viewport top that must stay populated with platforms
    pub const SPAWN_MARGIN: f32 = 120.0;
    /// Horizontal patrol speed of moving platforms (pixels/s)
    pub const MOVING_PLATFORM_SPEED: f32 = 120.0;
    /// Kind weights for generated platforms
    pub const BREAKABLE_CHANCE: f64 = 0.12;
    pub const MOVING_CHANCE: f64 = 0.10;
    /// Breakables are suppressed for this many initial spawns
    pub const FAIR_START_PLATFORMS: u32 = 8;

    /// The camera keeps the player below the upper third of the viewport
    pub const CAMERA_BAND: f32 = WINDOW_HEIGHT / 3.0;
    /// Pixels of upward camera travel per score point
    pub const SCORE_UNIT: f32 = 50.0;
}
