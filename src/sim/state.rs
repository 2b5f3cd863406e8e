//! Game state and core simulation types
//!
//! Everything the gameplay loop mutates lives here. The sim stays pure and
//! deterministic: seeded RNG only, fixed timestep only, no platform calls.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::crossed_platform_top;
use super::rect::Rect;
use crate::consts::*;

/// Vertical scroll camera
///
/// `offset.y` is the additive translation applied to every world position
/// before drawing; it only ever decreases (the view scrolls up, never back
/// down), which is what makes the score monotone.
#[derive(Debug, Clone, Default)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the offset from the player's rect. Scrolls only when the
    /// player rises above the upper third of the viewport.
    pub fn update(&mut self, target: &Rect) {
        let screen_y = target.top() - self.offset.y;
        if screen_y < CAMERA_BAND {
            self.offset.y = target.top() - CAMERA_BAND;
        }
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}

/// Platform behavior variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Static,
    /// Patrols horizontally, reversing at the playable bounds
    Moving,
    /// Supports exactly one landing, then breaks away
    Breakable,
}

/// A single collidable platform
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
    pub kind: PlatformKind,
    /// Breakable already used up; removed on the next level update
    pub consumed: bool,
    /// Patrol direction for moving platforms (+1 right, -1 left)
    pub dir: f32,
}

impl Platform {
    pub fn new(id: u32, rect: Rect, kind: PlatformKind) -> Self {
        Self {
            id,
            rect,
            kind,
            consumed: false,
            dir: 1.0,
        }
    }

    /// Whether a landing on this platform is currently possible
    #[inline]
    pub fn supports(&self) -> bool {
        !self.consumed
    }

    /// Advance horizontal patrol motion (moving platforms only)
    pub fn patrol(&mut self, dt: f32) {
        if self.kind != PlatformKind::Moving {
            return;
        }
        self.rect.pos.x += self.dir * MOVING_PLATFORM_SPEED * dt;
        let max_x = WINDOW_WIDTH - self.rect.size.x;
        if self.rect.pos.x <= 0.0 {
            self.rect.pos.x = 0.0;
            self.dir = 1.0;
        } else if self.rect.pos.x >= max_x {
            self.rect.pos.x = max_x;
            self.dir = -1.0;
        }
    }
}

/// The active platform set plus the generator that keeps it populated
///
/// Platforms are stored in creation order; each new platform spawns above
/// (smaller y than) the previous one. Recycling is drop-on-exit: a platform
/// is removed the first tick it sits fully below the viewport.
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Platform>,
    /// World y of the most recently generated platform (smallest y so far)
    pub highest_y: f32,
    seed: u64,
    rng: Pcg32,
    /// Total platforms generated since the last reset (early-fairness gate)
    spawned: u32,
    next_id: u32,
}

impl Level {
    pub fn new(seed: u64) -> Self {
        let mut level = Self {
            platforms: Vec::new(),
            highest_y: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawned: 0,
            next_id: 1,
        };
        level.seed_initial();
        level
    }

    /// Clear everything and reseed the deterministic starting cluster.
    /// Rebuilds the RNG from the stored seed so the post-reset platform set
    /// is identical regardless of pre-reset state.
    pub fn reset(&mut self) {
        self.platforms.clear();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.spawned = 0;
        self.next_id = 1;
        self.seed_initial();
    }

    fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// One platform directly beneath the spawn point, then generated fill
    /// up to the spawn margin above the initial viewport.
    fn seed_initial(&mut self) {
        let base_y = PLAYER_SPAWN_Y + PLAYER_HEIGHT + 50.0;
        let base = Rect::new(
            (WINDOW_WIDTH - PLATFORM_WIDTH) / 2.0,
            base_y,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
        );
        let id = self.next_platform_id();
        self.platforms.push(Platform::new(id, base, PlatformKind::Static));
        self.highest_y = base_y;

        while self.highest_y > -SPAWN_MARGIN {
            self.spawn_one();
        }
    }

    /// Generate one platform above the current topmost one
    fn spawn_one(&mut self) {
        let gap = self.rng.random_range(PLATFORM_GAP_MIN..=PLATFORM_GAP_MAX);
        let x = self.rng.random_range(0.0..=(WINDOW_WIDTH - PLATFORM_WIDTH));
        let y = self.highest_y - gap;

        let kind = if self.spawned >= FAIR_START_PLATFORMS
            && self.rng.random_bool(BREAKABLE_CHANCE)
        {
            PlatformKind::Breakable
        } else if self.rng.random_bool(MOVING_CHANCE) {
            PlatformKind::Moving
        } else {
            PlatformKind::Static
        };

        let id = self.next_platform_id();
        self.platforms.push(Platform::new(
            id,
            Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind,
        ));
        self.highest_y = y;
        self.spawned += 1;
    }

    /// Per-tick maintenance: patrol motion, spawn-ahead, drop-on-exit
    pub fn update(&mut self, camera: &Camera, dt: f32) {
        for platform in &mut self.platforms {
            platform.patrol(dt);
        }

        // Keep the lookahead band above the viewport populated
        while self.highest_y - camera.offset.y > -SPAWN_MARGIN {
            self.spawn_one();
        }

        // Remove consumed breakables and platforms fully below the viewport.
        // Boundary is exact: screen-space top edge == WINDOW_HEIGHT is the
        // first fully invisible position.
        let cam_y = camera.offset.y;
        self.platforms
            .retain(|p| !p.consumed && p.rect.top() - cam_y < WINDOW_HEIGHT);
    }

    /// Find the first platform whose top edge the player's bottom edge is
    /// crossing downward through, restricted to platforms that still support.
    pub fn platform_under(&self, player: &Rect, prev_bottom: f32) -> Option<usize> {
        self.platforms
            .iter()
            .position(|p| p.supports() && crossed_platform_top(player, prev_bottom, &p.rect))
    }
}

/// The bouncing player
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Monotonic until an explicit reset
    pub dead: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dead: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.vel = Vec2::ZERO;
        self.dead = false;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot notifications drained by the outer loop (audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player landed and bounced
    Bounced,
    /// A breakable platform was used up
    PlatformBroken,
    /// Alive -> Dead transition (fires exactly once per death)
    Died,
}

/// Complete game state, advanced by [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed (level generation reproducibility)
    pub seed: u64,
    pub camera: Camera,
    pub level: Level,
    pub player: Player,
    /// Derived from maximum camera displacement; never decreases while alive
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            camera: Camera::new(),
            level: Level::new(seed),
            player: Player::new(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Full restart: camera, level, player, and score return to their seed
    /// configuration. The tick counter keeps running.
    pub fn reset(&mut self) {
        self.camera.reset();
        self.level.reset();
        self.player.reset();
        self.score = 0;
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_scrolls_up_only() {
        let mut camera = Camera::new();
        // Player low on screen: no scroll
        camera.update(&Rect::new(0.0, 600.0, 32.0, 32.0));
        assert_eq!(camera.offset.y, 0.0);

        // Player above the band line: camera pulls up
        camera.update(&Rect::new(0.0, 100.0, 32.0, 32.0));
        let scrolled = camera.offset.y;
        assert!(scrolled < 0.0);
        assert_eq!(scrolled, 100.0 - CAMERA_BAND);

        // Player falls back down: camera holds
        camera.update(&Rect::new(0.0, 700.0, 32.0, 32.0));
        assert_eq!(camera.offset.y, scrolled);
    }

    #[test]
    fn test_level_seed_is_deterministic() {
        let a = Level::new(42);
        let b = Level::new(42);
        assert_eq!(a.platforms.len(), b.platforms.len());
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.rect, pb.rect);
            assert_eq!(pa.kind, pb.kind);
        }
    }

    #[test]
    fn test_level_reset_restores_seed_configuration() {
        let fresh = Level::new(7);
        let mut used = Level::new(7);

        // Scramble: advance generation and motion, consume a platform
        let mut camera = Camera::new();
        camera.offset.y = -2000.0;
        for _ in 0..300 {
            used.update(&camera, SIM_DT);
        }
        if let Some(p) = used.platforms.first_mut() {
            p.consumed = true;
        }

        used.reset();
        assert_eq!(used.platforms.len(), fresh.platforms.len());
        for (pa, pb) in used.platforms.iter().zip(&fresh.platforms) {
            assert_eq!(pa.rect, pb.rect);
            assert_eq!(pa.kind, pb.kind);
            assert!(!pa.consumed);
        }
    }

    #[test]
    fn test_generated_gaps_within_bounds() {
        let level = Level::new(123);
        // Platforms are in creation order; each spawns above the previous
        for pair in level.platforms.windows(2) {
            let gap = pair[0].rect.top() - pair[1].rect.top();
            assert!(gap >= PLATFORM_GAP_MIN - 1e-3 && gap <= PLATFORM_GAP_MAX + 1e-3);
        }
    }

    #[test]
    fn test_no_breakables_in_early_platforms() {
        for seed in 0..32u64 {
            let level = Level::new(seed);
            for platform in level.platforms.iter().take(1 + FAIR_START_PLATFORMS as usize) {
                assert_ne!(platform.kind, PlatformKind::Breakable);
            }
        }
    }

    #[test]
    fn test_moving_platform_patrols_within_bounds() {
        let rect = Rect::new(10.0, 0.0, PLATFORM_WIDTH, PLATFORM_HEIGHT);
        let mut platform = Platform::new(1, rect, PlatformKind::Moving);
        for _ in 0..3000 {
            platform.patrol(SIM_DT);
            assert!(platform.rect.left() >= 0.0);
            assert!(platform.rect.right() <= WINDOW_WIDTH);
        }
        // A full patrol must have reversed at least once
        assert_eq!(platform.rect.size.x, PLATFORM_WIDTH);
    }

    #[test]
    fn test_platform_gc_exact_boundary() {
        let mut level = Level::new(1);
        level.platforms.clear();
        let cam = Camera::new();

        // Top edge exactly at the viewport bottom: first fully off-screen row
        level.platforms.push(Platform::new(
            90,
            Rect::new(0.0, WINDOW_HEIGHT, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            PlatformKind::Static,
        ));
        // One pixel-fraction above: still visible, must be kept
        level.platforms.push(Platform::new(
            91,
            Rect::new(0.0, WINDOW_HEIGHT - 0.5, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            PlatformKind::Static,
        ));
        level.update(&cam, SIM_DT);

        let ids: Vec<u32> = level.platforms.iter().map(|p| p.id).collect();
        assert!(!ids.contains(&90));
        assert!(ids.contains(&91));
    }

    #[test]
    fn test_spawn_ahead_follows_camera() {
        let mut level = Level::new(9);
        let mut camera = Camera::new();
        camera.offset.y = -1500.0;
        level.update(&camera, SIM_DT);
        // Topmost platform must sit at least the spawn margin above the view
        assert!(level.highest_y - camera.offset.y <= -SPAWN_MARGIN);
    }

    #[test]
    fn test_platform_under_skips_consumed() {
        let mut level = Level::new(5);
        level.platforms.clear();
        level.platforms.push(Platform::new(
            1,
            Rect::new(100.0, 500.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            PlatformKind::Breakable,
        ));

        let player = Rect::new(120.0, 473.0, 32.0, 32.0); // bottom = 505
        assert_eq!(level.platform_under(&player, 495.0), Some(0));

        level.platforms[0].consumed = true;
        assert_eq!(level.platform_under(&player, 495.0), None);
    }
}
