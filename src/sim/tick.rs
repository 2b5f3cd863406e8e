//! Fixed timestep simulation tick
//!
//! Advances the game deterministically. Phase order inside a tick is fixed:
//! restart handling, player physics (gravity before collision), level
//! maintenance, then camera and score (alive only).

use super::state::{GameEvent, GameState, PlatformKind};
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
///
/// `left`/`right` are level-triggered (held keys), `restart` is
/// edge-triggered and only honored while the player is dead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    if input.restart && state.player.dead {
        state.reset();
    }

    if !state.player.dead {
        step_player(state, input, dt);
    }

    state.level.update(&state.camera, dt);

    if !state.player.dead {
        state.camera.update(&state.player.rect());
        state.score = score_for_offset(state.camera.offset.y);
    }
}

/// Score strictly tracks maximum height reached: the camera never scrolls
/// back down, so this is non-decreasing across a run.
fn score_for_offset(offset_y: f32) -> u64 {
    (-offset_y / SCORE_UNIT).max(0.0) as u64
}

fn step_player(state: &mut GameState, input: &TickInput, dt: f32) {
    // 1. Horizontal velocity from the held-key snapshot
    state.player.vel.x = match (input.left, input.right) {
        (true, false) => -MOVE_SPEED,
        (false, true) => MOVE_SPEED,
        _ => 0.0,
    };

    // 2. Gravity, capped at terminal velocity
    state.player.vel.y = (state.player.vel.y + GRAVITY * dt).min(TERMINAL_VELOCITY);

    // 3. Integrate, clamping x to the playable width
    let prev_bottom = state.player.rect().bottom();
    state.player.pos += state.player.vel * dt;
    state.player.pos.x = state.player.pos.x.clamp(0.0, WINDOW_WIDTH - state.player.size.x);

    // 4. Landing check, only while falling. The response is a fixed impulse,
    //    independent of impact speed.
    if state.player.vel.y > 0.0 {
        let rect = state.player.rect();
        if let Some(idx) = state.level.platform_under(&rect, prev_bottom) {
            let platform = &mut state.level.platforms[idx];
            state.player.vel.y = BOUNCE_VELOCITY;
            state.player.pos.y = platform.rect.top() - state.player.size.y;
            if platform.kind == PlatformKind::Breakable {
                platform.consumed = true;
                state.events.push(GameEvent::PlatformBroken);
            }
            state.events.push(GameEvent::Bounced);
        }
    }

    // 5. Alive -> Dead once the player is fully below the viewport
    if state.player.pos.y - state.camera.offset.y > WINDOW_HEIGHT {
        state.player.dead = true;
        state.events.push(GameEvent::Died);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Platform;
    use proptest::prelude::*;

    /// A state with the generated level replaced by a single platform
    fn state_with_platform(kind: PlatformKind) -> GameState {
        let mut state = GameState::new(1);
        state.level.platforms.clear();
        state.level.platforms.push(Platform::new(
            99,
            Rect::new(250.0, 500.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind,
        ));
        state
    }

    /// Place the player just above the test platform, falling at `speed`
    fn drop_player_onto_platform(state: &mut GameState, speed: f32) {
        state.player.pos.x = 260.0;
        state.player.pos.y = 500.0 - state.player.size.y - 1.0;
        state.player.vel.y = speed;
        state.player.dead = false;
    }

    #[test]
    fn test_bounce_is_impact_speed_independent() {
        for speed in [50.0, 300.0, TERMINAL_VELOCITY] {
            let mut state = state_with_platform(PlatformKind::Static);
            drop_player_onto_platform(&mut state, speed);
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(state.player.vel.y, BOUNCE_VELOCITY, "impact speed {speed}");
            assert!(state.events.contains(&GameEvent::Bounced));
        }
    }

    #[test]
    fn test_no_landing_while_moving_up() {
        let mut state = state_with_platform(PlatformKind::Static);
        // Rising through the platform from below
        state.player.pos.x = 260.0;
        state.player.pos.y = 520.0;
        state.player.vel.y = BOUNCE_VELOCITY;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.events.contains(&GameEvent::Bounced));
    }

    #[test]
    fn test_breakable_supports_exactly_once() {
        let mut state = state_with_platform(PlatformKind::Breakable);

        drop_player_onto_platform(&mut state, 300.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.vel.y, BOUNCE_VELOCITY);
        assert!(state.events.contains(&GameEvent::PlatformBroken));

        // Second attempt at the same x must miss: the platform broke away
        drop_player_onto_platform(&mut state, 300.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.vel.y > 0.0, "second landing must not bounce");
        assert!(
            state.level.platforms.iter().all(|p| p.id != 99),
            "consumed platform must be removed by the level update"
        );
    }

    #[test]
    fn test_free_fall_death_matches_kinematics() {
        let mut state = GameState::new(3);
        state.level.platforms.clear();

        // Closed-form replay of the integrator: capped accumulation of
        // gravity until the player's top edge passes the viewport bottom.
        let mut y = PLAYER_SPAWN_Y;
        let mut vy = 0.0f32;
        let mut expected_ticks = 0u32;
        loop {
            vy = (vy + GRAVITY * SIM_DT).min(TERMINAL_VELOCITY);
            y += vy * SIM_DT;
            expected_ticks += 1;
            if y > WINDOW_HEIGHT {
                break;
            }
        }

        let input = TickInput::default();
        for _ in 0..expected_ticks - 1 {
            tick(&mut state, &input, SIM_DT);
            assert!(!state.player.dead);
        }
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.dead);
    }

    #[test]
    fn test_died_event_fires_exactly_once() {
        let mut state = GameState::new(3);
        state.level.platforms.clear();
        let input = TickInput::default();
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(state.player.dead);
        let died = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::Died)
            .count();
        assert_eq!(died, 1);
    }

    #[test]
    fn test_restart_only_while_dead() {
        let mut state = GameState::new(4);
        let before_platforms = state.level.platforms.len();
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        // Alive: restart is ignored and physics ran normally
        assert!(!state.player.dead);
        assert!(state.player.vel.y > 0.0);
        assert_eq!(state.level.platforms.len(), before_platforms);
    }

    #[test]
    fn test_reset_restores_seed_state() {
        let fresh = GameState::new(11);
        let mut state = GameState::new(11);

        // Climb for a while, then fall off
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..240 {
            tick(&mut state, &right, SIM_DT);
        }
        state.level.platforms.clear();
        let idle = TickInput::default();
        for _ in 0..600 {
            tick(&mut state, &idle, SIM_DT);
        }
        assert!(state.player.dead);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);

        assert!(!state.player.dead);
        assert_eq!(state.score, 0);
        assert_eq!(state.camera.offset.y, 0.0);
        assert_eq!(state.level.platforms.len(), fresh.level.platforms.len());
        for (pa, pb) in state.level.platforms.iter().zip(&fresh.level.platforms) {
            assert_eq!(pa.rect.pos.y, pb.rect.pos.y);
            assert_eq!(pa.kind, pb.kind);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                left: true,
                ..Default::default()
            },
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.score, b.score);
        assert_eq!(a.level.platforms.len(), b.level.platforms.len());
    }

    fn input_from_code(code: u8) -> TickInput {
        TickInput {
            left: code == 1,
            right: code == 2,
            restart: false,
        }
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases_while_alive(
            seed in 0u64..1000,
            moves in proptest::collection::vec(0u8..3, 1..400),
        ) {
            let mut state = GameState::new(seed);
            let mut last_score = 0u64;
            for code in moves {
                tick(&mut state, &input_from_code(code), SIM_DT);
                if state.player.dead {
                    break;
                }
                prop_assert!(state.score >= last_score);
                last_score = state.score;
            }
        }

        #[test]
        fn prop_player_x_stays_clamped(
            seed in 0u64..1000,
            moves in proptest::collection::vec(0u8..3, 1..400),
        ) {
            let mut state = GameState::new(seed);
            for code in moves {
                tick(&mut state, &input_from_code(code), SIM_DT);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.x <= WINDOW_WIDTH - state.player.size.x);
            }
        }
    }
}
