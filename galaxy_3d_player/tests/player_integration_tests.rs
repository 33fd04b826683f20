//! Integration tests for the player/camera pair
//!
//! Drives a player the way a host loop would: fixed ticks, pre-decoded
//! input, occasional teleports. No window or GPU required.
//!
//! Run with: cargo test --test player_integration_tests

use galaxy_3d_player::galaxy3d::{Direction, Player, PlayerDesc, VolumeInfo};
use galaxy_3d_player::glam::Vec3;

const TICK: f32 = 1.0 / 60.0;

fn spawn_walker() -> Player {
    let desc = PlayerDesc {
        position: Vec3::new(0.0, 10.0, 0.0),
        camera_offset: Vec3::new(0.0, 1.7, 0.0),
        gravity: Vec3::new(0.0, -400.0, 0.0),
        friction: 250.0,
        volume: VolumeInfo::new(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 1.8, 0.5)).unwrap(),
        ..Default::default()
    };
    Player::from_desc(&desc).unwrap()
}

fn camera_offset_error(player: &Player) -> f32 {
    let camera = player.camera().unwrap().position();
    (camera - (player.position() + player.camera_offset())).length()
}

// ============================================================================
// HOST LOOP
// ============================================================================

#[test]
fn test_integration_falling_reaches_terminal_velocity() {
    let mut player = spawn_walker();

    for _ in 0..120 {
        player.update(TICK);
    }

    // Gravity keeps pushing against friction; the Y clamp caps the fall
    let vy = player.velocity().y;
    assert!(vy < 0.0);
    assert!(vy.abs() <= player.max_velocity_y() + 1e-3);
    assert!(camera_offset_error(&player) < 1e-2);
}

#[test]
fn test_integration_walk_and_turn() {
    let mut player = spawn_walker();
    player.set_gravity(Vec3::ZERO);

    // Hold forward for one second
    for _ in 0..60 {
        player.move_in(Direction::FORWARD, 400.0 * TICK, true);
        player.update(TICK);
    }
    let after_walk = player.position();
    assert!(after_walk.z > 1.0);
    assert!(after_walk.x.abs() < 1e-3);

    // Quarter turn to the right, then keep walking
    player.rotate(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    for _ in 0..60 {
        player.move_in(Direction::FORWARD, 400.0 * TICK, true);
        player.update(TICK);
    }
    let after_turn = player.position();
    assert!(after_turn.x > after_walk.x + 1.0);

    // Speed never exceeds the XZ cap
    let v = player.velocity();
    assert!((v.x * v.x + v.z * v.z).sqrt() <= player.max_velocity_xz() + 1e-3);

    assert!(camera_offset_error(&player) < 1e-2);
}

#[test]
fn test_integration_stops_when_input_released() {
    let mut player = spawn_walker();
    player.set_gravity(Vec3::ZERO);

    for _ in 0..30 {
        player.move_in(Direction::FORWARD | Direction::LEFT, 400.0 * TICK, true);
        player.update(TICK);
    }
    assert!(player.velocity().length() > 0.0);

    for _ in 0..120 {
        player.update(TICK);
    }
    assert!(player.velocity().length() < 1e-4);
}

#[test]
fn test_integration_mouse_look_and_teleport() {
    let mut player = spawn_walker();
    player.set_gravity(Vec3::ZERO);

    for i in 0..1_000 {
        let dx = ((i as f32) * 0.13).sin() * 0.05;
        let dy = ((i as f32) * 0.07).cos() * 0.08;
        player.rotate(dy, dx, 0.0);
        player.update(TICK);

        if i % 250 == 0 {
            player.set_position(Vec3::new(i as f32, 10.0, 0.0));
        }
    }

    let basis = player.basis();
    assert!(basis.orthonormal_error() < 1e-5);
    assert!(player.pitch().abs() <= 89.0_f32.to_radians());
    assert!(player.yaw() >= 0.0 && player.yaw() < std::f32::consts::TAU);
    assert!(camera_offset_error(&player) < 1e-2);

    // Collision box follows the player
    let world = player.world_volume();
    assert!((world.min.y - player.position().y).abs() < 1e-4);
}

#[test]
fn test_integration_camera_dropped_with_player() {
    let players: Vec<Player> = (0..4).map(|_| spawn_walker()).collect();

    assert!(players.iter().all(|p| p.camera().is_some()));
    drop(players);
}
