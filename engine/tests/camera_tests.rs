//! Camera Tests - Follow Offset and Session Ordering
//!
//! Tests for the follow camera on its own and as the last stage of an arena
//! session tick.

use glam::Vec3;
use capsule_arena_engine::camera::FollowCamera;
use capsule_arena_engine::config::{ArenaConfig, CameraConfig, MotionMode};
use capsule_arena_engine::player::CharacterState;
use capsule_arena_engine::session::ArenaSession;

const DT: f32 = 1.0 / 60.0;

fn config(mode: MotionMode) -> ArenaConfig {
    let mut config = ArenaConfig::default();
    config.motion.mode = mode;
    config
}

/// Drag in a slow circle, ticking in between, and check the camera each tick.
fn assert_camera_trails(mut session: ArenaSession) {
    let height = session.config().camera.height;
    let back = session.config().camera.back_offset;

    session.on_pointer_down(500.0, 500.0);
    for i in 0..240 {
        let angle = i as f32 * 0.05;
        session.on_pointer_move(500.0 + angle.cos() * 70.0, 500.0 + angle.sin() * 70.0);
        let frame = session.tick(DT);

        assert_eq!(frame.camera_position.y, height);
        assert_eq!(frame.camera_position.x, frame.position.x);
        assert_eq!(frame.camera_position.z, frame.position.z + back);
        assert_eq!(frame.camera_look_at, frame.position);
    }
    session.on_pointer_up();
    let frame = session.tick(DT);
    assert_eq!(frame.camera_position.z, frame.position.z + back);
}

// ============================================================================
// FollowCamera
// ============================================================================

#[test]
fn test_camera_default_offsets() {
    let camera = FollowCamera::default();
    assert_eq!(camera.height(), 20.0);
    assert_eq!(camera.back_offset(), 15.0);
}

#[test]
fn test_camera_custom_offsets() {
    let mut camera = FollowCamera::new(&CameraConfig {
        height: 8.0,
        back_offset: -4.0,
        ..CameraConfig::default()
    });
    camera.follow(&CharacterState::new(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(camera.get_position(), Vec3::new(1.0, 8.0, -1.0));
}

#[test]
fn test_camera_snaps_on_teleport() {
    let mut camera = FollowCamera::default();
    camera.follow(&CharacterState::new(Vec3::ZERO));
    camera.follow(&CharacterState::new(Vec3::new(1000.0, 0.0, 1000.0)));
    assert_eq!(camera.get_position(), Vec3::new(1000.0, 20.0, 1015.0));
}

#[test]
fn test_camera_forward_vector_normalized() {
    let camera = FollowCamera::default();
    let length = camera.get_forward().length();
    assert!((length - 1.0).abs() < 0.001);
}

// ============================================================================
// Camera inside a session
// ============================================================================

#[test]
fn test_camera_trails_kinematic_character() {
    assert_camera_trails(ArenaSession::new(config(MotionMode::Kinematic)));
}

#[test]
fn test_camera_trails_physics_character() {
    assert_camera_trails(ArenaSession::new(config(MotionMode::PhysicsVelocity)));
}

#[test]
fn test_camera_trails_heading_character() {
    assert_camera_trails(ArenaSession::new(config(MotionMode::VelocityWithHeading)));
}

#[test]
fn test_camera_uses_position_after_physics_step() {
    let mut session = ArenaSession::new(config(MotionMode::PhysicsVelocity));
    session.on_pointer_down(0.0, 0.0);
    session.on_pointer_move(50.0, 0.0);
    let frame = session.tick(0.1);
    // 4.5 m/s for 0.1 s, already reflected in this tick's camera
    assert!((frame.position.x - 0.45).abs() < 1e-4);
    assert_eq!(session.camera_position().x, frame.position.x);
}
