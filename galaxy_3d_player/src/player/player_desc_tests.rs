use glam::Vec3;
use crate::error::Error;
use super::*;

#[test]
fn test_default_values() {
    let desc = PlayerDesc::default();

    assert_eq!(desc.max_velocity_xz, 125.0);
    assert_eq!(desc.max_velocity_y, 125.0);
    assert_eq!(desc.friction, 250.0);
    assert_eq!(desc.camera_lag, 0.0);
    assert_eq!(desc.gravity, Vec3::ZERO);
    assert!(desc.attach_camera);
    assert!(desc.validate().is_ok());
}

#[test]
fn test_negative_friction_rejected() {
    let desc = PlayerDesc { friction: -1.0, ..Default::default() };

    match desc.validate() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("friction")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_nan_max_velocity_rejected() {
    let desc = PlayerDesc { max_velocity_y: f32::NAN, ..Default::default() };

    match desc.validate() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("max_velocity_y")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_infinite_gravity_rejected() {
    let desc = PlayerDesc {
        gravity: Vec3::new(0.0, f32::NEG_INFINITY, 0.0),
        ..Default::default()
    };

    match desc.validate() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("gravity")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_inverted_volume_rejected() {
    let desc = PlayerDesc {
        volume: VolumeInfo { min: Vec3::ONE, max: Vec3::ZERO },
        ..Default::default()
    };

    assert!(matches!(desc.validate(), Err(Error::InvalidVolume(_))));
}

#[test]
fn test_zero_limits_are_valid() {
    let desc = PlayerDesc {
        friction: 0.0,
        max_velocity_xz: 0.0,
        max_velocity_y: 0.0,
        ..Default::default()
    };

    assert!(desc.validate().is_ok());
}
