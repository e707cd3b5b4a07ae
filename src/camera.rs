//! Third-person follow camera.
//!
//! A spring arm pivots at the character and rotates with the control
//! rotation; the camera hangs off the end of the arm and does not rotate
//! relative to it. Pure math over the control rotation - collision probing
//! against geometry belongs to the host engine.

use glam::Vec3;
use serde::Deserialize;

use crate::constants::CAMERA_ARM_LENGTH;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CameraBoomConfig {
    /// Distance the camera trails behind the pivot
    pub arm_length: f32,
    /// Vertical offset of the pivot above the actor origin
    pub pivot_height: f32,
}

impl Default for CameraBoomConfig {
    fn default() -> Self {
        Self {
            arm_length: CAMERA_ARM_LENGTH,
            pivot_height: 0.0,
        }
    }
}

/// Eye and look-at positions for one frame
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

pub struct CameraBoom {
    config: CameraBoomConfig,
}

impl CameraBoom {
    pub fn new(config: CameraBoomConfig) -> Self {
        Self { config }
    }

    /// Place the camera behind `actor_position` along the control rotation.
    /// Yaw and pitch are in degrees; positive pitch looks up, swinging the
    /// camera below the pivot.
    pub fn view(&self, actor_position: Vec3, yaw: f32, pitch: f32) -> CameraView {
        let target = actor_position + Vec3::new(0.0, 0.0, self.config.pivot_height);
        let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();
        let forward = Vec3::new(pitch_cos * yaw_cos, pitch_cos * yaw_sin, pitch_sin);
        CameraView {
            eye: target - forward * self.config.arm_length,
            target,
        }
    }
}
