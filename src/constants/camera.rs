//! Follow-camera constants.

/// Distance the camera trails behind the character
pub const CAMERA_ARM_LENGTH: f32 = 300.0;
