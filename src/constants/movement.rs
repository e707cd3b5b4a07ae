//! Movement and control-rotation constants.

/// Default analog turn rate (degrees/s at full stick deflection)
pub const BASE_TURN_RATE: f32 = 45.0;
/// Default analog look-up rate (degrees/s at full stick deflection)
pub const BASE_LOOK_UP_RATE: f32 = 45.0;
/// Initial vertical speed of a jump (units/s)
pub const JUMP_VELOCITY: f32 = 600.0;
/// Fraction of movement input honored while airborne
pub const AIR_CONTROL: f32 = 0.2;
/// How fast the actor turns to face its movement direction (degrees/s)
pub const ROTATION_RATE: f32 = 540.0;
/// Ground speed at full input (units/s)
pub const MAX_WALK_SPEED: f32 = 600.0;
/// Downward acceleration while airborne (units/s^2)
pub const GRAVITY: f32 = 980.0;
/// Control-rotation pitch limits (degrees)
pub const PITCH_MIN: f32 = -80.0;
pub const PITCH_MAX: f32 = 80.0;
/// Half height of the collision capsule; the actor origin sits this far
/// above the ground when standing
pub const CAPSULE_HALF_HEIGHT: f32 = 96.0;
