//! Release velocity of a cube that was carried around by turning the camera
use cgmath::prelude::*;
use cgmath::Vector3;

use crate::config::TossConfig;
use crate::consts;
use crate::float::*;

/// Rotation taking one direction to another.
/// The axis is zero when the angle is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub axis: Vector3<Float>,
    pub angle: Float,
}

impl Rotation {
    /// Angular velocity of the rotation performed over `duration` seconds
    pub fn angular_velocity(&self, duration: Float) -> Option<Vector3<Float>> {
        if duration <= 0.0 {
            return None;
        }
        if self.angle == 0.0 {
            Some(Vector3::zero())
        } else {
            Some(self.axis * (self.angle / duration))
        }
    }
}

fn normalized(v: Vector3<Float>) -> Option<Vector3<Float>> {
    let len2 = v.magnitude2();
    if len2 > 0.0 && len2.is_finite() {
        Some(v / len2.sqrt())
    } else {
        None
    }
}

/// Some axis orthogonal to `v` for a half turn, where the cross product vanishes
fn half_turn_axis(v: Vector3<Float>, right: Vector3<Float>) -> Vector3<Float> {
    let candidates = [right, Vector3::unit_y(), Vector3::unit_x()];
    for &c in &candidates {
        let axis = v.cross(c);
        if axis.magnitude2() >= consts::EPSILON {
            return axis.normalize();
        }
    }
    // v is a unit vector so it can't be parallel to both world axes
    v.cross(Vector3::unit_z()).normalize()
}

/// Rotation between two camera directions. `right` is the camera's right
/// vector, used to pick an axis for opposite directions.
/// Returns None if either direction has no length.
pub fn rotation_between(
    prev: Vector3<Float>,
    new: Vector3<Float>,
    right: Vector3<Float>,
) -> Option<Rotation> {
    let v = normalized(prev)?;
    let v2 = normalized(new)?;

    let c = v.cross(v2);
    let sin = c.magnitude();
    let cos = v.dot(v2).max(-1.0).min(1.0);

    if sin > consts::EPSILON {
        Some(Rotation {
            axis: c / sin,
            angle: sin.atan2(cos),
        })
    } else if cos > 0.0 {
        Some(Rotation {
            axis: Vector3::zero(),
            angle: 0.0,
        })
    } else {
        Some(Rotation {
            axis: half_turn_axis(v, right),
            angle: consts::PI,
        })
    }
}

/// Linear velocity given to a cube at `r` from the camera when the camera
/// turned from `prev` to `new` in `duration` seconds.
/// None means no impulse should be applied.
pub fn release_velocity(
    prev: Vector3<Float>,
    new: Vector3<Float>,
    right: Vector3<Float>,
    duration: Float,
    r: Vector3<Float>,
    config: &TossConfig,
) -> Option<Vector3<Float>> {
    let rotation = match rotation_between(prev, new, right) {
        Some(rotation) => rotation,
        None => {
            log::warn!("Camera direction with zero length, skipping toss");
            return None;
        }
    };
    let omega = rotation.angular_velocity(duration)?;
    Some((omega * config.scale).cross(r))
}
