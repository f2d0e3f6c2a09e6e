//! Line of sight tests between the camera and axis aligned cubes
use std::cmp::Ordering;

use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::cube::{Cube, CubeId};
use crate::float::*;

/// For each axis, the two axes spanning its face planes
const OTHER_AXES: [[usize; 2]; 3] = [[1, 2], [2, 0], [0, 1]];

/// Check whether the ray from `orig` along `dir` enters the axis aligned box
/// centered at `center`. Only the face facing the camera is tested on each axis
/// and the first axis (in x, y, z order) producing a hit wins.
pub fn ray_hits_box(
    orig: Point3<Float>,
    dir: Vector3<Float>,
    center: Point3<Float>,
    half_extent: Float,
) -> bool {
    for axis in 0..3 {
        let d = dir[axis];
        // Ray is parallel to both faces on this axis
        if d == 0.0 {
            continue;
        }
        let face_offset = if d > 0.0 { -half_extent } else { half_extent };
        let plane = center[axis] + face_offset;
        let t = (plane - orig[axis]) / d;
        // Face is behind the camera
        if t < 0.0 {
            continue;
        }
        let inside = OTHER_AXES[axis].iter().all(|&a| {
            let p = orig[a] + t * dir[a];
            p > center[a] - half_extent && p < center[a] + half_extent
        });
        if inside {
            return true;
        }
    }
    false
}

/// Find the cube closest to the camera that the camera is looking at
pub fn nearest_targeted(
    cubes: &[Cube],
    orig: Point3<Float>,
    dir: Vector3<Float>,
    half_extent: Float,
) -> Option<CubeId> {
    let mut order: Vec<CubeId> = (0..cubes.len()).collect();
    order.sort_by(|&a, &b| {
        let da = orig.distance2(cubes[a].position);
        let db = orig.distance2(cubes[b].position);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });
    order
        .into_iter()
        .find(|&i| cubes[i].is_targeted(orig, dir, half_extent))
}
