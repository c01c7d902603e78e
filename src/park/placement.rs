//! Build placement validation
//!
//! Pure queries: a footprint may be placed when it sits inside the park
//! bounds and its bounding box overlaps no existing ride or facility.

use crate::core::types::Vec3;
use crate::park::facility::Facility;
use crate::ride::Ride;

/// Axis-aligned overlap test between two centered footprints
fn overlaps(a_pos: Vec3, a_size: (f32, f32), b_pos: Vec3, b_size: (f32, f32)) -> bool {
    let dx = (a_pos.x - b_pos.x).abs();
    let dz = (a_pos.z - b_pos.z).abs();
    dx < (a_size.0 + b_size.0) / 2.0 && dz < (a_size.1 + b_size.1) / 2.0
}

/// Whether a footprint centered at `position` fits the park
pub fn can_build_at(
    position: Vec3,
    footprint: (f32, f32),
    half_width: f32,
    half_depth: f32,
    rides: &[Ride],
    facilities: &[Facility],
) -> bool {
    let (w, d) = footprint;

    // Bounds check: the whole footprint must sit inside the park
    if position.x - w / 2.0 < -half_width
        || position.x + w / 2.0 > half_width
        || position.z - d / 2.0 < -half_depth
        || position.z + d / 2.0 > half_depth
    {
        return false;
    }

    for ride in rides {
        if overlaps(position, footprint, ride.position, ride.kind.footprint()) {
            return false;
        }
    }

    for facility in facilities {
        if overlaps(position, footprint, facility.position, facility.kind.footprint()) {
            return false;
        }
    }

    true
}
