//! Projection of trigger primitives into 2-D comparison coordinates.
//!
//! A primitive becomes the hit `[(time_start - t_min) / time_scale, channel]`
//! where `t_min` is the earliest start time *within the same activity*. The
//! rescaling is deliberately cluster-local: the radius `eps` was tuned
//! against cluster-relative times, so the same absolute tick maps to
//! different coordinates in different activities.

use crate::core::records::Activity;
use crate::validator::{Result, ValidationError};

/// A projected hit: scaled cluster-relative time and unscaled channel.
pub type Hit = [f64; 2];

/// Project an activity's primitives into hits.
///
/// Hits come out in the activity's original order, so every downstream
/// index-aligned array (neighbor counts, core flags) addresses the same
/// primitive the activity does. Tick times are divided in floating point;
/// the fractional part matters for distance comparisons against `eps`.
///
/// An empty activity projects to an empty hit list. The only failure mode
/// is a zero `time_scale`.
pub fn project(activity: &Activity, time_scale: u32) -> Result<Vec<Hit>> {
    if time_scale == 0 {
        return Err(ValidationError::InvalidParameter {
            name: "time_scale",
            message: "must be positive",
        });
    }

    let primitives = activity.primitives();
    if primitives.is_empty() {
        return Ok(Vec::new());
    }

    let t_min = primitives
        .iter()
        .map(|tp| tp.time_start)
        .min()
        .unwrap_or_default();
    let scale = f64::from(time_scale);

    Ok(primitives
        .iter()
        .map(|tp| [(tp.time_start - t_min) as f64 / scale, f64::from(tp.channel)])
        .collect())
}
