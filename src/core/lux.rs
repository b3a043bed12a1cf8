//! Type definition of Float, otherwise constants and functions which
//! can be used almost everywhere else in the code.

// std
use std::f64::consts::PI;

/// Host applications hand out camera attributes as doubles, so we
/// keep the full precision until the values get formatted.
pub type Float = f64;

/// Focal lengths are given in millimetres, LuxCore expects metres.
pub const DOF_CONST: Float = 1000.0;

/// LuxCore scenes are Z-up.
pub const RENDERER_UP_AXIS: crate::core::upaxis::UpAxis = crate::core::upaxis::UpAxis::Z;

/// Convert from angles expressed in radians to degrees.
pub fn degrees(rad: Float) -> Float {
    (180.0 / PI) * rad
}

/// Format a value the way scene files expect it (six decimals).
pub fn fmt_float(value: Float) -> String {
    format!("{:.6}", value)
}

/// Translate a boolean into a scene file boolean.
pub fn bool_string(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
