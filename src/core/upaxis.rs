//! Hosts differ in which axis points up. Maya and most DCC packages
//! default to Y-up, LuxCore scenes are Z-up. Every position or
//! direction that ends up in the scene file goes through
//! [`point_check_up_axis`] first.

// others
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
// lux
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::transform::{Matrix4x4, Transform};

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    #[default]
    Y,
    Z,
}

impl UpAxis {
    /// Basis remapping which takes coordinates from *self* to *to*.
    /// Going from Y-up to Z-up is a rotation of 90 degrees around the
    /// X axis, written out exactly: (x, y, z) -> (x, -z, y).
    pub fn basis_change(self, to: UpAxis) -> Transform {
        let y_to_z = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        match (self, to) {
            (UpAxis::Y, UpAxis::Z) => Transform {
                m: y_to_z,
                m_inv: Matrix4x4::transpose(&y_to_z),
            },
            (UpAxis::Z, UpAxis::Y) => Transform {
                m: Matrix4x4::transpose(&y_to_z),
                m_inv: y_to_z,
            },
            _ => Transform::default(),
        }
    }
}

/// Check if the given point needs to be converted between up axis
/// conventions and convert it if necessary. The point is placed as
/// translation of a matrix, the matrix is remapped, and the resulting
/// translation is returned.
pub fn point_check_up_axis(point: &Point3f, host: UpAxis, renderer: UpAxis) -> Point3f {
    if host == renderer {
        return *point;
    }
    let point_tm: Transform = Transform::translate(&Vector3f::from(*point));
    let point_tm: Transform = host.basis_change(renderer) * point_tm;
    Point3f::from(point_tm.get_translation())
}

/// Same as [`point_check_up_axis`] for directions.
pub fn vector_check_up_axis(v: &Vector3f, host: UpAxis, renderer: UpAxis) -> Vector3f {
    Vector3f::from(point_check_up_axis(&Point3f::from(*v), host, renderer))
}
