//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//!
//! ## Transformations
//!
//! In general a transformation is a mapping from points to points and
//! from vectors to vectors. When a new **Transform** is created, it
//! defaults to the *identity transformation* - the transformation
//! that maps each point and each vector to itself.
//!
//! ### Translations
//!
//! One of the simplest transformations is the translation
//! transformation. Translations only affect points, leaving vectors
//! unchanged. The exporter uses them to carry a point through a
//! change of basis: the point becomes the translation part of a
//! matrix, the matrix gets remapped, and the translation is read
//! back.
//!
//! ### Basis Changes
//!
//! Switching between Y-up and Z-up scenes is a rotation of 90
//! degrees around the X axis. Its matrix only holds zeros and (minus)
//! ones, so its inverse is the transpose.

// std
use std::ops::Mul;
// lux
use crate::core::geometry::Vector3f;
use crate::core::lux::Float;

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if self.m[i][j] != rhs.m[i][j] {
                    return false;
                }
            }
        }
        true
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, delta.x, 0.0, 1.0, 0.0, delta.y, 0.0, 0.0, 1.0, delta.z, 0.0, 0.0,
                0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -delta.x, 0.0, 1.0, 0.0, -delta.y, 0.0, 0.0, 1.0, -delta.z, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
    /// The translation part of the matrix (fourth column).
    pub fn get_translation(&self) -> Vector3f {
        Vector3f {
            x: self.m.m[0][3],
            y: self.m.m[1][3],
            z: self.m.m[2][3],
        }
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn translation_round_trip() {
        let delta = Vector3f {
            x: 1.0,
            y: -2.0,
            z: 3.5,
        };
        let t = Transform::translate(&delta);
        assert_eq!(t.get_translation(), delta);
        assert_eq!(mtx_mul(&t.m, &t.m_inv), Matrix4x4::default());
        let back = Transform::translate(&Vector3f {
            x: -1.0,
            y: 2.0,
            z: -3.5,
        });
        assert_eq!((t * back).m, Matrix4x4::default());
    }

    #[test]
    fn composed_transforms() {
        let a = Transform::translate(&Vector3f {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        });
        // quarter turn around z
        let m = Matrix4x4::new(
            0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let b = Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        };
        // translate first, then turn
        let ba = b * a;
        assert_eq!(
            ba.get_translation(),
            Vector3f {
                x: 0.0,
                y: 1.0,
                z: 0.0
            }
        );
        assert_eq!(mtx_mul(&ba.m, &ba.m_inv), Matrix4x4::default());
        // the other way around the translation is not turned
        assert_eq!(
            (a * b).get_translation(),
            Vector3f {
                x: 1.0,
                y: 0.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn transpose_twice() {
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        let t = Matrix4x4::transpose(&m);
        assert_eq!(t.m[0][3], 13.0);
        assert_eq!(t.m[3][0], 4.0);
        assert_eq!(Matrix4x4::transpose(&t), m);
    }
}
