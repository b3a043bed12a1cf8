//! The *look-at* block places the camera in the scene: the camera
//! position, a point the camera is looking at, and an "up" vector
//! that orients the camera along the viewing direction. All of them
//! are given in world space coordinates of the renderer.

// lux
use crate::core::camera::{CameraSource, WorldQuery};
use crate::core::error::{ExportError, QueryError, Result};
use crate::core::export::SceneBuffer;
use crate::core::geometry::{vec3_cross_vec3, Point3f, Vector3f};
use crate::core::lux::{fmt_float, Float, RENDERER_UP_AXIS};
use crate::core::upaxis::{point_check_up_axis, vector_check_up_axis, UpAxis};

fn required<T>(query: WorldQuery, result: std::result::Result<T, QueryError>) -> Result<T> {
    result.map_err(|source| {
        log::error!("Failed to get {}: {}", query, source);
        ExportError::WorldQuery { query, source }
    })
}

fn fmt_triple(x: Float, y: Float, z: Float) -> String {
    format!("{} {} {}", fmt_float(x), fmt_float(y), fmt_float(z))
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LookAt {
    pub eye: Point3f,
    pub target: Point3f,
    pub up: Vector3f,
}

impl LookAt {
    /// Grab the camera's position, up vector and aim point and convert
    /// them to the renderer's up axis if necessary.
    pub fn create<C>(source: &C, host_up_axis: UpAxis) -> Result<LookAt>
    where
        C: CameraSource + ?Sized,
    {
        let eye: Point3f = required(WorldQuery::EyePoint, source.eye_point())?;
        let up: Vector3f = required(WorldQuery::UpDirection, source.up_direction())?;
        let at: Point3f = required(
            WorldQuery::CenterOfInterestPoint,
            source.center_of_interest_point(),
        )?;
        let look_at = LookAt {
            eye: point_check_up_axis(&eye, host_up_axis, RENDERER_UP_AXIS),
            target: point_check_up_axis(&at, host_up_axis, RENDERER_UP_AXIS),
            up: vector_check_up_axis(&up, host_up_axis, RENDERER_UP_AXIS),
        };
        if look_at.is_degenerate() {
            log::warn!(
                "\"up\" vector ({}, {}, {}) and viewing direction of camera \"{}\" \
                 are pointing in the same direction",
                look_at.up.x,
                look_at.up.y,
                look_at.up.z,
                source.name()
            );
        }
        Ok(look_at)
    }
    /// Coincident eye and target, or an up vector parallel to the
    /// viewing direction.
    pub fn is_degenerate(&self) -> bool {
        let dir: Vector3f = self.target - self.eye;
        if dir.length_squared() == 0.0 || self.up.length_squared() == 0.0 {
            return true;
        }
        vec3_cross_vec3(&self.up.normalize(), &dir.normalize()).length() == 0.0
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        let (eye, at, up) = (&self.eye, &self.target, &self.up);
        out.add_to_output(format!(
            "\tscene.camera.lookat.orig = {}",
            fmt_triple(eye.x, eye.y, eye.z)
        ));
        out.add_to_output(format!(
            "\tscene.camera.lookat.target = {}",
            fmt_triple(at.x, at.y, at.z)
        ));
        out.add_to_output(format!("\tscene.camera.up = {}", fmt_triple(up.x, up.y, up.z)));
        out.add_to_output("");
    }
}
