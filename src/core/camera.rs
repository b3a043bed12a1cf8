//! The **CameraSource** trait is the read-only view of a host camera
//! the exporter works with, the **Camera** enum holds the LuxCore
//! camera which gets derived from it.

// others
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
// lux
use crate::cameras::environment::EnvironmentCamera;
use crate::cameras::orthographic::OrthographicCamera;
use crate::cameras::perspective::PerspectiveCamera;
use crate::cameras::realistic::RealisticCamera;
use crate::core::error::{QueryError, Result};
use crate::core::export::SceneBuffer;
use crate::core::geometry::{Point2i, Point3f, Vector3f};
use crate::core::lux::Float;
use crate::core::settings::{ExportSettings, PerspType};

/// The world space queries a camera export depends on. Their names
/// match the host API calls so a failure can be traced back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum WorldQuery {
    #[strum(serialize = "camera.eyePoint")]
    EyePoint,
    #[strum(serialize = "camera.upDirection")]
    UpDirection,
    #[strum(serialize = "camera.centerOfInterestPoint")]
    CenterOfInterestPoint,
}

/// Read-only camera attributes as provided by the host scene graph.
///
/// Angles are in radians, focal length in millimetres, film apertures
/// and film offsets as the host stores them. Only the three world
/// space queries can fail, everything else is a required attribute.
pub trait CameraSource {
    /// Name of the camera node, used for log messages.
    fn name(&self) -> &str;
    fn is_ortho(&self) -> bool;
    fn ortho_width(&self) -> Float;
    fn focal_length(&self) -> Float;
    fn f_stop(&self) -> Float;
    /// Distance to the center of interest.
    fn center_of_interest(&self) -> Float;
    fn horizontal_field_of_view(&self) -> Float;
    fn vertical_field_of_view(&self) -> Float;
    fn horizontal_film_aperture(&self) -> Float;
    fn vertical_film_aperture(&self) -> Float;
    /// Horizontal film offset as a fraction of the frame.
    fn film_translate_h(&self) -> Float;
    /// Vertical film offset as a fraction of the frame.
    fn film_translate_v(&self) -> Float;
    fn near_clipping_plane(&self) -> Float;
    fn far_clipping_plane(&self) -> Float;
    fn eye_point(&self) -> std::result::Result<Point3f, QueryError>;
    fn up_direction(&self) -> std::result::Result<Vector3f, QueryError>;
    fn center_of_interest_point(&self) -> std::result::Result<Point3f, QueryError>;
}

/// LuxCore camera types, displayed the way `scene.camera.type` wants
/// them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CameraType {
    Orthographic,
    Perspective,
    Environment,
    Realistic,
}

pub enum Camera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
    Environment(EnvironmentCamera),
    Realistic(RealisticCamera),
}

impl Camera {
    /// Orthographic host cameras stay orthographic, everything else
    /// is decided by the perspective type preference.
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scene_scale: Float,
    ) -> Result<Camera>
    where
        C: CameraSource + ?Sized,
    {
        if source.is_ortho() {
            return Ok(Camera::Orthographic(OrthographicCamera::create(
                source,
                settings,
                resolution,
                scene_scale,
            )));
        }
        let camera = match settings.camera_persptype {
            PerspType::Perspective => Camera::Perspective(PerspectiveCamera::create(
                source,
                settings,
                resolution,
                scene_scale,
            )),
            PerspType::Environment => Camera::Environment(EnvironmentCamera::create(
                source,
                settings,
                resolution,
                scene_scale,
            )),
            PerspType::Realistic => Camera::Realistic(RealisticCamera::create(
                source,
                settings,
                resolution,
                scene_scale,
            )?),
        };
        Ok(camera)
    }
    pub fn get_type(&self) -> CameraType {
        match self {
            Camera::Orthographic(_) => CameraType::Orthographic,
            Camera::Perspective(_) => CameraType::Perspective,
            Camera::Environment(_) => CameraType::Environment,
            Camera::Realistic(_) => CameraType::Realistic,
        }
    }
    /// Append the type specific block (including the common block).
    pub fn insert(&self, out: &mut SceneBuffer) {
        match self {
            Camera::Orthographic(camera) => camera.insert(out),
            Camera::Perspective(camera) => {
                out.add_to_output("#Camera");
                camera.insert(out)
            }
            Camera::Environment(camera) => {
                out.add_to_output("#Camera");
                camera.insert(out)
            }
            Camera::Realistic(camera) => {
                out.add_to_output("#Camera");
                camera.insert(out)
            }
        }
    }
}
