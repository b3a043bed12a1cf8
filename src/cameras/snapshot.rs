//! A plain copy of all camera attributes the exporter reads. It is
//! what a host plugin hands over when the live scene graph is not
//! around (command line, tests), and it can be read from JSON.
//!
//! World space queries set to `null` fail with
//! `QueryError::Unavailable`.

// std
use std::fs;
use std::path::Path;
// others
use serde::{Deserialize, Serialize};
// lux
use crate::core::camera::{CameraSource, WorldQuery};
use crate::core::error::{QueryError, Result};
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::lux::Float;

/// Field of view (radians) for a film aperture in inches and a focal
/// length in millimetres.
pub fn field_of_view(aperture: Float, focal_length: Float) -> Float {
    2.0 * ((aperture * 25.4) / (2.0 * focal_length)).atan()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSnapshot {
    pub name: String,
    pub ortho: bool,
    pub ortho_width: Float,
    pub focal_length: Float,
    pub f_stop: Float,
    pub center_of_interest: Float,
    pub horizontal_field_of_view: Float,
    pub vertical_field_of_view: Float,
    pub horizontal_film_aperture: Float,
    pub vertical_film_aperture: Float,
    pub film_translate_h: Float,
    pub film_translate_v: Float,
    pub near_clipping_plane: Float,
    pub far_clipping_plane: Float,
    pub eye_point: Option<Point3f>,
    pub up_direction: Option<Vector3f>,
    pub center_of_interest_point: Option<Point3f>,
}

impl Default for CameraSnapshot {
    /// A 35mm camera at the origin looking down -Z (Y-up).
    fn default() -> Self {
        let focal_length: Float = 35.0;
        let horizontal_film_aperture: Float = 1.417;
        let vertical_film_aperture: Float = 0.945;
        CameraSnapshot {
            name: String::from("perspShape"),
            ortho: false,
            ortho_width: 30.0,
            focal_length,
            f_stop: 5.6,
            center_of_interest: 5.0,
            horizontal_field_of_view: field_of_view(horizontal_film_aperture, focal_length),
            vertical_field_of_view: field_of_view(vertical_film_aperture, focal_length),
            horizontal_film_aperture,
            vertical_film_aperture,
            film_translate_h: 0.0,
            film_translate_v: 0.0,
            near_clipping_plane: 0.1,
            far_clipping_plane: 10000.0,
            eye_point: Some(Point3f::default()),
            up_direction: Some(Vector3f {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            }),
            center_of_interest_point: Some(Point3f {
                x: 0.0,
                y: 0.0,
                z: -5.0,
            }),
        }
    }
}

impl CameraSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json: String = fs::read_to_string(path)?;
        CameraSnapshot::from_json_str(&json)
    }
}

impl CameraSource for CameraSnapshot {
    fn name(&self) -> &str {
        &self.name
    }
    fn is_ortho(&self) -> bool {
        self.ortho
    }
    fn ortho_width(&self) -> Float {
        self.ortho_width
    }
    fn focal_length(&self) -> Float {
        self.focal_length
    }
    fn f_stop(&self) -> Float {
        self.f_stop
    }
    fn center_of_interest(&self) -> Float {
        self.center_of_interest
    }
    fn horizontal_field_of_view(&self) -> Float {
        self.horizontal_field_of_view
    }
    fn vertical_field_of_view(&self) -> Float {
        self.vertical_field_of_view
    }
    fn horizontal_film_aperture(&self) -> Float {
        self.horizontal_film_aperture
    }
    fn vertical_film_aperture(&self) -> Float {
        self.vertical_film_aperture
    }
    fn film_translate_h(&self) -> Float {
        self.film_translate_h
    }
    fn film_translate_v(&self) -> Float {
        self.film_translate_v
    }
    fn near_clipping_plane(&self) -> Float {
        self.near_clipping_plane
    }
    fn far_clipping_plane(&self) -> Float {
        self.far_clipping_plane
    }
    fn eye_point(&self) -> std::result::Result<Point3f, QueryError> {
        self.eye_point
            .ok_or(QueryError::Unavailable(WorldQuery::EyePoint))
    }
    fn up_direction(&self) -> std::result::Result<Vector3f, QueryError> {
        self.up_direction
            .ok_or(QueryError::Unavailable(WorldQuery::UpDirection))
    }
    fn center_of_interest_point(&self) -> std::result::Result<Point3f, QueryError> {
        self.center_of_interest_point
            .ok_or(QueryError::Unavailable(WorldQuery::CenterOfInterestPoint))
    }
}
