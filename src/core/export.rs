//! The scene exporter collects the output of all export modules in a
//! **SceneBuffer**. The **CameraExport** module is responsible for
//! detecting the type of a given camera and exporting a suitable
//! LuxCore camera with appropriate parameters.

// std
use std::fmt;
use std::io::Write;
// lux
use crate::cameras::lookat::LookAt;
use crate::core::camera::{Camera, CameraSource};
use crate::core::error::{ExportError, Result};
use crate::core::geometry::Point2i;
use crate::core::lux::Float;
use crate::core::settings::ExportSettings;

/// Ordered, append-only scene description lines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SceneBuffer {
    lines: Vec<String>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        SceneBuffer::default()
    }
    pub fn add_to_output<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    /// First line starting with *key* (ignoring leading whitespace).
    pub fn find(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .map(|line| line.trim_start())
            .find(|line| line.starts_with(key))
    }
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for SceneBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Every part of the scene (camera, lights, geometry, ...) is written
/// by an export module.
pub trait ExportModule {
    fn get_output(&self, out: &mut SceneBuffer) -> Result<()>;
}

pub struct CameraExport<'a, C: CameraSource + ?Sized> {
    camera: &'a C,
    settings: &'a ExportSettings,
    resolution: Point2i,
    scene_scale: Float,
}

impl<'a, C: CameraSource + ?Sized> CameraExport<'a, C> {
    pub fn new(
        camera: &'a C,
        width: i32,
        height: i32,
        settings: &'a ExportSettings,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ExportError::InvalidResolution { width, height });
        }
        Ok(CameraExport {
            camera,
            settings,
            resolution: Point2i {
                x: width,
                y: height,
            },
            scene_scale: settings.linear_unit.scene_scale_factor(),
        })
    }
    pub fn get_resolution(&self) -> Point2i {
        self.resolution
    }
    pub fn get_scene_scale(&self) -> Float {
        self.scene_scale
    }
}

impl<'a, C: CameraSource + ?Sized> ExportModule for CameraExport<'a, C> {
    /// The type specific block first, then the look-at block. Lines
    /// appended before a failure stay in the buffer.
    fn get_output(&self, out: &mut SceneBuffer) -> Result<()> {
        let camera = Camera::create(self.camera, self.settings, self.resolution, self.scene_scale)?;
        log::debug!(
            "exporting {} camera \"{}\" ({}x{})",
            camera.get_type(),
            self.camera.name(),
            self.resolution.x,
            self.resolution.y
        );
        camera.insert(out);
        let look_at = LookAt::create(self.camera, self.settings.up_axis)?;
        look_at.insert(out);
        Ok(())
    }
}
