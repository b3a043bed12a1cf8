//! The realistic camera traces rays through a lens system described
//! by an external lens specification file.
//!
//! This export path has never been verified against a renderer that
//! accepts it. The parameters below are written with the legacy
//! `"type name" [value]` syntax and the scene scale factor is not
//! applied yet. Do not "fix" the formulas without a renderer to check
//! them against.

// std
use std::path::PathBuf;
// lux
use crate::cameras::common::CommonBlock;
use crate::core::camera::{CameraSource, CameraType};
use crate::core::error::{ExportError, Result};
use crate::core::export::SceneBuffer;
use crate::core::geometry::Point2i;
use crate::core::lux::{fmt_float, Float, DOF_CONST};
use crate::core::settings::ExportSettings;

pub struct RealisticCamera {
    pub specfile: PathBuf,
    pub film_distance: Float,
    pub aperture_diameter: Float,
    pub film_diag: Float,
    pub common: CommonBlock,
}

impl RealisticCamera {
    /// Fails if no lens specification file is configured. The file
    /// itself is neither opened nor validated.
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scene_scale: Float,
    ) -> Result<Self>
    where
        C: CameraSource + ?Sized,
    {
        let specfile: PathBuf = settings
            .realistic_specfile
            .clone()
            .ok_or(ExportError::MissingSpecFile)?;
        log::warn!(
            "realistic camera export for \"{}\" is unverified",
            source.name()
        );
        let film_diag: Float =
            (source.horizontal_film_aperture() * source.vertical_film_aperture()).sqrt();
        let f_stop: Float = source.f_stop();
        let dof_dist: Float = source.center_of_interest();
        let focal: Float = source.focal_length() / DOF_CONST;
        let aperture_diameter: Float = focal / f_stop;
        let film_distance: Float = dof_dist * focal / (dof_dist - focal);
        if !film_distance.is_finite() {
            log::error!(
                "camera \"{}\" is focused at its focal length ({} m)",
                source.name(),
                focal
            );
            return Err(ExportError::FilmDistance {
                focus_distance: dof_dist,
                focal_length: focal,
            });
        }
        Ok(RealisticCamera {
            specfile,
            film_distance,
            aperture_diameter,
            film_diag,
            common: CommonBlock::create(source, settings, resolution, 1.0, scene_scale),
        })
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        out.add_to_output(format!("\tscene.camera.type = {}", CameraType::Realistic));
        out.add_to_output(format!(
            "\t\"string specfile\" [\"{}\"]",
            self.specfile.display()
        ));
        out.add_to_output(format!(
            "\t\"float filmdistance\" [{}]",
            fmt_float(self.film_distance)
        ));
        out.add_to_output(format!(
            "\t\"float aperture_diameter\" [{}]",
            fmt_float(self.aperture_diameter)
        ));
        out.add_to_output(format!(
            "\t\"float filmdiag\" [{}]",
            fmt_float(self.film_diag)
        ));
        self.common.insert(out);
    }
}
