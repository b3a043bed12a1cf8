//! Parameters shared by all LuxCore camera types: screen window,
//! shutter and (optionally) depth of field and clipping planes.

// lux
use crate::core::camera::CameraSource;
use crate::core::export::SceneBuffer;
use crate::core::geometry::{Bounds2f, Point2f, Point2i};
use crate::core::lux::{fmt_float, Float, DOF_CONST};
use crate::core::settings::ExportSettings;

/// Aspect ratio is > 1 for landscape formats, e.g. 16/9 > 1. The
/// longer side is normalized to [-1, 1], the film offsets (a fraction
/// of the frame) shift the window, and *scale* stretches it.
pub fn screen_window(resolution: Point2i, shift_x: Float, shift_y: Float, scale: Float) -> Bounds2f {
    let ratio: Float = resolution.x as Float / resolution.y as Float;
    let inv_ratio: Float = 1.0 / ratio;
    let (half_x, half_y) = if ratio > 1.0 {
        (1.0, inv_ratio)
    } else {
        (ratio, 1.0)
    };
    Bounds2f {
        p_min: Point2f {
            x: ((2.0 * shift_x) - half_x) * scale,
            y: ((2.0 * shift_y) - half_y) * scale,
        },
        p_max: Point2f {
            x: ((2.0 * shift_x) + half_x) * scale,
            y: ((2.0 * shift_y) + half_y) * scale,
        },
    }
}

/// Thin lens aperture radius in metres, zero for infinite focus.
pub fn lens_radius(focal_length: Float, f_stop: Float, infinite_focus: bool) -> Float {
    if infinite_focus {
        0.0
    } else {
        let focal_length: Float = focal_length / DOF_CONST;
        focal_length / (2.0 * f_stop)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonBlock {
    pub screen_window: Bounds2f,
    pub shutter_open: Float,
    pub shutter_close: Float,
    pub lens_radius: Float,
    /// Written only if depth of field output is enabled.
    pub focal_distance: Option<Float>,
    /// Near and far clipping planes, written only if enabled.
    pub clipping: Option<(Float, Float)>,
}

impl CommonBlock {
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scale: Float,
        scene_scale: Float,
    ) -> Self
    where
        C: CameraSource + ?Sized,
    {
        let lens_radius: Float = lens_radius(
            source.focal_length(),
            source.f_stop(),
            settings.camera_infinite_focus,
        );
        // the focus distance attribute is not updated with the aim
        // point, use the center of interest instead
        let focal_distance: Option<Float> = if settings.emit_depth_of_field {
            Some(source.center_of_interest() * scene_scale)
        } else {
            None
        };
        let clipping: Option<(Float, Float)> = if settings.emit_clipping_planes {
            Some((
                source.near_clipping_plane() * scene_scale,
                source.far_clipping_plane() * scene_scale,
            ))
        } else {
            None
        };
        CommonBlock {
            screen_window: screen_window(
                resolution,
                source.film_translate_h(),
                source.film_translate_v(),
                scale,
            ),
            shutter_open: 0.0,
            shutter_close: settings.camera_exposuretime,
            lens_radius,
            focal_distance,
            clipping,
        }
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        let sw = &self.screen_window;
        out.add_to_output(format!(
            "\tscene.camera.screenwindow = {} {} {} {}",
            fmt_float(sw.p_min.x),
            fmt_float(sw.p_max.x),
            fmt_float(sw.p_min.y),
            fmt_float(sw.p_max.y)
        ));
        if let Some(focal_distance) = self.focal_distance {
            out.add_to_output(format!(
                "\tscene.camera.lensradius = {}",
                fmt_float(self.lens_radius)
            ));
            out.add_to_output(format!(
                "\tscene.camera.focaldistance = {}",
                fmt_float(focal_distance)
            ));
        }
        if let Some((hither, yon)) = self.clipping {
            out.add_to_output(format!("\tscene.camera.cliphither = {}", fmt_float(hither)));
            out.add_to_output(format!("\tscene.camera.clipyon = {}", fmt_float(yon)));
        }
        out.add_to_output(format!(
            "\tscene.camera.shutteropen = {}",
            fmt_float(self.shutter_open)
        ));
        out.add_to_output(format!(
            "\tscene.camera.shutterclose = {}",
            fmt_float(self.shutter_close)
        ));
    }
}
