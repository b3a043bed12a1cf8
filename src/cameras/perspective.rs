// lux
use crate::cameras::common::CommonBlock;
use crate::core::camera::{CameraSource, CameraType};
use crate::core::export::SceneBuffer;
use crate::core::geometry::Point2i;
use crate::core::lux::{bool_string, degrees, fmt_float, Float};
use crate::core::settings::ExportSettings;

/// The field of view of the longer image side, in degrees.
pub fn field_of_view<C>(source: &C, resolution: Point2i) -> Float
where
    C: CameraSource + ?Sized,
{
    if resolution.y < resolution.x {
        degrees(source.horizontal_field_of_view())
    } else {
        degrees(source.vertical_field_of_view())
    }
}

pub struct PerspectiveCamera {
    pub fov: Float,
    pub autofocus: bool,
    pub common: CommonBlock,
}

impl PerspectiveCamera {
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scene_scale: Float,
    ) -> Self
    where
        C: CameraSource + ?Sized,
    {
        PerspectiveCamera {
            fov: field_of_view(source, resolution),
            autofocus: settings.camera_autofocus,
            common: CommonBlock::create(source, settings, resolution, 1.0, scene_scale),
        }
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        out.add_to_output(format!("\tscene.camera.type = {}", CameraType::Perspective));
        out.add_to_output(format!(
            "\tscene.camera.autofocus.enable = {}",
            bool_string(self.autofocus)
        ));
        out.add_to_output(format!(
            "\tscene.camera.fieldofview = {}",
            fmt_float(self.fov)
        ));
        self.common.insert(out);
    }
}
