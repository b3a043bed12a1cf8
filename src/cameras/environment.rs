// lux
use crate::cameras::common::CommonBlock;
use crate::core::camera::{CameraSource, CameraType};
use crate::core::export::SceneBuffer;
use crate::core::geometry::Point2i;
use crate::core::lux::Float;
use crate::core::settings::ExportSettings;

pub struct EnvironmentCamera {
    pub common: CommonBlock,
}

impl EnvironmentCamera {
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scene_scale: Float,
    ) -> Self
    where
        C: CameraSource + ?Sized,
    {
        EnvironmentCamera {
            common: CommonBlock::create(source, settings, resolution, 1.0, scene_scale),
        }
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        out.add_to_output(format!("\tscene.camera.type = {}", CameraType::Environment));
        self.common.insert(out);
    }
}
