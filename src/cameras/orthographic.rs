// lux
use crate::cameras::common::CommonBlock;
use crate::core::camera::{CameraSource, CameraType};
use crate::core::export::SceneBuffer;
use crate::core::geometry::Point2i;
use crate::core::lux::Float;
use crate::core::settings::ExportSettings;

pub struct OrthographicCamera {
    /// Half the ortho width, applied to the screen window.
    pub scale: Float,
    pub common: CommonBlock,
}

impl OrthographicCamera {
    pub fn create<C>(
        source: &C,
        settings: &ExportSettings,
        resolution: Point2i,
        scene_scale: Float,
    ) -> Self
    where
        C: CameraSource + ?Sized,
    {
        let scale: Float = source.ortho_width() / 2.0;
        let common = CommonBlock::create(source, settings, resolution, scale, scene_scale);
        OrthographicCamera { scale, common }
    }
    pub fn insert(&self, out: &mut SceneBuffer) {
        out.add_to_output(format!(
            "\tscene.camera.type = {}",
            CameraType::Orthographic
        ));
        self.common.insert(out);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cameras::snapshot::CameraSnapshot;

    #[test]
    fn half_ortho_width_scales_screen_window() {
        let camera = CameraSnapshot {
            ortho: true,
            ortho_width: 10.0,
            ..Default::default()
        };
        let ortho = OrthographicCamera::create(
            &camera,
            &ExportSettings::default(),
            Point2i { x: 1000, y: 500 },
            0.01,
        );
        assert_eq!(ortho.scale, 5.0);
        let sw = ortho.common.screen_window;
        assert_eq!((sw.p_min.x, sw.p_max.x), (-5.0, 5.0));
        assert_eq!((sw.p_min.y, sw.p_max.y), (-2.5, 2.5));
        let mut out = SceneBuffer::new();
        ortho.insert(&mut out);
        assert_eq!(out.lines()[0], "\tscene.camera.type = orthographic");
        assert!(out.find("scene.camera.fieldofview").is_none());
        assert!(out.find("scene.camera.lensradius").is_none());
        assert!(out.find("scene.camera.autofocus.enable").is_none());
    }
}
