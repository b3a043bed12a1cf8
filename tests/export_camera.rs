//! End-to-end camera exports through the public API.

use std::path::PathBuf;

use lux_camera::cameras::snapshot::CameraSnapshot;
use lux_camera::core::camera::{CameraSource, WorldQuery};
use lux_camera::core::error::{ExportError, QueryError};
use lux_camera::core::export::{CameraExport, ExportModule, SceneBuffer};
use lux_camera::core::geometry::{Point3f, Vector3f};
use lux_camera::core::lux::Float;
use lux_camera::core::settings::{ExportSettings, PerspType};
use lux_camera::core::upaxis::UpAxis;

fn export(camera: &dyn CameraSource, width: i32, height: i32, settings: &ExportSettings) -> SceneBuffer {
    let mut out = SceneBuffer::new();
    CameraExport::new(camera, width, height, settings)
        .and_then(|export| export.get_output(&mut out))
        .expect("export failed");
    out
}

fn values(out: &SceneBuffer, key: &str) -> Vec<Float> {
    let line = out.find(key).unwrap_or_else(|| panic!("{} missing", key));
    line.split('=')
        .nth(1)
        .unwrap()
        .split_whitespace()
        .map(|v| v.parse::<Float>().unwrap())
        .collect()
}

#[test]
fn perspective_full_block() {
    let camera = CameraSnapshot::default();
    let settings = ExportSettings {
        camera_exposuretime: 0.04,
        ..Default::default()
    };
    let out = export(&camera, 1920, 1080, &settings);
    let fov = format!("{:.6}", camera.horizontal_field_of_view.to_degrees());
    let expected: Vec<String> = vec![
        String::from("#Camera"),
        String::from("\tscene.camera.type = perspective"),
        String::from("\tscene.camera.autofocus.enable = false"),
        format!("\tscene.camera.fieldofview = {}", fov),
        String::from("\tscene.camera.screenwindow = -1.000000 1.000000 -0.562500 0.562500"),
        String::from("\tscene.camera.shutteropen = 0.000000"),
        String::from("\tscene.camera.shutterclose = 0.040000"),
        String::from("\tscene.camera.lookat.orig = 0.000000 0.000000 0.000000"),
        String::from("\tscene.camera.lookat.target = 0.000000 5.000000 0.000000"),
        String::from("\tscene.camera.up = 0.000000 0.000000 1.000000"),
        String::from(""),
    ];
    assert_eq!(out.lines(), expected.as_slice());
}

#[test]
fn landscape_and_portrait_screen_windows() {
    let camera = CameraSnapshot::default();
    let settings = ExportSettings::default();
    let ratio: Float = 1920.0 / 1080.0;
    let sw = values(&export(&camera, 1920, 1080, &settings), "scene.camera.screenwindow");
    let expected = [-1.0, 1.0, -1.0 / ratio, 1.0 / ratio];
    for (v, e) in sw.iter().zip(expected.iter()) {
        assert!((v - e).abs() < 1e-6);
    }
    let ratio: Float = 1080.0 / 1920.0;
    let sw = values(&export(&camera, 1080, 1920, &settings), "scene.camera.screenwindow");
    let expected = [-ratio, ratio, -1.0, 1.0];
    for (v, e) in sw.iter().zip(expected.iter()) {
        assert!((v - e).abs() < 1e-6);
    }
}

#[test]
fn orthographic_has_no_lens_lines() {
    let camera = CameraSnapshot {
        ortho: true,
        ortho_width: 10.0,
        ..Default::default()
    };
    let settings = ExportSettings {
        camera_infinite_focus: false,
        ..Default::default()
    };
    let out = export(&camera, 1920, 1080, &settings);
    assert_eq!(out.lines()[0], "\tscene.camera.type = orthographic");
    assert!(out.find("#Camera").is_none());
    assert!(out.find("scene.camera.fieldofview").is_none());
    assert!(out.find("scene.camera.autofocus.enable").is_none());
    assert!(out.find("scene.camera.lensradius").is_none());
    let sw = values(&out, "scene.camera.screenwindow");
    assert_eq!(sw[0], -5.0);
    assert_eq!(sw[1], 5.0);
}

#[test]
fn environment_and_realistic() {
    let camera = CameraSnapshot::default();
    let settings = ExportSettings {
        camera_persptype: PerspType::Environment,
        ..Default::default()
    };
    let out = export(&camera, 800, 600, &settings);
    assert_eq!(out.lines()[1], "\tscene.camera.type = environment");
    assert!(out.find("scene.camera.fieldofview").is_none());

    let settings = ExportSettings {
        camera_persptype: PerspType::Realistic,
        realistic_specfile: Some(PathBuf::from("cameras/realistic/wide.22mm.dat")),
        ..Default::default()
    };
    let out = export(&camera, 800, 600, &settings);
    assert_eq!(out.lines()[1], "\tscene.camera.type = realistic");
    assert_eq!(
        out.lines()[2],
        "\t\"string specfile\" [\"cameras/realistic/wide.22mm.dat\"]"
    );
    assert!(out.find("scene.camera.lookat.orig").is_some());
}

#[test]
fn realistic_without_specfile_appends_nothing() {
    let camera = CameraSnapshot::default();
    let settings = ExportSettings {
        camera_persptype: PerspType::Realistic,
        ..Default::default()
    };
    let mut out = SceneBuffer::new();
    let err = CameraExport::new(&camera, 800, 600, &settings)
        .and_then(|export| export.get_output(&mut out))
        .unwrap_err();
    assert!(matches!(err, ExportError::MissingSpecFile));
    assert!(out.is_empty());
}

#[test]
fn realistic_focused_at_focal_length_appends_nothing() {
    let camera = CameraSnapshot {
        focal_length: 35.0,
        center_of_interest: 0.035,
        ..Default::default()
    };
    let settings = ExportSettings {
        camera_persptype: PerspType::Realistic,
        realistic_specfile: Some(PathBuf::from("cameras/realistic/wide.22mm.dat")),
        ..Default::default()
    };
    let mut out = SceneBuffer::new();
    let err = CameraExport::new(&camera, 800, 600, &settings)
        .and_then(|export| export.get_output(&mut out))
        .unwrap_err();
    assert!(matches!(err, ExportError::FilmDistance { .. }));
    assert!(out.is_empty());
}

#[test]
fn matching_up_axis_keeps_coordinates() {
    let camera = CameraSnapshot {
        eye_point: Some(Point3f {
            x: -3.0,
            y: 4.5,
            z: 2.0,
        }),
        ..Default::default()
    };
    let settings = ExportSettings {
        up_axis: UpAxis::Z,
        ..Default::default()
    };
    let out = export(&camera, 640, 480, &settings);
    assert_eq!(values(&out, "scene.camera.lookat.orig"), vec![-3.0, 4.5, 2.0]);
    assert_eq!(values(&out, "scene.camera.up"), vec![0.0, 1.0, 0.0]);
}

/// A host whose API refuses to hand out the up direction.
struct BrokenHost(CameraSnapshot);

impl CameraSource for BrokenHost {
    fn name(&self) -> &str {
        "brokenShape"
    }
    fn is_ortho(&self) -> bool {
        self.0.is_ortho()
    }
    fn ortho_width(&self) -> Float {
        self.0.ortho_width()
    }
    fn focal_length(&self) -> Float {
        self.0.focal_length()
    }
    fn f_stop(&self) -> Float {
        self.0.f_stop()
    }
    fn center_of_interest(&self) -> Float {
        self.0.center_of_interest()
    }
    fn horizontal_field_of_view(&self) -> Float {
        self.0.horizontal_field_of_view()
    }
    fn vertical_field_of_view(&self) -> Float {
        self.0.vertical_field_of_view()
    }
    fn horizontal_film_aperture(&self) -> Float {
        self.0.horizontal_film_aperture()
    }
    fn vertical_film_aperture(&self) -> Float {
        self.0.vertical_film_aperture()
    }
    fn film_translate_h(&self) -> Float {
        self.0.film_translate_h()
    }
    fn film_translate_v(&self) -> Float {
        self.0.film_translate_v()
    }
    fn near_clipping_plane(&self) -> Float {
        self.0.near_clipping_plane()
    }
    fn far_clipping_plane(&self) -> Float {
        self.0.far_clipping_plane()
    }
    fn eye_point(&self) -> Result<Point3f, QueryError> {
        self.0.eye_point()
    }
    fn up_direction(&self) -> Result<Vector3f, QueryError> {
        Err(QueryError::Host(String::from("(kFailure): Object does not exist")))
    }
    fn center_of_interest_point(&self) -> Result<Point3f, QueryError> {
        self.0.center_of_interest_point()
    }
}

#[test]
fn failing_query_keeps_type_block_and_skips_look_at() {
    let camera = BrokenHost(CameraSnapshot::default());
    let settings = ExportSettings::default();
    let mut out = SceneBuffer::new();
    let export = CameraExport::new(&camera, 1920, 1080, &settings).unwrap();
    let err = export.get_output(&mut out).unwrap_err();
    assert_eq!(err.failed_query(), Some(WorldQuery::UpDirection));
    match err {
        ExportError::WorldQuery { query, source } => {
            assert_eq!(query, WorldQuery::UpDirection);
            assert!(matches!(source, QueryError::Host(_)));
        }
        other => panic!("unexpected error {}", other),
    }
    // no rollback of the type specific lines
    assert_eq!(
        out.find("scene.camera.type"),
        Some("scene.camera.type = perspective")
    );
    assert!(out.find("scene.camera.shutterclose").is_some());
    assert!(out.find("scene.camera.lookat.orig").is_none());
    assert!(out.find("scene.camera.up").is_none());
}
