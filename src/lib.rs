//! # lux_camera
//!
//! [Rust][rust] crate to export cameras of a 3D host application
//! (e.g. Maya) as [LuxCore][luxcore] scene description blocks.
//!
//! The host camera is read through the
//! [CameraSource](core/camera/trait.CameraSource.html) trait, the
//! export itself is done by
//! [CameraExport](core/export/struct.CameraExport.html):
//!
//! ```rust
//! use lux_camera::cameras::snapshot::CameraSnapshot;
//! use lux_camera::core::export::{CameraExport, ExportModule, SceneBuffer};
//! use lux_camera::core::settings::ExportSettings;
//!
//! let camera = CameraSnapshot::default();
//! let settings = ExportSettings::default();
//! let mut out = SceneBuffer::new();
//! CameraExport::new(&camera, 1920, 1080, &settings)
//!     .and_then(|export| export.get_output(&mut out))
//!     .unwrap();
//! assert_eq!(out.find("scene.camera.type"), Some("scene.camera.type = perspective"));
//! ```
//!
//! [rust]: https://www.rust-lang.org
//! [luxcore]: https://luxcorerender.org

#[macro_use]
extern crate impl_ops;

pub mod cameras;
pub mod core;
