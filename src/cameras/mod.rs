//! Each LuxCore camera type derives its parameters from a host camera
//! and appends them to the scene description. All of them end with
//! the common block (screen window and shutter), the look-at block is
//! written last for every type.
//!
//! - EnvironmentCamera
//! - OrthographicCamera
//! - PerspectiveCamera
//! - RealisticCamera
//!
//! ## Perspective Camera
//!
//! The two most characteristic features of perspective are that
//! objects are smaller as their distance from the observer increases;
//! and that they are subject to **foreshortening**. The field of view
//! of the longer image side is exported, and autofocus can be enabled.
//!
//! ## Orthographic Camera
//!
//! The orthographic camera takes a rectangular region of the scene
//! and projects it onto the front face of the box that defines the
//! region. The size of the region is the ortho width of the host
//! camera, which scales the screen window.
//!
//! ## Environment Camera
//!
//! A camera model that traces rays in all directions around a point
//! in the scene, giving a 2D view of everything that is visible from
//! that point.
//!
//! ## Realistic Camera
//!
//! Simulates a lens system read from a lens specification file. The
//! export is a placeholder, see the module documentation.

pub mod common;
pub mod environment;
pub mod lookat;
pub mod orthographic;
pub mod perspective;
pub mod realistic;
pub mod snapshot;
