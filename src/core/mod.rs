pub mod camera;
pub mod error;
pub mod export;
pub mod geometry;
pub mod lux;
pub mod paramset;
pub mod settings;
pub mod transform;
pub mod units;
pub mod upaxis;
