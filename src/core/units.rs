//! Linear units of the host scene. LuxCore works in metres, so every
//! distance which is not normalized gets multiplied by the scene scale
//! factor.

// others
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
// lux
use crate::core::lux::Float;

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    Mm,
    #[default]
    Cm,
    M,
    Km,
    In,
    Ft,
    Yd,
    Mi,
}

impl LinearUnit {
    /// Metres per host unit.
    pub fn scene_scale_factor(self) -> Float {
        match self {
            LinearUnit::Mm => 0.001,
            LinearUnit::Cm => 0.01,
            LinearUnit::M => 1.0,
            LinearUnit::Km => 1000.0,
            LinearUnit::In => 0.0254,
            LinearUnit::Ft => 0.3048,
            LinearUnit::Yd => 0.9144,
            LinearUnit::Mi => 1609.344,
        }
    }
}
