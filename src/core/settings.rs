//! Export settings are read once per export session, validated, and
//! then passed by reference to every camera export.
//!
//! They can be loaded from JSON or from a host settings node dumped
//! into a [`ParamSet`](crate::core::paramset::ParamSet).

// std
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
// others
use serde::{de, Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
// lux
use crate::core::error::SettingsError;
use crate::core::lux::Float;
use crate::core::paramset::ParamSet;
use crate::core::units::LinearUnit;
use crate::core::upaxis::UpAxis;

/// Which LuxCore camera a non-orthographic host camera becomes.
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
)]
#[strum(ascii_case_insensitive)]
pub enum PerspType {
    #[default]
    Perspective,
    Environment,
    /// Unverified, see `RealisticCamera`.
    Realistic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub camera_persptype: PerspType,
    /// No depth of field when set.
    #[serde(deserialize_with = "deserialize_flag")]
    pub camera_infinite_focus: bool,
    /// Shutter duration, written as `scene.camera.shutterclose`.
    pub camera_exposuretime: Float,
    #[serde(deserialize_with = "deserialize_flag")]
    pub camera_autofocus: bool,
    /// Up axis of the host scene.
    pub up_axis: UpAxis,
    /// Linear unit of the host scene.
    pub linear_unit: LinearUnit,
    /// Lens description for the realistic camera, never opened here.
    pub realistic_specfile: Option<PathBuf>,
    /// Write `lensradius` and `focaldistance`.
    #[serde(deserialize_with = "deserialize_flag")]
    pub emit_depth_of_field: bool,
    /// Write `cliphither` and `clipyon`.
    #[serde(deserialize_with = "deserialize_flag")]
    pub emit_clipping_planes: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            camera_persptype: PerspType::Perspective,
            camera_infinite_focus: true,
            camera_exposuretime: 1.0,
            camera_autofocus: false,
            up_axis: UpAxis::Y,
            linear_unit: LinearUnit::Cm,
            realistic_specfile: None,
            emit_depth_of_field: false,
            emit_clipping_planes: false,
        }
    }
}

/// Host flags are integers more often than not.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

fn parse_setting<T: FromStr>(key: &str, value: &str) -> Result<T, SettingsError> {
    T::from_str(value.trim()).map_err(|_| SettingsError::InvalidValue {
        key: String::from(key),
        value: String::from(value),
    })
}

/// Same names as the host settings node, case is ignored.
impl<'de> Deserialize<'de> for PerspType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name: String = String::deserialize(deserializer)?;
        parse_setting("camera_persptype", &name).map_err(de::Error::custom)
    }
}

impl ExportSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: ExportSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let json: String = fs::read_to_string(path.as_ref())?;
        log::debug!("reading export settings from {:?}", path.as_ref());
        ExportSettings::from_json_str(&json)
    }
    /// Fill the settings from a host settings node. The four camera
    /// attributes are required, the rest falls back to defaults.
    pub fn from_param_set(params: &ParamSet) -> Result<Self, SettingsError> {
        let defaults = ExportSettings::default();
        let persptype: String = params.require_string("camera_persptype")?;
        let up_axis: String = params.find_one_string("up_axis", defaults.up_axis.to_string());
        let linear_unit: String =
            params.find_one_string("linear_unit", defaults.linear_unit.to_string());
        let specfile: String = params.find_one_filename("camera_realistic_specfile", String::new());
        let settings = ExportSettings {
            camera_persptype: parse_setting("camera_persptype", &persptype)?,
            camera_infinite_focus: params.require_flag("camera_infinite_focus")?,
            camera_exposuretime: params.require_number("camera_exposuretime")?,
            camera_autofocus: params.require_flag("camera_autofocus")?,
            up_axis: parse_setting("up_axis", &up_axis)?,
            linear_unit: parse_setting("linear_unit", &linear_unit)?,
            realistic_specfile: if specfile.is_empty() {
                None
            } else {
                Some(PathBuf::from(specfile))
            },
            emit_depth_of_field: params
                .find_one_flag("camera_emit_dof")
                .unwrap_or(defaults.emit_depth_of_field),
            emit_clipping_planes: params
                .find_one_flag("camera_emit_clipping")
                .unwrap_or(defaults.emit_clipping_planes),
        };
        params.report_unused();
        settings.validate()?;
        Ok(settings)
    }
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.camera_exposuretime.is_finite() || self.camera_exposuretime < 0.0 {
            return Err(SettingsError::InvalidValue {
                key: String::from("camera_exposuretime"),
                value: self.camera_exposuretime.to_string(),
            });
        }
        if let Some(ref specfile) = self.realistic_specfile {
            if specfile.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue {
                    key: String::from("realistic_specfile"),
                    value: String::new(),
                });
            }
        }
        Ok(())
    }
}
