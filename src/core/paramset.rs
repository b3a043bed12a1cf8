//! Bundle up parameters and their values in a generic way.
//!
//! A host settings node (e.g. `lux_settings` in Maya) is dumped into a
//! **ParamSet** once per export session. The typed lookups below are
//! then used to fill an `ExportSettings` struct.

// std
use std::cell::Cell;
// lux
use crate::core::error::SettingsError;
use crate::core::lux::Float;

pub struct ParamSetItem<T> {
    pub name: String,
    pub values: Vec<T>,
    pub n_values: usize,
    pub looked_up: Cell<bool>,
}

impl<T> ParamSetItem<T> {
    fn new(name: String, values: Vec<T>) -> Self {
        let n_values: usize = values.len();
        ParamSetItem {
            name,
            values,
            n_values,
            looked_up: Cell::new(false),
        }
    }
}

#[derive(Default)]
pub struct ParamSet {
    pub name: String,
    pub bools: Vec<ParamSetItem<bool>>,
    pub ints: Vec<ParamSetItem<i32>>,
    pub floats: Vec<ParamSetItem<Float>>,
    pub strings: Vec<ParamSetItem<String>>,
}

fn lookup_one<T: Clone>(items: &[ParamSetItem<T>], name: &str) -> Option<T> {
    for v in items {
        if v.name == name && v.n_values == 1 {
            v.looked_up.set(true);
            return Some(v.values[0].clone());
        }
    }
    None
}

impl ParamSet {
    pub fn new(name: &str) -> Self {
        ParamSet {
            name: String::from(name),
            ..Default::default()
        }
    }
    pub fn add_bool(&mut self, name: String, value: bool) {
        self.bools.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_int(&mut self, name: String, value: i32) {
        self.ints.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_float(&mut self, name: String, value: Float) {
        self.floats.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_string(&mut self, name: String, value: String) {
        self.strings.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn find_one_string(&self, name: &str, d: String) -> String {
        lookup_one(&self.strings, name).unwrap_or(d)
    }
    pub fn find_one_filename(&self, name: &str, d: String) -> String {
        let filename: String = self.find_one_string(name, String::new());
        if filename.is_empty() {
            return d;
        }
        filename
    }
    /// Hosts often store flags as integers, accept both.
    pub fn find_one_flag(&self, name: &str) -> Option<bool> {
        lookup_one(&self.bools, name).or_else(|| lookup_one(&self.ints, name).map(|i| i != 0))
    }
    /// Floats may come in as integers as well (e.g. an exposure of 1).
    pub fn find_one_number(&self, name: &str) -> Option<Float> {
        lookup_one(&self.floats, name).or_else(|| lookup_one(&self.ints, name).map(Float::from))
    }
    pub fn require_flag(&self, name: &str) -> Result<bool, SettingsError> {
        self.find_one_flag(name)
            .ok_or_else(|| SettingsError::MissingKey(String::from(name)))
    }
    pub fn require_number(&self, name: &str) -> Result<Float, SettingsError> {
        self.find_one_number(name)
            .ok_or_else(|| SettingsError::MissingKey(String::from(name)))
    }
    pub fn require_string(&self, name: &str) -> Result<String, SettingsError> {
        lookup_one(&self.strings, name).ok_or_else(|| SettingsError::MissingKey(String::from(name)))
    }
    /// Names of all parameters which were never looked up.
    pub fn unused(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        names.extend(unused_names(&self.bools));
        names.extend(unused_names(&self.ints));
        names.extend(unused_names(&self.floats));
        names.extend(unused_names(&self.strings));
        names
    }
    pub fn report_unused(&self) {
        for name in self.unused() {
            log::warn!("\"{}\" unused in settings node \"{}\"", name, self.name);
        }
    }
}

fn unused_names<T>(items: &[ParamSetItem<T>]) -> Vec<&str> {
    items
        .iter()
        .filter(|v| !v.looked_up.get())
        .map(|v| v.name.as_str())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookups_with_defaults() {
        let mut ps = ParamSet::new("lux_settings");
        ps.add_string(String::from("camera_persptype"), String::from("Perspective"));
        ps.add_string(String::from("camera_realistic_specfile"), String::new());
        assert_eq!(
            ps.find_one_string("camera_persptype", String::new()),
            "Perspective"
        );
        assert_eq!(ps.find_one_string("up_axis", String::from("y")), "y");
        // an empty file name falls back to the default
        assert_eq!(
            ps.find_one_filename("camera_realistic_specfile", String::from("a.dat")),
            "a.dat"
        );
        assert_eq!(ps.find_one_number("camera_exposuretime"), None);
    }

    #[test]
    fn flags_accept_ints_and_bools() {
        let mut ps = ParamSet::new("lux_settings");
        ps.add_int(String::from("camera_autofocus"), 1);
        ps.add_bool(String::from("camera_infinite_focus"), false);
        ps.add_int(String::from("camera_exposuretime"), 2);
        assert_eq!(ps.find_one_flag("camera_autofocus"), Some(true));
        assert_eq!(ps.find_one_flag("camera_infinite_focus"), Some(false));
        assert_eq!(ps.find_one_number("camera_exposuretime"), Some(2.0));
        assert!(matches!(
            ps.require_flag("nope"),
            Err(SettingsError::MissingKey(ref key)) if key == "nope"
        ));
    }

    #[test]
    fn floats_win_over_ints() {
        let mut ps = ParamSet::new("lux_settings");
        ps.add_float(String::from("camera_exposuretime"), 0.5);
        ps.add_int(String::from("camera_exposuretime"), 3);
        assert_eq!(ps.require_number("camera_exposuretime").unwrap(), 0.5);
        assert_eq!(ps.unused(), vec!["camera_exposuretime"]);
    }

    #[test]
    fn unused_parameters() {
        let mut ps = ParamSet::new("lux_settings");
        ps.add_int(String::from("camera_autofocus"), 0);
        ps.add_int(String::from("render_threads"), 8);
        ps.find_one_flag("camera_autofocus");
        assert_eq!(ps.unused(), vec!["render_threads"]);
    }
}
