use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{BorderConfig, Dimensions, MountMode, Orientation};

/// Everything the user can set. Board size and aperture placement are derived
/// from this by [`compute`](crate::compute) and never stored here.
///
/// Updates go through the `with_*` methods, which return a new config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountConfig {
    pub photo_width: f64,
    pub photo_height: f64,
    /// Visible margin between the print's image and the aperture edge.
    pub photo_border: f64,
    /// Print overlap hidden behind the mount.
    pub underlap: f64,
    /// Positive values raise the aperture.
    pub mount_offset: f64,
    /// Paper-size table name, or `"Custom"` for `custom_board_size`.
    pub board_preset: String,
    pub custom_board_size: Dimensions,
    pub mode: MountMode,
    pub manual_borders: BorderConfig,
    pub orientation: Orientation,
}

impl Default for MountConfig {
    fn default() -> Self {
        MountConfig {
            photo_width: 203.2,
            photo_height: 254.0,
            photo_border: 6.35,
            underlap: 6.35,
            mount_offset: 7.62,
            board_preset: "A2".to_string(),
            custom_board_size: Dimensions::new(406.4, 508.0),
            mode: MountMode::FixedBoard,
            manual_borders: BorderConfig::new(50.0, 60.0, 45.0, 45.0),
            orientation: Orientation::Portrait,
        }
    }
}

impl MountConfig {
    pub fn photo_size(&self) -> Dimensions {
        Dimensions::new(self.photo_width, self.photo_height)
    }

    pub fn with_photo_size(mut self, size: Dimensions) -> Self {
        self.photo_width = size.width;
        self.photo_height = size.height;
        self
    }

    pub fn with_photo_border(mut self, border: f64) -> Self {
        self.photo_border = border;
        self
    }

    pub fn with_underlap(mut self, underlap: f64) -> Self {
        self.underlap = underlap;
        self
    }

    pub fn with_mount_offset(mut self, offset: f64) -> Self {
        self.mount_offset = offset;
        self
    }

    pub fn with_board_preset(mut self, preset: impl Into<String>) -> Self {
        self.board_preset = preset.into();
        self
    }

    pub fn with_custom_board_size(mut self, size: Dimensions) -> Self {
        self.custom_board_size = size;
        self
    }

    pub fn with_mode(mut self, mode: MountMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_manual_borders(mut self, borders: BorderConfig) -> Self {
        self.manual_borders = borders;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Flip the orientation flag and turn the photo and the custom board with it.
    ///
    /// Preset boards are not touched: they are re-derived from the flag on the
    /// next computation. Applying this twice gives back the original config.
    pub fn toggle_orientation(&self) -> Self {
        MountConfig {
            photo_width: self.photo_height,
            photo_height: self.photo_width,
            custom_board_size: self.custom_board_size.swapped(),
            orientation: self.orientation.toggled(),
            ..self.clone()
        }
    }

    /// Parse a config; missing fields take their default values.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let txt =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let cfg = Self::from_json_str(&txt)?;
        log::debug!("loaded mount config from {}", path.display());
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let mut txt = self.to_json_pretty()?;
        txt.push('\n');
        fs::write(path, txt).map_err(|e| ConfigError::Io(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_involutive() {
        let cfg = MountConfig::default()
            .with_photo_size(Dimensions::new(150.0, 100.0))
            .with_custom_board_size(Dimensions::new(300.0, 420.0));
        let once = cfg.toggle_orientation();
        assert_eq!(once.photo_size(), Dimensions::new(100.0, 150.0));
        assert_eq!(once.custom_board_size, Dimensions::new(420.0, 300.0));
        assert_eq!(once.orientation, Orientation::Landscape);
        assert_eq!(once.toggle_orientation(), cfg);
    }

    #[test]
    fn toggle_leaves_borders_and_preset_alone() {
        let cfg = MountConfig::default();
        let t = cfg.toggle_orientation();
        assert_eq!(t.manual_borders, cfg.manual_borders);
        assert_eq!(t.board_preset, cfg.board_preset);
        assert_eq!(t.mount_offset, cfg.mount_offset);
    }

    #[test]
    fn partial_json_takes_defaults() {
        let cfg = MountConfig::from_json_str(
            r#"{"photoWidth": 100, "mode": "CustomBorders", "orientation": "landscape"}"#,
        )
        .unwrap();
        assert_eq!(cfg.photo_width, 100.0);
        assert_eq!(cfg.photo_height, 254.0);
        assert_eq!(cfg.mode, MountMode::CustomBorders);
        assert_eq!(cfg.orientation, Orientation::Landscape);
        assert_eq!(cfg.board_preset, "A2");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let txt = MountConfig::default().to_json_pretty().unwrap();
        for key in [
            "photoWidth",
            "photoBorder",
            "mountOffset",
            "boardPreset",
            "customBoardSize",
            "manualBorders",
        ] {
            assert!(txt.contains(key), "missing {key}");
        }
        assert!(txt.contains("\"FixedBoard\""));
        assert!(txt.contains("\"portrait\""));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            MountConfig::from_json_str("{ nope"),
            Err(ConfigError::Json(_))
        ));
    }
}
