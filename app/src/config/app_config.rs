//! Runtime application configuration loaded from settings.

use std::path::PathBuf;

use badge_input::{Defaults, HexColor, js_trim};
use badge_render::qr::parse_ec_level;
use badge_render::{EcLevel, QrOptions};

use super::ConfigError;
use super::manager::SettingsManager;

/// Lower bound of the export scale factor.
pub const MIN_EXPORT_SCALE: f32 = 3.0;

/// Runtime configuration populated from settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_url: String,
    pub default_label: String,
    pub border_color: HexColor,
    pub qr_size: u32,
    pub qr_margin: u32,
    pub ec_level: EcLevel,
    pub min_export_scale: f32,
    pub output_dir: PathBuf,
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let qr = QrOptions::default();
        Self {
            default_url: badge_input::DEFAULT_URL.into(),
            default_label: badge_input::DEFAULT_LABEL.into(),
            border_color: HexColor::rgb(0x8e, 0xa9, 0x89),
            qr_size: qr.size,
            qr_margin: qr.margin,
            ec_level: qr.ec_level,
            min_export_scale: MIN_EXPORT_SCALE,
            output_dir: PathBuf::from("."),
            font_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the settings manager.
    pub fn load(sm: &SettingsManager) -> Result<Self, ConfigError> {
        let base = Self::default();
        let g = |key: &str| sm.get_setting(key);

        let font_path = g("QR_BADGE_FONT_PATH")?;

        Ok(Self {
            default_url: js_trim(&g("QR_BADGE_DEFAULT_URL")?).to_string(),
            default_label: js_trim(&g("QR_BADGE_DEFAULT_LABEL")?).to_string(),
            border_color: g("QR_BADGE_BORDER_COLOR")?
                .parse()
                .unwrap_or(base.border_color),
            qr_size: parse_or(&g("QR_BADGE_QR_SIZE")?, base.qr_size),
            qr_margin: parse_or(&g("QR_BADGE_QR_MARGIN")?, base.qr_margin),
            ec_level: parse_ec_level(&g("QR_BADGE_EC_LEVEL")?).unwrap_or(base.ec_level),
            min_export_scale: parse_or(&g("QR_BADGE_MIN_EXPORT_SCALE")?, base.min_export_scale),
            output_dir: PathBuf::from(g("QR_BADGE_OUTPUT_DIR")?.trim()),
            font_path: match font_path.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            },
        })
    }

    /// Fallback values for empty form fields.
    pub fn defaults(&self) -> Defaults {
        Defaults {
            url: self.default_url.clone(),
            label: self.default_label.clone(),
        }
    }

    pub fn qr_options(&self) -> QrOptions {
        QrOptions {
            ec_level: self.ec_level,
            size: self.qr_size,
            margin: self.qr_margin,
            ..QrOptions::default()
        }
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    s.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn load_without_overrides_matches_default() {
        let config = AppConfig::load(&SettingsManager::default()).unwrap();
        let base = AppConfig::default();
        assert_eq!(config.default_url, base.default_url);
        assert_eq!(config.default_label, base.default_label);
        assert_eq!(config.border_color, base.border_color);
        assert_eq!(config.qr_size, 520);
        assert_eq!(config.qr_margin, 1);
        assert_eq!(config.ec_level, EcLevel::M);
        assert_eq!(config.min_export_scale, MIN_EXPORT_SCALE);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.font_path.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let values: HashMap<String, String> = [
            ("QR_BADGE_DEFAULT_LABEL", " Example "),
            ("QR_BADGE_BORDER_COLOR", "#112233"),
            ("QR_BADGE_EC_LEVEL", "h"),
            ("QR_BADGE_FONT_PATH", "/tmp/Font.ttf"),
            ("QR_BADGE_OUTPUT_DIR", "/tmp/out"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = AppConfig::load(&SettingsManager::new(values)).unwrap();
        assert_eq!(config.default_label, "Example");
        assert_eq!(config.border_color, HexColor::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.ec_level, EcLevel::H);
        assert_eq!(config.font_path, Some(PathBuf::from("/tmp/Font.ttf")));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.qr_options().ec_level, EcLevel::H);
    }
}
