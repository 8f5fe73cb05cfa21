//! # 配置模块
//!
//! ## 设计思路
//!
//! 把输出路径、尺寸预期、校验开关与手工兜底步骤中引用的路径集中到 `IconConfig`，
//! 默认值即为生产可用配置，不需要任何配置文件也能运行。
//!
//! ## 实现思路
//!
//! - `Default` 给出与资源目录约定一致的默认值。
//! - 可选的 `create_icon.json` 只需写出想覆盖的字段（`#[serde(default)]`）。
//! - 配置文件损坏不致命：记录告警后回退默认值。

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// 默认配置文件名（相对当前工作目录）。
pub const CONFIG_FILE_NAME: &str = "create_icon.json";

/// 图标生成配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// 输出文件路径。
    pub output_path: PathBuf,
    /// IHDR 中预期的宽度（像素）。
    pub expected_width: u32,
    /// IHDR 中预期的高度（像素）。
    pub expected_height: u32,
    /// 是否在写盘前校验 PNG 签名与 IHDR。
    pub validate_png: bool,
    /// 解码前按 Base64 长度估算的体积上限（字节）。
    pub max_decoded_bytes: u64,
    /// 手工兜底步骤中引用的 SVG 源文件。
    pub svg_fallback_path: String,
    /// 手工兜底步骤中要求保存到的 PNG 路径。
    pub png_fallback_path: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("app_icon.png"),
            expected_width: 1024,
            expected_height: 1024,
            validate_png: true,
            max_decoded_bytes: 8 * 1024 * 1024,
            svg_fallback_path: "assets/icons/app_icon.svg".to_string(),
            png_fallback_path: "assets/icons/app_icon.png".to_string(),
        }
    }
}

impl IconConfig {
    /// 从 JSON 文件读取配置。
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let content = fs::read_to_string(path).map_err(|e| {
            IconError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            IconError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.check()?;

        Ok(config)
    }

    /// 文件存在则读取，不存在或无效时回退默认值。
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("⚙️ 未找到配置文件 {}，使用默认配置", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("⚙️ 已加载配置文件 {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("⚙️ 配置文件无效，回退默认配置: {err}");
                Self::default()
            }
        }
    }

    /// 尺寸提示文案，例如 `1024x1024`。
    pub fn expected_dimensions(&self) -> String {
        format!("{}x{}", self.expected_width, self.expected_height)
    }

    fn check(&self) -> Result<(), IconError> {
        if self.expected_width == 0 || self.expected_height == 0 {
            return Err(IconError::Config("expected dimensions must be non-zero".to_string()));
        }

        match ImageFormat::from_path(&self.output_path) {
            Ok(ImageFormat::Png) => Ok(()),
            _ => Err(IconError::Config(format!(
                "output_path must end with .png: {}",
                self.output_path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, content).expect("write config failed");
        path
    }

    #[test]
    fn defaults_match_asset_layout() {
        let config = IconConfig::default();

        assert_eq!(config.output_path, PathBuf::from("app_icon.png"));
        assert_eq!(config.expected_dimensions(), "1024x1024");
        assert!(config.validate_png);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");

        let config = IconConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME));

        assert_eq!(config, IconConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(dir.path(), r#"{ "output_path": "out/icon.png", "validate_png": false }"#);

        let config = IconConfig::load_or_default(&path);

        assert_eq!(config.output_path, PathBuf::from("out/icon.png"));
        assert!(!config.validate_png);
        assert_eq!(config.expected_width, 1024);
        assert_eq!(config.svg_fallback_path, "assets/icons/app_icon.svg");
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(dir.path(), "{ not json");

        assert!(matches!(IconConfig::from_file(&path), Err(IconError::Config(_))));
        assert_eq!(IconConfig::load_or_default(&path), IconConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(dir.path(), r#"{ "ouput_path": "typo.png" }"#);

        assert!(matches!(IconConfig::from_file(&path), Err(IconError::Config(_))));
    }

    #[test]
    fn non_png_output_path_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(dir.path(), r#"{ "output_path": "app_icon.jpg" }"#);

        assert!(matches!(IconConfig::from_file(&path), Err(IconError::Config(_))));
    }
}
