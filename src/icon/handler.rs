//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不直接打印面向用户的文案。
//! 处理链路固定为：
//! 1. 解码内嵌 Base64
//! 2. （可选）校验 PNG 签名与 IHDR 尺寸
//! 3. 写入目标文件
//!
//! ## 实现思路
//!
//! - 任一阶段失败立即返回，后续阶段不执行；解码或校验失败时不会创建文件。
//! - 记录 `decode/validate/write/total` 阶段耗时，便于诊断。

use std::path::PathBuf;
use std::time::Instant;

use super::decoder::decode_payload;
use super::validate::{PngInfo, inspect_png};
use super::writer::write_icon;
use super::IconConfig;
use crate::error::IconError;

/// 成功生成图标后的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIcon {
    /// 实际写入的路径。
    pub path: PathBuf,
    /// 写入的字节数。
    pub bytes_written: usize,
    /// IHDR 尺寸；关闭校验时为 `None`。
    pub info: Option<PngInfo>,
}

/// 图标生成器。
pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust
    /// use create_app_icon::icon::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default());
    /// assert!(generator.config().validate_png);
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 解码 `payload` 并写入配置中的输出路径。
    pub fn generate(&self, payload: &str) -> Result<CreatedIcon, IconError> {
        let total_started = Instant::now();

        let decode_started = Instant::now();
        let bytes = decode_payload(payload, self.config.max_decoded_bytes)?;
        let decode_ms = decode_started.elapsed().as_millis();

        let validate_started = Instant::now();
        let info = if self.config.validate_png {
            let info = inspect_png(&bytes)?;
            if info.width != self.config.expected_width || info.height != self.config.expected_height {
                log::warn!(
                    "📏 图标尺寸与预期不符：{}（预期 {}）",
                    info,
                    self.config.expected_dimensions()
                );
            }
            Some(info)
        } else {
            None
        };
        let validate_ms = validate_started.elapsed().as_millis();

        let write_started = Instant::now();
        let bytes_written = write_icon(&self.config.output_path, &bytes)?;
        let write_ms = write_started.elapsed().as_millis();

        log::info!(
            "⏱️ 图标生成完成 - decode={}ms validate={}ms write={}ms total={}ms, {} bytes",
            decode_ms,
            validate_ms,
            write_ms,
            total_started.elapsed().as_millis(),
            bytes_written
        );

        Ok(CreatedIcon {
            path: self.config.output_path.clone(),
            bytes_written,
            info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::payload::{ICON_BASE64, ICON_DECODED_LEN};
    use std::fs;

    fn config_in(dir: &std::path::Path) -> IconConfig {
        IconConfig {
            output_path: dir.join("app_icon.png"),
            ..IconConfig::default()
        }
    }

    #[test]
    fn generates_icon_with_dimensions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let generator = IconGenerator::new(config_in(dir.path()));

        let created = generator.generate(ICON_BASE64).expect("generate");

        assert_eq!(created.bytes_written, ICON_DECODED_LEN);
        assert_eq!(created.info, Some(PngInfo { width: 1024, height: 1024 }));
        assert_eq!(fs::metadata(&created.path).expect("metadata").len(), ICON_DECODED_LEN as u64);
    }

    #[test]
    fn skips_inspection_when_validation_is_off() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = IconConfig {
            validate_png: false,
            ..config_in(dir.path())
        };

        let created = IconGenerator::new(config).generate("SGVsbG8=").expect("generate");

        assert_eq!(created.info, None);
        assert_eq!(fs::read(&created.path).expect("read back"), b"Hello");
    }

    #[test]
    fn non_png_payload_is_rejected_without_creating_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        let output = config.output_path.clone();

        let result = IconGenerator::new(config).generate("SGVsbG8=");

        assert!(matches!(result, Err(IconError::InvalidFormat(_))));
        assert!(!output.exists());
    }

    #[test]
    fn decode_failure_does_not_create_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        let output = config.output_path.clone();

        let result = IconGenerator::new(config).generate("iVBO*w0KGgo=");

        assert!(matches!(result, Err(IconError::Decode(_))));
        assert!(!output.exists());
    }
}
