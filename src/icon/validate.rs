//! # PNG 校验模块
//!
//! 写盘前的可选加固：确认解码结果确实是 PNG，并从 IHDR 读出宽高。
//! 内嵌数据只包含到元数据块为止，不要求 IDAT / IEND 存在。

use image::ImageFormat;

use crate::error::IconError;

const PNG_SIGNATURE_LEN: usize = 8;
const IHDR_OFFSET: usize = PNG_SIGNATURE_LEN;
// 长度(4) + 类型(4) + 宽(4) + 高(4)
const IHDR_MIN_LEN: usize = IHDR_OFFSET + 16;

/// IHDR 中读出的图像尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for PngInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 通过文件签名（magic bytes）校验输入是否为图片。
fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::InvalidFormat("decoded data is empty".to_string()));
    }

    let kind = infer::get(bytes)
        .ok_or_else(|| IconError::InvalidFormat("unrecognized file signature".to_string()))?;

    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(IconError::InvalidFormat(format!(
            "file signature is not an image: {}",
            kind.mime_type()
        )));
    }

    Ok(())
}

/// 校验 PNG 签名并读取 IHDR 尺寸。
pub fn inspect_png(bytes: &[u8]) -> Result<PngInfo, IconError> {
    validate_image_signature(bytes)?;

    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {}
        Ok(other) => {
            return Err(IconError::InvalidFormat(format!("expected PNG, found {:?}", other)));
        }
        Err(e) => return Err(IconError::InvalidFormat(e.to_string())),
    }

    if bytes.len() < IHDR_MIN_LEN {
        return Err(IconError::InvalidFormat(format!(
            "PNG header truncated at {} bytes",
            bytes.len()
        )));
    }

    let chunk = &bytes[IHDR_OFFSET..IHDR_MIN_LEN];
    if &chunk[4..8] != b"IHDR" {
        return Err(IconError::InvalidFormat("first chunk is not IHDR".to_string()));
    }

    let width = u32::from_be_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]);
    let height = u32::from_be_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

    Ok(PngInfo { width, height })
}
