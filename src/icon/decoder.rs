//! # 解码模块
//!
//! ## 设计思路
//!
//! 内嵌文本按固定宽度折行，中间还夹带零散空格，因此先剔除全部空白，
//! 再按标准 Base64（RFC 4648，带填充）严格解码。
//!
//! ## 实现思路
//!
//! - 解码前按长度估算解码体积上限，超限直接拒绝，不分配缓冲区。
//! - 非法字符、长度或填充错误统一映射为 `IconError::Decode`。

use base64::{Engine as _, engine::general_purpose};

use crate::error::IconError;

/// 剔除所有空白字符（换行、空格、制表符）。
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn estimate_decoded_upper_bound_len(base64_data: &str) -> Result<u64, IconError> {
    let len = base64_data.len() as u64;
    let groups = len
        .checked_add(3)
        .ok_or_else(|| IconError::ResourceLimit("base64 input length overflow".to_string()))?
        / 4;

    groups
        .checked_mul(3)
        .ok_or_else(|| IconError::ResourceLimit("decoded size estimate overflow".to_string()))
}

/// 将内嵌 Base64 文本解码为字节序列。
///
/// # 示例
/// ```rust
/// use create_app_icon::icon::decode_payload;
///
/// let bytes = decode_payload("iVBO\nRw0K\n", u64::MAX)?;
/// assert_eq!(&bytes[..4], b"\x89PNG");
/// # Ok::<(), create_app_icon::error::IconError>(())
/// ```
pub fn decode_payload(text: &str, max_decoded_bytes: u64) -> Result<Vec<u8>, IconError> {
    let normalized = strip_whitespace(text);

    let estimated_len = estimate_decoded_upper_bound_len(&normalized)?;
    if estimated_len > max_decoded_bytes {
        return Err(IconError::ResourceLimit(format!(
            "estimated decoded size {:.2} KB exceeds limit {:.2} KB",
            estimated_len as f64 / 1024.0,
            max_decoded_bytes as f64 / 1024.0
        )));
    }

    let bytes = general_purpose::STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| IconError::Decode(e.to_string()))?;

    log::debug!(
        "📝 Base64 解码完成 - 输入 {} 字符（去空白后 {}），输出 {} bytes",
        text.len(),
        normalized.len(),
        bytes.len()
    );

    Ok(bytes)
}
