//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 图标生成链路中的所有失败都收敛到 `IconError`，
//! 调用侧可以按分支匹配，也可以直接 `to_string()` 打印给使用者。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 每个分支携带已经格式化好的上下文说明，避免调用点重复拼接。

/// 图标生成统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 内嵌文本不是合法的 Base64
    #[error("Base64 decode failed: {0}")]
    Decode(String),

    /// 目标路径不可写（权限不足、目录不存在、磁盘已满等）
    #[error("Failed to write icon file: {0}")]
    Write(String),

    /// 解码结果不是可识别的 PNG
    #[error("Invalid image format: {0}")]
    InvalidFormat(String),

    /// 预计解码体积超出限制
    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),

    /// 配置文件无法读取或解析
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<IconError> for String {
    fn from(error: IconError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_the_failure_class_prefix() {
        let decode = IconError::Decode("Invalid symbol 33, offset 4.".to_string());
        let write = IconError::Write("app_icon.png: Permission denied".to_string());

        assert_eq!(decode.to_string(), "Base64 decode failed: Invalid symbol 33, offset 4.");
        assert_eq!(String::from(write), "Failed to write icon file: app_icon.png: Permission denied");
    }
}
