//! # 写盘模块
//!
//! 创建（或覆盖）目标文件并一次性写入全部字节。
//! 父目录不存在时不自动创建，直接按写入失败处理。

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::IconError;

/// 将字节写入目标路径，返回写入的字节数。
///
/// 文件句柄只在本函数内存活，成功或失败返回时都会关闭。
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<usize, IconError> {
    log::info!("💾 写入图标文件 - 路径: {}", path.display());

    let mut file = File::create(path)
        .map_err(|e| IconError::Write(format!("{}: {}", path.display(), e)))?;

    file.write_all(bytes)
        .map_err(|e| IconError::Write(format!("{}: {}", path.display(), e)))?;
    file.sync_all()
        .map_err(|e| IconError::Write(format!("{}: {}", path.display(), e)))?;

    log::debug!("✅ 写入完成 - {} bytes", bytes.len());

    Ok(bytes.len())
}
