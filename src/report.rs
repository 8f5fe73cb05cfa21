//! 控制台输出模块
//!
//! # 设计思路
//!
//! 面向使用者的文案与诊断日志分开：文案写到传入的 `Write`（通常是 stdout），
//! 日志走 `log` 门面。这样测试可以直接捕获输出内容。

use std::io::{self, Write};

use crate::error::IconError;
use crate::icon::{CreatedIcon, IconConfig};

/// 开始前的提示行。
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🎨 Creating Flutter app icon...")
}

/// 成功提示：路径、尺寸、格式。
pub fn print_success(out: &mut impl Write, created: &CreatedIcon, config: &IconConfig) -> io::Result<()> {
    let size = match created.info {
        Some(info) => info.to_string(),
        None => config.expected_dimensions(),
    };

    writeln!(out, "✅ Icon created successfully: {}", created.path.display())?;
    writeln!(out, "📏 Size: {} pixels", size)?;
    writeln!(out, "🎨 Format: PNG with transparency")
}

/// 失败提示 + 三条手工兜底步骤。
pub fn print_failure(out: &mut impl Write, error: &IconError, config: &IconConfig) -> io::Result<()> {
    writeln!(out, "❌ Error creating icon: {}", error)?;
    writeln!(out)?;
    writeln!(out, "📝 Manual steps:")?;
    writeln!(out, "1. Open {} in a browser", config.svg_fallback_path)?;
    writeln!(out, "2. Take a screenshot or use an online SVG to PNG converter")?;
    writeln!(
        out,
        "3. Save as {} ({} pixels)",
        config.png_fallback_path,
        config.expected_dimensions()
    )
}

/// 打包工具的后续操作提示，无论成败都会输出。
pub fn print_next_steps(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚀 Next steps:")?;
    writeln!(out, "1. Run: flutter pub run flutter_launcher_icons:main")?;
    writeln!(out, "2. Clean and rebuild: flutter clean && flutter pub get")
}
