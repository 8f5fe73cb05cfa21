//! # 应用图标生成工具 — 入口
//!
//! 无参数运行：在当前目录写出 `app_icon.png`。
//! 失败时打印手工兜底步骤，进程仍以 0 退出。

use std::io;
use std::path::Path;

use create_app_icon::icon::{CONFIG_FILE_NAME, ICON_BASE64, IconConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IconConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = create_app_icon::run(config, ICON_BASE64, &mut out);
    log::debug!("run finished: created={}", outcome.is_created());
}
