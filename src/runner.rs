//! 顶层执行流程
//!
//! 打印提示 → 生成图标 → 成功/失败文案 → 后续步骤。
//! 所有错误都在这里被消化成 `IconOutcome::Failed`，不会向进程外传播。

use std::io::Write;

use crate::error::IconError;
use crate::icon::{CreatedIcon, IconConfig, IconGenerator};
use crate::report;

/// 单次执行的结果。
#[derive(Debug)]
pub enum IconOutcome {
    Created(CreatedIcon),
    Failed(IconError),
}

impl IconOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// 使用给定配置与内嵌文本执行一次完整流程，文案写入 `out`。
pub fn run(config: IconConfig, payload: &str, out: &mut impl Write) -> IconOutcome {
    if let Err(err) = report::print_banner(out) {
        log::warn!("输出提示失败: {err}");
    }

    let generator = IconGenerator::new(config);
    let outcome = match generator.generate(payload) {
        Ok(created) => {
            if let Err(err) = report::print_success(out, &created, generator.config()) {
                log::warn!("输出成功信息失败: {err}");
            }
            IconOutcome::Created(created)
        }
        Err(error) => {
            log::error!("图标生成失败: {error}");
            if let Err(err) = report::print_failure(out, &error, generator.config()) {
                log::warn!("输出失败信息失败: {err}");
            }
            IconOutcome::Failed(error)
        }
    };

    if let Err(err) = report::print_next_steps(out) {
        log::warn!("输出后续步骤失败: {err}");
    }

    outcome
}
