//! # 应用图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 + 读取配置        │
//! │     ↓                                        │
//! │  runner ── 提示 → 生成 → 文案 → 后续步骤       │
//! │     ├─ icon        解码·校验·写盘              │
//! │     ├─ report      面向使用者的控制台文案       │
//! │     └─ error       IconError (统一错误类型)    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `IconError` |
//! | [`icon`] | 内嵌 Base64 解码、PNG 校验、写入文件、配置 |
//! | [`report`] | 成功/失败/后续步骤文案 |
//! | [`runner`] | 顶层流程，消化所有错误 |

pub mod error;
pub mod icon;
pub mod report;
pub mod runner;

pub use runner::{IconOutcome, run};
