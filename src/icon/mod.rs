//! # 图标生成模块（icon）
//!
//! ## 设计思路
//!
//! 按职责拆分“内嵌数据 → 解码 → 校验 → 写盘”，每个子模块只做一件事：
//!
//! - `payload`：内嵌的 Base64 文本常量
//! - `decoder`：去空白 + 严格 Base64 解码 + 体积上限
//! - `validate`：PNG 签名与 IHDR 尺寸（可选加固）
//! - `writer`：创建/覆盖目标文件并写入
//! - `handler`：编排整条流程 + 阶段耗时日志
//! - `config`：输出路径、尺寸预期与兜底文案路径
//!
//! ## 调用链
//!
//! ```text
//! runner::run
//!    ↓
//! handler.rs（IconGenerator::generate）
//!    ├─ decoder.rs
//!    ├─ validate.rs
//!    └─ writer.rs
//!    ↓
//! CreatedIcon / IconError
//! ```

mod config;
mod decoder;
mod handler;
mod payload;
mod validate;
mod writer;

pub use config::{CONFIG_FILE_NAME, IconConfig};
pub use decoder::decode_payload;
pub use handler::{CreatedIcon, IconGenerator};
pub use payload::{ICON_BASE64, ICON_DECODED_LEN};
pub use validate::{PngInfo, inspect_png};
pub use writer::write_icon;
