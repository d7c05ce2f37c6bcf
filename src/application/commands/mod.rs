//! 应用层 - 命令
//!
//! 上传、轮询、复制与导出

mod transcription_commands;

pub mod handlers;

pub use transcription_commands::*;
