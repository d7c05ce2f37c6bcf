//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod clipboard;
pub mod storage;
pub mod transcription;

pub use clipboard::*;
pub use storage::*;
pub use transcription::*;
