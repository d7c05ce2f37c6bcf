//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod clipboard;
mod notifier;
mod transcript_store;
mod transcription_api;
mod ui_surface;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use notifier::NotifierPort;
pub use transcript_store::{TranscriptStoreError, TranscriptStorePort};
pub use transcription_api::{JobApiError, TranscriptionApiPort, UploadForm};
pub use ui_surface::{UiElement, UiSurfacePort};
