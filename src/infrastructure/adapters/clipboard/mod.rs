//! Clipboard Adapter - 系统剪贴板实现

mod command_clipboard;

pub use command_clipboard::CommandClipboard;
