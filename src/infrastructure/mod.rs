//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod memory;
pub mod terminal;

pub use memory::{InMemoryUiSurface, UiState};
pub use terminal::{TerminalNotifier, TerminalUi};
