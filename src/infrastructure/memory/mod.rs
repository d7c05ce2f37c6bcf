//! Memory Layer - In-Memory State Management
//!
//! 界面状态的内存实现

mod ui_state;

pub use ui_state::{InMemoryUiSurface, UiState};
