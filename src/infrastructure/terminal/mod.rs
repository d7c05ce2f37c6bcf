//! Terminal - 终端界面与提示

mod notifier;
mod ui;

pub use notifier::TerminalNotifier;
pub use ui::{progress_line, TerminalUi};
