//! Command Handlers 实现

mod clipboard_handlers;
mod export_handlers;
mod progress_poller;
mod submit_handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use clipboard_handlers::*;
pub use export_handlers::*;
pub use progress_poller::*;
pub use submit_handlers::*;
