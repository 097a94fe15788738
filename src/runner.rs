//! The interactive terminal shell: terminal setup, the event loop and the
//! per-mode key handlers.

pub mod event_loop_main;
pub mod handlers;
pub mod terminal;

pub use event_loop_main::run_app;
