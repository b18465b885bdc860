pub mod listener;
pub mod reveal;
pub mod session_flags;
