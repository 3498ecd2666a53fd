//! System-level modules
//!
//! Process-wide concerns that sit below the runtime: logging setup.

pub mod logging;
