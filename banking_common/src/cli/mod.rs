//! Building blocks shared by CLI front ends

pub mod command;
pub mod console;
pub mod constants;
pub mod helpers;

pub use command::Command;
pub use console::Console;
