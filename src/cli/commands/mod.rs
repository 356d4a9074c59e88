pub mod clean;
mod command_result;
pub mod context;
pub mod extract;
pub mod init;
pub mod status;
pub mod sync;

pub use command_result::*;
