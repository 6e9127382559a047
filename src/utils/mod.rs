pub mod paths;
pub mod process;

pub use paths::*;
pub use process::*;
