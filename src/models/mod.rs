// Data models (structs)
pub mod entry;
pub mod log_file;
pub mod settings;
pub mod sweep;

pub use entry::*;
pub use log_file::*;
pub use settings::*;
pub use sweep::*;
