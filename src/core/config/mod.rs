pub mod data;
pub mod io;
pub mod printing;

pub use data::{expand_home, path_display, Config, ROOT_SCOPE};
pub use io::ConfigError;
