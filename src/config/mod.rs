//! Settings file loading and merging with the command line.
mod apply;
mod loader;
pub mod types;


pub use apply::{Credentials, Settings, resolve_settings};
pub use loader::{DEFAULT_CONFIG_FILES, load_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
