mod filesystem;
mod loader;
mod merge;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::FileConfigLoader;
pub use merge::normalize_terms;
pub use model::{Config, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT, PartialConfig};
