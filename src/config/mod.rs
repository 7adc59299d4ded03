mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, ServiceConfig, resolve_config,
};
