mod manager;

pub use manager::{
    API_KEY_ENV, ApiConfig, ConfigFile, ConfigManager, LucidConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};
