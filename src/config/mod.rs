//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_MODEL, DEFAULT_PROVIDER, LingoConfig, ProviderConfig,
    ResolveOptions, ResolvedSettings, builtin_providers, resolve_settings,
};
