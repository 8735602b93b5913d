//! # Core Module
//!
//! Shared configuration for the scene composer and the headless application.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for engine, asset and scene settings

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    AssetConfig,
    SceneConfig,
};

pub use crate::config::{Config, ConfigError};
