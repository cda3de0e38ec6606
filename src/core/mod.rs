//! Core routing, configuration and backend plumbing

pub mod assistant;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod routing;

pub use routing::*;
