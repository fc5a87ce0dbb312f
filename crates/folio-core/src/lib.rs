//! Behavior rules for the portfolio page.
//!
//! Everything here is free of DOM access so the same decisions can be
//! exercised on the host; `folio_web` binds them to browser events.

pub mod anchor;
pub mod clipboard;
pub mod config;
pub mod contact;
pub mod filter;
pub mod guard;
pub mod menu;
pub mod theme;
pub mod tilt;
pub mod toast;
pub mod trail;
pub mod year;

pub use config::SiteConfig;
