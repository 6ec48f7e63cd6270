//! CS2 Mapping Tools
//!
//! A themeable launcher for Counter-Strike 2 level-design utilities. Ships the
//! point_worldtext dialog, which collects text, bitmap size and output location
//! and hands a validated request to the external text generator.

pub mod addons;
pub mod config;
pub mod error;
pub mod iced_app;
pub mod theme;
pub mod worldtext;

pub use error::{Error, Result};
pub use iced_app::{run_launcher, LaunchOptions};
