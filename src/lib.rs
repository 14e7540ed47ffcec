//! A terminal-themed personal portfolio.
//!
//! Visitors type commands at a simulated prompt; the program prints into a scrolling pane or
//! switches to a full-screen view built from three JSON documents loaded at startup.

pub mod app;
pub mod boot;
pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod history;
pub mod input;
pub mod loader;
pub mod output;
pub mod render;
pub mod session;
pub mod util;
pub mod view;

pub use app::App;
pub use config::Config;
pub use error::{FolioError, Result};
pub use session::Session;
pub use view::View;
