//! Immediate-mode in-game list menu.
//!
//! The menu is redrawn from scratch every frame through a host-supplied
//! [`Host`](crate::core::host::Host): the host draws, reports control presses and runs the
//! frame loop, while [`app::MenuContext`] owns the single open menu, its focus
//! cursor and its rows.

pub mod app;
pub mod assets;
pub mod config;
pub mod core;
pub mod menu;
pub mod ui;

pub use app::{FrameRequest, MenuContext};
pub use config::Config;
pub use crate::core::host::Host;
pub use menu::{Checkbox, ListSelector, Menu, MenuItem, MenuOptions};
