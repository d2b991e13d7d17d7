pub mod item;
pub mod state;

pub use item::{Checkbox, ItemKind, ListSelector, MenuItem};
pub use state::{CustomHeader, Menu, MenuFlags, MenuOptions, Outcome};
