pub mod actors;
pub mod color;
pub mod compose;
pub mod frame;
pub mod layout;
pub mod variant;
