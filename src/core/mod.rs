pub mod audio;
pub mod host;
pub mod input;
pub mod space;
