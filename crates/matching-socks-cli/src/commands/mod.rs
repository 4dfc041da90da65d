pub mod app;
pub mod color;
pub mod friends;
pub mod group;
pub mod palette;
pub mod share;
pub mod streak;
