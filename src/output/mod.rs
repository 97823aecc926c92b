pub mod overlay;
pub mod sink;
