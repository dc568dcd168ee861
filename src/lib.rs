pub mod error;
pub mod network;
pub mod svg;
pub mod theme;

pub use error::LayoutError;
