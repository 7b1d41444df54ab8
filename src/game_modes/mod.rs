mod catalog;
mod theme;

pub use catalog::*;
pub use theme::*;
