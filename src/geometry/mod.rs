pub mod path;
pub mod shapes;

pub use path::{Path, SubPath};
