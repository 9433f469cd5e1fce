mod swatch;

pub use swatch::swatch;
