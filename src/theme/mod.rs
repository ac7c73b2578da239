//! Visual theme for the Chesed Machine.

mod styles;

pub use styles::GLOBAL_STYLES;
