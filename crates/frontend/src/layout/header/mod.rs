pub mod header;

pub use header::{NavBar, NAV_SECTIONS};
