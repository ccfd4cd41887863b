pub mod browser;
pub mod components;
pub mod icons;
