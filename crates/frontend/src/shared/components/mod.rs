pub mod pagination_controls;
pub mod price_tag;
pub mod ui;
