pub mod category_key;
pub mod sort_order;

pub use category_key::CategoryKey;
pub use sort_order::SortOrder;
