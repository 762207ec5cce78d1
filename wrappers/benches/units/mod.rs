pub mod ordered_map;
pub mod ordered_set;
