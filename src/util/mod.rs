pub mod ordered_float;

pub use ordered_float::OrderedFloat;
