pub mod path_length;
pub mod shape;
