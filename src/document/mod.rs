pub mod node;
pub mod parse;
pub mod write;
