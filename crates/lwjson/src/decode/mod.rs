pub mod chunker;
pub mod parser;
