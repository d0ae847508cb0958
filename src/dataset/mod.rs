pub mod parser;

pub use parser::parse_land;
