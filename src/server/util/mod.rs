pub mod extract;
pub mod name;
