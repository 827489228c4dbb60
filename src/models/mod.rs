pub mod product;
pub mod student;
