pub mod api;
pub mod products;
pub mod students;
