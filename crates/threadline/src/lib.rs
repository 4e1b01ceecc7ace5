pub mod compiler;
pub mod errors;
pub mod models;
pub mod providers;
