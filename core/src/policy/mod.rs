pub mod fusion;
pub mod types;
