pub mod classifier;
pub mod config;
pub mod eval;
pub mod policy;
pub mod redflags;
pub mod scoring;
pub mod text;
pub mod validator;

pub mod error;
