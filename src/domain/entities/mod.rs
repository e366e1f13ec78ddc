pub mod project;
pub mod token;
