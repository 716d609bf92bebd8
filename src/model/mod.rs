pub mod rule;
pub mod translation;
