pub mod definitions;
pub mod encoding;
pub mod fetch;
pub mod help;
pub mod pipeline;
pub mod rules;
pub mod suggestions;
pub mod translate;
