pub mod registry;
pub mod schema;
pub mod stack;
