pub mod model;
pub mod response;
