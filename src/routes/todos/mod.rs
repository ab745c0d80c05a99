pub mod dto;
pub mod model;
pub mod queries;
pub mod routes;

pub use dto::TodoView;
pub use model::Todo;
