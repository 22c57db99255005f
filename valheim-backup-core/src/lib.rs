pub mod errors;
pub mod models;
pub mod repo;
pub mod status;
pub mod sync;
pub mod validate;

pub use errors::*;
pub use models::*;
pub use repo::*;
pub use status::*;
pub use sync::*;
pub use validate::*;
