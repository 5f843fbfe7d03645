pub use self::errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod images;
pub mod products;
