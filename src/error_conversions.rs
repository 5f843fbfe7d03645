//! Error conversion glue between the layered error taxonomies.
//!
//! The domain layer must not depend on service/repository error types, so
//! the `From` impls bridging them live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}
