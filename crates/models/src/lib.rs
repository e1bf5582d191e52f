//! Person record and its validation rules.

pub mod errors;
pub mod person;
pub mod validation;

pub use errors::FieldError;
pub use person::{Person, PersonFields};
pub use validation::validate;
