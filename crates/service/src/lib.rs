//! Service layer for the person store.
//! - `repository`: the in-memory, insertion-ordered collection.
//! - `person_service`: validated CRUD with atomic lookup-then-mutate.
//! - `errors`: failure taxonomy translated to HTTP by the server crate.

pub mod errors;
pub mod person_service;
pub mod repository;

pub use errors::ServiceError;
pub use person_service::PersonService;
pub use repository::PersonRepository;
