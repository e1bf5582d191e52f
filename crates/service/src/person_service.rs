use std::sync::Arc;

use models::{person::ssn_tail, validate, Person};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::repository::PersonRepository;

/// Person CRUD over the shared in-memory repository.
///
/// Every lookup-then-mutate sequence runs under a single write guard so the
/// SSN uniqueness and existence checks hold under concurrent requests.
#[derive(Debug)]
pub struct PersonService {
    repo: RwLock<PersonRepository>,
}

impl PersonService {
    pub fn new(repo: PersonRepository) -> Arc<Self> {
        Arc::new(Self { repo: RwLock::new(repo) })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(PersonRepository::new())
    }

    /// All records in insertion order; empty when nothing is stored.
    pub async fn list(&self) -> Vec<Person> {
        self.repo.read().await.list_all().to_vec()
    }

    pub async fn get(&self, ssn: &str) -> Result<Person, ServiceError> {
        self.repo
            .read()
            .await
            .find_by_ssn(ssn)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    /// Validate then append. Duplicate SSNs are rejected without touching the store.
    pub async fn create(&self, payload: &Value) -> Result<Person, ServiceError> {
        let person = validate(payload)?;
        let mut repo = self.repo.write().await;
        if repo.find_by_ssn(person.ssn()).is_some() {
            debug!(event = "person_create_duplicate", ssn_tail = ssn_tail(person.ssn()), "duplicate ssn");
            return Err(ServiceError::DuplicateSsn);
        }
        repo.insert(person.clone());
        info!(event = "person_created", ssn_tail = ssn_tail(person.ssn()), total = repo.len(), "person created");
        Ok(person)
    }

    /// Existence is checked before validation, and the SSN cannot change.
    pub async fn update(&self, ssn: &str, payload: &Value) -> Result<Person, ServiceError> {
        let mut repo = self.repo.write().await;
        if repo.find_by_ssn(ssn).is_none() {
            return Err(ServiceError::NotFound);
        }
        let candidate = validate(payload)?;
        if candidate.ssn() != ssn {
            debug!(event = "person_update_ssn_change", ssn_tail = ssn_tail(ssn), "ssn change rejected");
            return Err(ServiceError::SsnImmutable);
        }
        let (_, fields) = candidate.into_parts();
        let updated = repo
            .update_fields(ssn, fields)
            .cloned()
            .ok_or_else(|| ServiceError::internal("record vanished during update"))?;
        info!(event = "person_updated", ssn_tail = ssn_tail(ssn), "person updated");
        Ok(updated)
    }

    /// Remove and return the record as it was just before removal.
    pub async fn delete(&self, ssn: &str) -> Result<Person, ServiceError> {
        let mut repo = self.repo.write().await;
        let removed = repo.remove(ssn).ok_or(ServiceError::NotFound)?;
        info!(event = "person_deleted", ssn_tail = ssn_tail(ssn), total = repo.len(), "person deleted");
        Ok(removed)
    }

    pub async fn count(&self) -> usize {
        self.repo.read().await.len()
    }
}
