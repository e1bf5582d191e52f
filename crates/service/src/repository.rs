use models::{Person, PersonFields};

/// In-memory, insertion-ordered person collection.
///
/// Lookups are linear scans on the SSN. Callers check uniqueness and
/// existence before mutating; see [`crate::person_service::PersonService`].
#[derive(Debug, Default, Clone)]
pub struct PersonRepository {
    people: Vec<Person>,
}

impl PersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the single sample record.
    pub fn with_seed() -> Self {
        Self { people: vec![Person::sample()] }
    }

    pub fn find_by_ssn(&self, ssn: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.social_security_number == ssn)
    }

    pub fn list_all(&self) -> &[Person] {
        &self.people
    }

    /// Append without any uniqueness check.
    pub fn insert(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Overwrite everything but the SSN, keeping the record's position.
    pub fn update_fields(&mut self, ssn: &str, fields: PersonFields) -> Option<&Person> {
        let existing = self.people.iter_mut().find(|p| p.social_security_number == ssn)?;
        existing.apply(fields);
        Some(existing)
    }

    pub fn remove(&mut self, ssn: &str) -> Option<Person> {
        let idx = self.people.iter().position(|p| p.social_security_number == ssn)?;
        Some(self.people.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
