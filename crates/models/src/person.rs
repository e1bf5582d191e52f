use serde::{Deserialize, Serialize};

/// A person record as stored and exchanged over HTTP.
///
/// `date_of_birth` keeps the client's original string so a stored record
/// serializes back exactly as it was submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email_address: String,
    pub social_security_number: String,
}

/// Mutable part of a record: everything but the SSN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email_address: String,
}

impl Person {
    pub fn ssn(&self) -> &str {
        &self.social_security_number
    }

    /// Split into identifier and updatable fields.
    pub fn into_parts(self) -> (String, PersonFields) {
        let fields = PersonFields {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            email_address: self.email_address,
        };
        (self.social_security_number, fields)
    }

    pub fn apply(&mut self, fields: PersonFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.date_of_birth = fields.date_of_birth;
        self.email_address = fields.email_address;
    }

    /// Record used when the store is configured to start pre-seeded.
    pub fn sample() -> Self {
        Self {
            first_name: "John".into(),
            last_name: "Smith".into(),
            date_of_birth: "1985-06-15".into(),
            email_address: "john.smith@example.com".into(),
            social_security_number: "111223333".into(),
        }
    }
}

/// Last four digits only; full SSNs never go to the logs.
pub fn ssn_tail(ssn: &str) -> &str {
    let start = ssn.char_indices().rev().nth(3).map_or(0, |(i, _)| i);
    &ssn[start..]
}
