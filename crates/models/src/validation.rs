//! Person payload validation.
//!
//! Rules are checked in declaration order and the first failure is reported.
//! Validation is pure: uniqueness of the SSN is the service layer's concern.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::FieldError;
use crate::person::Person;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const EMAIL_ADDRESS: &str = "emailAddress";
pub const SOCIAL_SECURITY_NUMBER: &str = "socialSecurityNumber";

static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]*$").expect("letters regex"));
static NINE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("ssn regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email regex")
});

/// One schema entry: a required string field, its predicate and the message
/// reported when a present value fails it.
struct Rule {
    field: &'static str,
    check: fn(&str) -> bool,
    message: &'static str,
}

const RULES: [Rule; 5] = [
    Rule { field: FIRST_NAME, check: is_letters, message: "firstName must only be letters." },
    Rule { field: LAST_NAME, check: is_letters, message: "lastName must only be letters." },
    Rule { field: DATE_OF_BIRTH, check: is_date, message: "\"dateOfBirth\" must be a valid date" },
    Rule { field: EMAIL_ADDRESS, check: is_email, message: "\"emailAddress\" must be a valid email" },
    Rule {
        field: SOCIAL_SECURITY_NUMBER,
        check: is_ssn,
        message: "socialSecurityNumber must be a number and have 9 digits.",
    },
];

fn is_letters(s: &str) -> bool {
    LETTERS.is_match(s)
}

fn is_ssn(s: &str) -> bool {
    NINE_DIGITS.is_match(s)
}

pub fn is_email(s: &str) -> bool {
    s.len() <= 254 && s.split('@').next().is_some_and(|local| local.len() <= 64) && EMAIL.is_match(s)
}

/// Accepts a calendar date, an RFC 3339 timestamp, or a naive `T`-separated datetime.
pub fn is_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn check_rule<'a>(obj: &'a Map<String, Value>, rule: &Rule) -> Result<&'a str, FieldError> {
    let value = match obj.get(rule.field) {
        None | Some(Value::Null) => return Err(FieldError::required(rule.field)),
        Some(v) => v,
    };
    let Some(s) = value.as_str() else {
        return Err(FieldError::new(rule.field, rule.message));
    };
    if !(rule.check)(s) {
        return Err(FieldError::new(rule.field, rule.message));
    }
    // only patterns that accept "" reach here with an empty value
    if s.is_empty() {
        return Err(FieldError::empty(rule.field));
    }
    Ok(s)
}

/// Validate an untyped payload and build the record it describes.
pub fn validate(payload: &Value) -> Result<Person, FieldError> {
    let obj = payload.as_object().ok_or_else(FieldError::not_an_object)?;

    let [first_name, last_name, date_of_birth, email_address, social_security_number] = &RULES;
    let person = Person {
        first_name: check_rule(obj, first_name)?.to_string(),
        last_name: check_rule(obj, last_name)?.to_string(),
        date_of_birth: check_rule(obj, date_of_birth)?.to_string(),
        email_address: check_rule(obj, email_address)?.to_string(),
        social_security_number: check_rule(obj, social_security_number)?.to_string(),
    };

    if let Some(unknown) = obj.keys().find(|k| !RULES.iter().any(|r| r.field == k.as_str())) {
        return Err(FieldError::not_allowed(unknown));
    }
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> Value {
        json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "dateOfBirth": "1990-01-01",
            "emailAddress": "jane@x.com",
            "socialSecurityNumber": "123456789"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut v = jane();
        v[field] = value;
        v
    }

    fn without(field: &str) -> Value {
        let mut v = jane();
        v.as_object_mut().expect("object").remove(field);
        v
    }

    fn message(payload: &Value) -> String {
        validate(payload).expect_err("should fail").message
    }

    #[test]
    fn valid_payload_builds_person() {
        let p = validate(&jane()).expect("valid");
        assert_eq!(p.first_name, "Jane");
        assert_eq!(p.social_security_number, "123456789");
        assert_eq!(serde_json::to_value(&p).expect("serialize"), jane());
    }

    #[test]
    fn names_must_be_letters() {
        assert_eq!(message(&with("firstName", json!("Jane2"))), "firstName must only be letters.");
        assert_eq!(message(&with("lastName", json!("O'Neil"))), "lastName must only be letters.");
        assert_eq!(message(&with("firstName", json!(42))), "firstName must only be letters.");
    }

    #[test]
    fn missing_fields_are_required() {
        for field in [FIRST_NAME, LAST_NAME, DATE_OF_BIRTH, EMAIL_ADDRESS, SOCIAL_SECURITY_NUMBER] {
            let err = validate(&without(field)).expect_err("missing");
            assert_eq!(err.field, field);
            assert_eq!(err.message, format!("\"{field}\" is required"));
        }
        assert_eq!(message(&with("lastName", Value::Null)), "\"lastName\" is required");
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert_eq!(message(&with("firstName", json!(""))), "\"firstName\" is not allowed to be empty");
        assert_eq!(message(&with("lastName", json!(""))), "\"lastName\" is not allowed to be empty");
        assert_eq!(message(&with("dateOfBirth", json!(""))), "\"dateOfBirth\" must be a valid date");
        assert_eq!(message(&with("emailAddress", json!(""))), "\"emailAddress\" must be a valid email");
    }

    #[test]
    fn first_failure_wins_in_schema_order() {
        let mut v = with("lastName", json!("D0e"));
        v["socialSecurityNumber"] = json!("12");
        v["firstName"] = json!("J4ne");
        let err = validate(&v).expect_err("invalid");
        assert_eq!(err.field, FIRST_NAME);
    }

    #[test]
    fn dates_must_parse() {
        assert!(validate(&with("dateOfBirth", json!("1990-01-01T10:30:00Z"))).is_ok());
        assert!(validate(&with("dateOfBirth", json!("1990-01-01T10:30:00"))).is_ok());
        assert_eq!(message(&with("dateOfBirth", json!("1990-13-01"))), "\"dateOfBirth\" must be a valid date");
        assert_eq!(message(&with("dateOfBirth", json!("yesterday"))), "\"dateOfBirth\" must be a valid date");
    }

    #[test]
    fn emails_must_be_well_formed() {
        assert!(validate(&with("emailAddress", json!("first.last+tag@sub.example.org"))).is_ok());
        for bad in ["jane", "jane@", "@x.com", "jane@x", "ja ne@x.com", "jane@@x.com", ".jane@x.com", "jane.@x.com", "ja..ne@x.com"] {
            assert_eq!(message(&with("emailAddress", json!(bad))), "\"emailAddress\" must be a valid email", "{bad}");
        }
    }

    #[test]
    fn ssn_must_be_nine_digits() {
        let msg = "socialSecurityNumber must be a number and have 9 digits.";
        for bad in [json!(""), json!("12345678"), json!("1234567890"), json!("12345678a"), json!(" 23456789"), json!(123456789)] {
            assert_eq!(message(&with("socialSecurityNumber", bad)), msg);
        }
    }

    #[test]
    fn unknown_keys_and_non_objects_are_rejected() {
        assert_eq!(message(&with("nickname", json!("JJ"))), "\"nickname\" is not allowed");
        assert_eq!(message(&json!([1, 2])), "\"value\" must be of type object");
        assert_eq!(message(&json!("Jane")), "\"value\" must be of type object");
    }
}
