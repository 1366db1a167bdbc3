//! Validation of untrusted form submissions.
//!
//! Bodies arrive as raw JSON objects. Each known field is pulled out on its
//! own, so a field of the wrong JSON type is reported against that field and
//! the rest of the body is still checked. Required fields are all `Option`,
//! so a missing field is reported as a rule violation next to every other
//! violation instead of aborting. Every violation of one submission is folded
//! into a single message:
//!
//! ```text
//! Validation error: At least one guest is required at "guests"; Invalid email address at "email"
//! ```

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError as RuleError, ValidationErrors};

use crate::booking::ValidatedBooking;
use crate::contact::ValidatedContact;

const DATE_FORMAT: &str = "%Y-%m-%d";
const INVALID_EMAIL: &str = "Invalid email address";

/// A rejected submission, with a message fit to show the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_issues(mut issues: Vec<Issue>) -> Self {
        issues.sort();
        issues.dedup();
        let summary = issues
            .iter()
            .map(|issue| format!("{} at \"{}\"", issue.message, issue.field))
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(format!("Validation error: {}", summary))
    }
}

/// Extra booking rules that can be switched on by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingRules {
    /// Require `YYYY-MM-DD` dates with the end on or after the start.
    pub enforce_date_order: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Issue {
    field: String,
    message: String,
}

/// The fields of one submitted JSON object, taken out one at a time.
struct Fields {
    map: Map<String, Value>,
    mistyped: Vec<Issue>,
}

impl Fields {
    fn from_body(input: Value) -> Result<Self, ValidationError> {
        match input {
            Value::Object(map) => Ok(Self { map, mistyped: Vec::new() }),
            other => Err(ValidationError::new(format!(
                "Validation error: Expected object, received {}",
                json_kind(&other)
            ))),
        }
    }

    fn string(&mut self, field: &str) -> Option<String> {
        self.take(field, "string")
    }

    fn integer(&mut self, field: &str) -> Option<i64> {
        self.take(field, "integer")
    }

    fn object(&mut self, field: &str) -> Option<Map<String, Value>> {
        self.take(field, "object")
    }

    // Absent and `null` both read as missing.
    fn take<T: DeserializeOwned>(&mut self, field: &str, expected: &str) -> Option<T> {
        let value = self.map.remove(field)?;
        if value.is_null() {
            return None;
        }
        let received = json_kind(&value);
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.mistyped.push(Issue {
                    field: field.to_string(),
                    message: format!("Expected {}, received {}", expected, received),
                });
                None
            }
        }
    }

    /// Type mismatches plus rule violations. A mistyped field reads as
    /// missing to the rules, so its `required` violation is dropped.
    fn into_issues(self, outcome: Result<(), ValidationErrors>) -> Vec<Issue> {
        let mut issues = self.mistyped;
        if let Err(errors) = outcome {
            let rule_issues: Vec<Issue> = collect_issues(&errors)
                .into_iter()
                .filter(|issue| !issues.iter().any(|typed| typed.field == issue.field))
                .collect();
            issues.extend(rule_issues);
        }
        issues
    }
}

#[derive(Debug, Validate)]
struct BookingSubmission {
    #[validate(
        required(message = "Service type is required"),
        length(min = 1, message = "Service type is required")
    )]
    service_type: Option<String>,
    service_id: Option<i64>,
    #[validate(
        required(message = "Start date is required"),
        length(min = 1, message = "Start date is required")
    )]
    start_date: Option<String>,
    #[validate(
        required(message = "End date is required"),
        length(min = 1, message = "End date is required")
    )]
    end_date: Option<String>,
    #[validate(
        required(message = "Departure location is required"),
        length(min = 1, message = "Departure location is required")
    )]
    departure_location: Option<String>,
    #[validate(
        required(message = "Destination is required"),
        length(min = 1, message = "Destination is required")
    )]
    destination: Option<String>,
    destination_id: Option<i64>,
    #[validate(
        required(message = "At least one guest is required"),
        range(min = 1, message = "At least one guest is required")
    )]
    guests: Option<i64>,
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email address"),
        custom(function = "dotted_domain")
    )]
    email: Option<String>,
    #[validate(
        required(message = "Phone number is required"),
        length(min = 1, message = "Phone number is required")
    )]
    phone: Option<String>,
    special_requests: Option<String>,
    additional_services: Option<Map<String, Value>>,
    #[validate(required(message = "Estimated price is required"))]
    estimated_price: Option<i64>,
}

#[derive(Debug, Validate)]
struct ContactSubmission {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email address"),
        custom(function = "dotted_domain")
    )]
    email: Option<String>,
    #[validate(
        required(message = "Subject is required"),
        length(min = 1, message = "Subject is required")
    )]
    subject: Option<String>,
    #[validate(
        required(message = "Message is required"),
        length(min = 1, message = "Message is required")
    )]
    message: Option<String>,
}

/// Validates a booking form submission with the default rules.
pub fn validate_booking_submission(input: Value) -> Result<ValidatedBooking, ValidationError> {
    validate_booking_submission_with(input, &BookingRules::default())
}

pub fn validate_booking_submission_with(
    input: Value,
    rules: &BookingRules,
) -> Result<ValidatedBooking, ValidationError> {
    let mut fields = Fields::from_body(input)?;
    let submission = BookingSubmission {
        service_type: fields.string("serviceType"),
        service_id: fields.integer("serviceId"),
        start_date: fields.string("startDate"),
        end_date: fields.string("endDate"),
        departure_location: fields.string("departureLocation"),
        destination: fields.string("destination"),
        destination_id: fields.integer("destinationId"),
        guests: fields.integer("guests"),
        name: fields.string("name"),
        email: fields.string("email"),
        phone: fields.string("phone"),
        special_requests: fields.string("specialRequests"),
        additional_services: fields.object("additionalServices"),
        estimated_price: fields.integer("estimatedPrice"),
    };

    let mut issues = fields.into_issues(submission.validate());

    if rules.enforce_date_order {
        issues.extend(date_order_issues(
            submission.start_date.as_deref(),
            submission.end_date.as_deref(),
        ));
    }

    if !issues.is_empty() {
        return Err(ValidationError::from_issues(issues));
    }

    Ok(ValidatedBooking {
        service_type: required(submission.service_type, "serviceType")?,
        service_id: submission.service_id,
        start_date: required(submission.start_date, "startDate")?,
        end_date: required(submission.end_date, "endDate")?,
        departure_location: required(submission.departure_location, "departureLocation")?,
        destination: required(submission.destination, "destination")?,
        destination_id: submission.destination_id,
        guests: required(submission.guests, "guests")?,
        name: required(submission.name, "name")?,
        email: required(submission.email, "email")?,
        phone: required(submission.phone, "phone")?,
        special_requests: submission.special_requests,
        additional_services: submission.additional_services,
        estimated_price: required(submission.estimated_price, "estimatedPrice")?,
    })
}

/// Validates a contact form submission.
pub fn validate_contact_submission(input: Value) -> Result<ValidatedContact, ValidationError> {
    let mut fields = Fields::from_body(input)?;
    let submission = ContactSubmission {
        name: fields.string("name"),
        email: fields.string("email"),
        subject: fields.string("subject"),
        message: fields.string("message"),
    };

    let issues = fields.into_issues(submission.validate());
    if !issues.is_empty() {
        return Err(ValidationError::from_issues(issues));
    }

    Ok(ValidatedContact {
        name: required(submission.name, "name")?,
        email: required(submission.email, "email")?,
        subject: required(submission.subject, "subject")?,
        message: required(submission.message, "message")?,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| {
        ValidationError::from_issues(vec![Issue {
            field: field.to_string(),
            message: "Required".to_string(),
        }])
    })
}

/// The `email` rule accepts bare hosts like `a@b`; the site wants a dotted domain.
fn dotted_domain(email: &str) -> Result<(), RuleError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.contains('.') => {
            let mut err = RuleError::new("email");
            err.message = Some(Cow::Borrowed(INVALID_EMAIL));
            Err(err)
        }
        // No `@` at all is left to the `email` rule.
        _ => Ok(()),
    }
}

fn collect_issues(errors: &ValidationErrors) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = wire_name(&field);
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            issues.push(Issue { field: field.to_string(), message });
        }
    }
    issues
}

/// Submission struct field to JSON key, for fields whose names differ.
fn wire_name(field: &str) -> &str {
    match field {
        "service_type" => "serviceType",
        "start_date" => "startDate",
        "end_date" => "endDate",
        "departure_location" => "departureLocation",
        "estimated_price" => "estimatedPrice",
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn date_order_issues(start: Option<&str>, end: Option<&str>) -> Vec<Issue> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };
    if start.is_empty() || end.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();
    let parsed_start = NaiveDate::parse_from_str(start, DATE_FORMAT);
    let parsed_end = NaiveDate::parse_from_str(end, DATE_FORMAT);

    if parsed_start.is_err() {
        issues.push(Issue {
            field: "startDate".to_string(),
            message: "Start date must be a YYYY-MM-DD date".to_string(),
        });
    }
    if parsed_end.is_err() {
        issues.push(Issue {
            field: "endDate".to_string(),
            message: "End date must be a YYYY-MM-DD date".to_string(),
        });
    }
    if let (Ok(start), Ok(end)) = (parsed_start, parsed_end) {
        if end < start {
            issues.push(Issue {
                field: "endDate".to_string(),
                message: "End date must be on or after the start date".to_string(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking_body() -> Value {
        json!({
            "serviceType": "jet",
            "startDate": "2025-06-01",
            "endDate": "2025-06-03",
            "departureLocation": "New York",
            "destination": "Monaco",
            "guests": 4,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+15551234567",
            "estimatedPrice": 5000
        })
    }

    fn contact_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Charter question",
            "message": "Do your yachts sail to Sardinia?"
        })
    }

    #[test]
    fn test_valid_booking() {
        let booking = validate_booking_submission(booking_body()).unwrap();
        assert_eq!(booking.service_type, "jet");
        assert_eq!(booking.guests, 4);
        assert_eq!(booking.estimated_price, 5000);
        assert_eq!(booking.special_requests, None);
        assert_eq!(booking.additional_services, None);
    }

    #[test]
    fn test_booking_optional_fields_are_kept() {
        let mut body = booking_body();
        body["specialRequests"] = json!("Vegan catering");
        body["additionalServices"] = json!({"chauffeur": true});
        body["serviceId"] = json!(1);

        let booking = validate_booking_submission(body).unwrap();
        assert_eq!(booking.special_requests.as_deref(), Some("Vegan catering"));
        assert_eq!(booking.additional_services.unwrap()["chauffeur"], json!(true));
        assert_eq!(booking.service_id, Some(1));
    }

    #[test]
    fn test_zero_or_negative_guests_rejected() {
        for guests in [0, -3] {
            let mut body = booking_body();
            body["guests"] = json!(guests);
            let err = validate_booking_submission(body).unwrap_err();
            assert_eq!(
                err.message(),
                "Validation error: At least one guest is required at \"guests\""
            );
        }
    }

    #[test]
    fn test_booking_bad_email_rejected() {
        let mut body = booking_body();
        body["email"] = json!("jane.example.com");
        let err = validate_booking_submission(body).unwrap_err();
        assert!(err.message().contains("Invalid email address at \"email\""));
    }

    #[test]
    fn test_booking_summarizes_every_violation() {
        let mut body = booking_body();
        body["guests"] = json!(0);
        body["phone"] = json!("");
        body.as_object_mut().unwrap().remove("departureLocation");

        let err = validate_booking_submission(body).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation error: Departure location is required at \"departureLocation\"; \
             At least one guest is required at \"guests\"; \
             Phone number is required at \"phone\""
        );
    }

    #[test]
    fn test_booking_wrong_type_names_the_field() {
        let mut body = booking_body();
        body["guests"] = json!("four");
        let err = validate_booking_submission(body).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation error: Expected integer, received string at \"guests\""
        );
    }

    #[test]
    fn test_wrong_type_reported_with_other_violations() {
        let mut body = booking_body();
        body["estimatedPrice"] = json!(5000.5);
        body["phone"] = json!("");
        let err = validate_booking_submission(body).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation error: Expected integer, received number at \"estimatedPrice\"; \
             Phone number is required at \"phone\""
        );
    }

    #[test]
    fn test_null_reads_as_missing() {
        let mut body = contact_body();
        body["subject"] = Value::Null;
        let err = validate_contact_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Subject is required at \"subject\"");
    }

    #[test]
    fn test_email_needs_dotted_domain() {
        let mut body = contact_body();
        body["email"] = json!("a@b");
        let err = validate_contact_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Invalid email address at \"email\"");

        let mut body = contact_body();
        body["email"] = json!("jane@@localhost");
        let err = validate_contact_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Invalid email address at \"email\"");

        let mut body = booking_body();
        body["email"] = json!("jane@localhost");
        let err = validate_booking_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Invalid email address at \"email\"");
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert_eq!(
            validate_booking_submission(json!([1, 2, 3])).unwrap_err().message(),
            "Validation error: Expected object, received array"
        );
        assert_eq!(
            validate_contact_submission(json!("hello")).unwrap_err().message(),
            "Validation error: Expected object, received string"
        );
    }

    #[test]
    fn test_reversed_dates_accepted_by_default() {
        let mut body = booking_body();
        body["startDate"] = json!("2025-06-03");
        body["endDate"] = json!("2025-06-01");
        assert!(validate_booking_submission(body).is_ok());
    }

    #[test]
    fn test_date_order_rule() {
        let rules = BookingRules { enforce_date_order: true };

        assert!(validate_booking_submission_with(booking_body(), &rules).is_ok());

        let mut same_day = booking_body();
        same_day["endDate"] = json!("2025-06-01");
        assert!(validate_booking_submission_with(same_day, &rules).is_ok());

        let mut reversed = booking_body();
        reversed["startDate"] = json!("2025-06-03");
        reversed["endDate"] = json!("2025-06-01");
        let err = validate_booking_submission_with(reversed, &rules).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation error: End date must be on or after the start date at \"endDate\""
        );

        let mut garbled = booking_body();
        garbled["startDate"] = json!("next tuesday");
        let err = validate_booking_submission_with(garbled, &rules).unwrap_err();
        assert!(err.message().contains("at \"startDate\""));
    }

    #[test]
    fn test_valid_contact() {
        let contact = validate_contact_submission(contact_body()).unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.subject, "Charter question");
    }

    #[test]
    fn test_contact_missing_name_names_the_field() {
        let mut body = contact_body();
        body.as_object_mut().unwrap().remove("name");
        let err = validate_contact_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Name is required at \"name\"");
    }

    #[test]
    fn test_contact_bad_email_rejected() {
        let mut body = contact_body();
        body["email"] = json!("not-an-email");
        let err = validate_contact_submission(body).unwrap_err();
        assert_eq!(err.message(), "Validation error: Invalid email address at \"email\"");
    }

    #[test]
    fn test_issues_use_json_field_names() {
        let mut body = booking_body();
        body["serviceType"] = json!("");
        body["startDate"] = json!("");
        let err = validate_booking_submission(body).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation error: Service type is required at \"serviceType\"; \
             Start date is required at \"startDate\""
        );
    }
}
