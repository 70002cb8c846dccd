use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::i18n::{fill, Dictionary, ServiceTypeText};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 500;

// Letters, Latin-1 Supplement and Latin Extended-A, and whitespace
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s\x{00C0}-\x{017F}]+$").expect("valid name pattern"));
static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("valid separator pattern"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("valid phone pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    ServiceType,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::ServiceType,
        Field::Message,
    ];

    /// The HTML `name`/`id` attribute of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::ServiceType => "serviceType",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Mobile,
    Emergency,
    Consultation,
    Purchase,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Mobile,
        ServiceType::Emergency,
        ServiceType::Consultation,
        ServiceType::Purchase,
        ServiceType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceType::Mobile => "mobile",
            ServiceType::Emergency => "emergency",
            ServiceType::Consultation => "consultation",
            ServiceType::Purchase => "purchase",
            ServiceType::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<ServiceType> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    pub fn label(self, text: &ServiceTypeText) -> &'static str {
        match self {
            ServiceType::Mobile => text.mobile,
            ServiceType::Emergency => text.emergency,
            ServiceType::Consultation => text.consultation,
            ServiceType::Purchase => text.purchase,
            ServiceType::Other => text.other,
        }
    }
}

/// Why a field failed. The wording comes from the locale dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidCharacters,
    InvalidFormat,
}

impl ValidationError {
    pub fn message(&self, field: Field, dict: &Dictionary) -> String {
        let text = &dict.validation;
        match (field, self) {
            (Field::Name, ValidationError::Required) => text.name_required.to_string(),
            (Field::Name, ValidationError::TooShort { min }) => fill(text.name_too_short, "min", *min),
            (Field::Name, ValidationError::TooLong { max }) => fill(text.name_too_long, "max", *max),
            (Field::Name, _) => text.name_invalid.to_string(),
            (Field::Phone, ValidationError::Required) => text.phone_required.to_string(),
            (Field::Phone, _) => text.phone_invalid.to_string(),
            (Field::Email, ValidationError::Required) => text.email_required.to_string(),
            (Field::Email, _) => text.email_invalid.to_string(),
            (Field::ServiceType, ValidationError::Required) => text.service_type_required.to_string(),
            (Field::ServiceType, _) => text.service_type_invalid.to_string(),
            (Field::Message, ValidationError::Required) => text.message_required.to_string(),
            (Field::Message, ValidationError::TooShort { min }) => fill(text.message_too_short, "min", *min),
            (Field::Message, ValidationError::TooLong { max }) => fill(text.message_too_long, "max", *max),
            (Field::Message, _) => text.message_required.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::ServiceType => &self.service_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::ServiceType => self.service_type = value,
            Field::Message => self.message = value,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, ValidationError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

fn check_length(len: usize, min: usize, max: usize) -> Option<ValidationError> {
    if len < min {
        Some(ValidationError::TooShort { min })
    } else if len > max {
        Some(ValidationError::TooLong { max })
    } else {
        None
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::Required);
    }

    match field {
        Field::Name => {
            check_length(trimmed.chars().count(), NAME_MIN_LENGTH, NAME_MAX_LENGTH).or_else(|| {
                (!NAME_PATTERN.is_match(trimmed)).then_some(ValidationError::InvalidCharacters)
            })
        }
        Field::Phone => {
            let digits = PHONE_SEPARATORS.replace_all(trimmed, "");
            (!PHONE_PATTERN.is_match(&digits)).then_some(ValidationError::InvalidFormat)
        }
        Field::Email => (!EMAIL_PATTERN.is_match(trimmed)).then_some(ValidationError::InvalidFormat),
        Field::ServiceType => ServiceType::from_value(trimmed)
            .is_none()
            .then_some(ValidationError::InvalidFormat),
        Field::Message => {
            check_length(trimmed.chars().count(), MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH)
        }
    }
}

pub fn validate_form(data: &FormData) -> FormValidation {
    let errors: FieldErrors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, data.get(field)).map(|err| (field, err)))
        .collect();

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, SK};
    use pretty_assertions::assert_eq;

    fn valid_data() -> FormData {
        FormData {
            name: "John Doe".to_string(),
            phone: "+421 123 456 789".to_string(),
            email: "test@example.com".to_string(),
            service_type: "mobile".to_string(),
            message: "Flat tire on the D1 near Trnava".to_string(),
        }
    }

    #[test]
    fn blank_values_are_required_for_every_field() {
        for field in Field::ALL {
            assert_eq!(validate_field(field, ""), Some(ValidationError::Required));
            assert_eq!(validate_field(field, "   \t "), Some(ValidationError::Required));
        }
    }

    #[test]
    fn name_rules() {
        assert_eq!(validate_field(Field::Name, "J"), Some(ValidationError::TooShort { min: 2 }));
        assert_eq!(validate_field(Field::Name, "John Doe"), None);
        assert_eq!(validate_field(Field::Name, "Ján Šťastný"), None);
        assert_eq!(
            validate_field(Field::Name, &"a".repeat(101)),
            Some(ValidationError::TooLong { max: 100 })
        );
        assert_eq!(validate_field(Field::Name, &"a".repeat(100)), None);
        assert_eq!(validate_field(Field::Name, "John123"), Some(ValidationError::InvalidCharacters));
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate_field(Field::Phone, "123"), Some(ValidationError::InvalidFormat));
        assert_eq!(validate_field(Field::Phone, "+421 123 456 789"), None);
        assert_eq!(validate_field(Field::Phone, "00000000"), None);
        assert_eq!(validate_field(Field::Phone, "(0905) 123-456"), None);
        assert_eq!(validate_field(Field::Phone, "+1234567890123456"), Some(ValidationError::InvalidFormat));
        assert_eq!(validate_field(Field::Phone, "0905 12a 456"), Some(ValidationError::InvalidFormat));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_field(Field::Email, "invalid-email"), Some(ValidationError::InvalidFormat));
        assert_eq!(validate_field(Field::Email, "test@example"), Some(ValidationError::InvalidFormat));
        assert_eq!(validate_field(Field::Email, "te st@example.com"), Some(ValidationError::InvalidFormat));
        assert_eq!(validate_field(Field::Email, "test@example.com"), None);
    }

    #[test]
    fn service_type_must_be_a_known_option() {
        for service in ServiceType::ALL {
            assert_eq!(validate_field(Field::ServiceType, service.value()), None);
        }
        assert_eq!(validate_field(Field::ServiceType, "towing"), Some(ValidationError::InvalidFormat));
    }

    #[test]
    fn message_length_bounds() {
        assert_eq!(validate_field(Field::Message, &"x".repeat(9)), Some(ValidationError::TooShort { min: 10 }));
        assert_eq!(validate_field(Field::Message, &"x".repeat(10)), None);
        assert_eq!(validate_field(Field::Message, &"x".repeat(500)), None);
        assert_eq!(validate_field(Field::Message, &"x".repeat(501)), Some(ValidationError::TooLong { max: 500 }));
    }

    #[test]
    fn validate_form_passes_only_when_every_field_passes() {
        let validation = validate_form(&valid_data());
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());

        let mut data = valid_data();
        data.email = "nope".to_string();
        data.message = "short".to_string();
        let validation = validate_form(&data);
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors.into_iter().collect::<Vec<_>>(),
            vec![
                (Field::Email, ValidationError::InvalidFormat),
                (Field::Message, ValidationError::TooShort { min: 10 }),
            ]
        );
    }

    #[test]
    fn validate_form_on_empty_data_reports_all_fields() {
        let validation = validate_form(&FormData::default());
        assert_eq!(validation.errors.len(), Field::ALL.len());
        assert!(validation.errors.values().all(|e| *e == ValidationError::Required));
    }

    #[test]
    fn messages_come_from_the_dictionary() {
        let err = ValidationError::TooShort { min: 10 };
        assert_eq!(err.message(Field::Message, &EN), "Message must be at least 10 characters");
        assert_eq!(err.message(Field::Message, &SK), "Správa musí mať aspoň 10 znakov");
        assert_eq!(ValidationError::Required.message(Field::ServiceType, &EN), "Please select a service type");
    }
}
