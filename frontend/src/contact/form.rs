use std::collections::BTreeSet;
use thiserror::Error;
use crate::contact::validation::{
    validate_field, validate_form, Field, FieldErrors, FormData, ServiceType, ValidationError,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("{0} field(s) failed validation")]
    Invalid(usize),
}

/// Validated payload handed to the submission client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: ServiceType,
    pub message: String,
}

/// One contact-form session: values, touched flags, errors and submit status.
///
/// Every method recomputes what it changes explicitly; nothing re-validates in
/// the background. Errors are kept for every field so submit can be blocked,
/// but [`ContactFormState::visible_error`] only reports touched fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    data: FormData,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            errors: validate_form(&FormData::default()).errors,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.errors.get(&field).copied()
        } else {
            None
        }
    }

    /// Touched, error free and non-blank.
    pub fn is_field_valid(&self, field: Field) -> bool {
        self.is_touched(field)
            && !self.errors.contains_key(&field)
            && !self.value(field).trim().is_empty()
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, self.data.get(field)) {
            Some(err) => self.errors.insert(field, err),
            None => self.errors.remove(&field),
        };
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.revalidate(field);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// idle/error -> submitting. Marks every field touched first, so a blocked
    /// submit leaves all errors visible.
    pub fn begin_submit(&mut self) -> Result<ValidatedContact, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::AlreadySubmitting);
        }

        self.touched.extend(Field::ALL);
        let validation = validate_form(&self.data);
        self.errors = validation.errors;
        if !validation.is_valid {
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        }

        let service_type = ServiceType::from_value(self.data.service_type.trim())
            .ok_or(SubmitBlocked::Invalid(1))?;

        self.status = SubmissionStatus::Submitting;
        Ok(ValidatedContact {
            name: self.data.name.trim().to_string(),
            phone: self.data.phone.trim().to_string(),
            email: self.data.email.trim().to_string(),
            service_type,
            message: self.data.message.trim().to_string(),
        })
    }

    /// submitting -> success (form cleared) or error (form kept for retry).
    /// Ignored in any other state.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if !self.is_submitting() {
            return;
        }

        if succeeded {
            self.data = FormData::default();
            self.touched.clear();
            self.errors.clear();
            self.status = SubmissionStatus::Success;
        } else {
            self.status = SubmissionStatus::Error;
        }
    }

    /// success -> idle once the confirmation has been shown long enough.
    pub fn acknowledge_success(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_value(Field::Name, "John Doe".to_string());
        state.set_value(Field::Phone, "+421 123 456 789".to_string());
        state.set_value(Field::Email, "test@example.com".to_string());
        state.set_value(Field::ServiceType, "emergency".to_string());
        state.set_value(Field::Message, "  Blown tire on the trailer  ".to_string());
        state
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut state = ContactFormState::new();
        state.set_value(Field::Name, "J".to_string());
        assert_eq!(state.visible_error(Field::Name), None);

        state.touch(Field::Name);
        assert_eq!(state.visible_error(Field::Name), Some(ValidationError::TooShort { min: 2 }));

        state.set_value(Field::Name, "Jo".to_string());
        assert_eq!(state.visible_error(Field::Name), None);
        assert!(state.is_field_valid(Field::Name));
    }

    #[test]
    fn invalid_submit_stays_idle_and_reveals_errors() {
        let mut state = ContactFormState::new();
        state.set_value(Field::Name, "John Doe".to_string());

        assert_eq!(state.begin_submit(), Err(SubmitBlocked::Invalid(4)));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        for field in Field::ALL {
            assert!(state.is_touched(field));
        }
        assert_eq!(state.visible_error(Field::Name), None);
        assert_eq!(state.visible_error(Field::Email), Some(ValidationError::Required));
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut state = filled();
        let contact = state.begin_submit().unwrap();
        assert_eq!(contact.service_type, ServiceType::Emergency);
        assert_eq!(contact.message, "Blown tire on the trailer");
        assert_eq!(state.status(), SubmissionStatus::Submitting);

        state.finish_submit(true);
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert_eq!(state.data(), &FormData::default());
        assert!(state.errors.is_empty());
        for field in Field::ALL {
            assert!(!state.is_touched(field));
            assert_eq!(state.visible_error(field), None);
        }

        state.acknowledge_success();
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn failed_submission_keeps_data_for_retry() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish_submit(false);
        assert_eq!(state.status(), SubmissionStatus::Error);
        assert_eq!(state.value(Field::Name), "John Doe");

        assert!(state.begin_submit().is_ok());
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut state = filled();
        state.finish_submit(true);
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.value(Field::Name), "John Doe");

        state.acknowledge_success();
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }
}
