use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use crate::config;
use crate::contact::form::ValidatedContact;
use crate::contact::validation::ServiceType;
use crate::i18n::Locale;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: ServiceType,
    pub message: String,
    pub locale: Locale,
}

impl ContactRequest {
    pub fn new(contact: ValidatedContact, locale: Locale) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
            service_type: contact.service_type,
            message: contact.message,
            locale,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the request with status {0}")]
    Rejected(u16),
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", config::get_backend_url())
}

pub async fn submit_contact(request: &ContactRequest) -> Result<(), SubmitError> {
    let response = Request::post(&contact_endpoint())
        .json(request)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        log!("Contact request accepted");
        Ok(())
    } else {
        log!(format!("Contact request failed with status: {}", response.status()));
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_uses_lowercase_enums() {
        let request = ContactRequest::new(
            ValidatedContact {
                name: "John Doe".to_string(),
                phone: "+421 123 456 789".to_string(),
                email: "test@example.com".to_string(),
                service_type: ServiceType::Purchase,
                message: "Need eight trailer tires".to_string(),
            },
            Locale::En,
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "John Doe",
                "phone": "+421 123 456 789",
                "email": "test@example.com",
                "service_type": "purchase",
                "message": "Need eight trailer tires",
                "locale": "en",
            })
        );
    }

    #[test]
    fn endpoint_targets_contact_route() {
        assert!(contact_endpoint().ends_with("/api/contact"));
    }
}
