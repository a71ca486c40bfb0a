//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod token;
mod validation;
mod value;

pub use request::{Credentials, DeliveryRequest};
pub use response::DeliveryResponse;
pub use token::{AuthTokens, TokenState};
pub use validation::ValidationError;
pub use value::{
    AccessToken, ActivityCode, ClientId, EventDate, IncidentId, Password, PhoneNumber,
    RefreshToken, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_request_exposes_validated_parts() {
        let request = DeliveryRequest::new(
            PhoneNumber::parse("4155551234").unwrap(),
            IncidentId::new("77"),
            ActivityCode::new("DISPATCHED"),
            EventDate::from_unix(1_700_000_000).unwrap(),
        );

        assert_eq!(request.phone_number().as_str(), "4155551234");
        assert_eq!(request.incident_id().as_str(), "77");
        assert_eq!(request.activity_code().as_str(), "DISPATCHED");
        assert_eq!(request.event_date().to_form_value(), "2023-11-14");
    }

    #[test]
    fn phone_number_rejection_carries_input() {
        assert!(matches!(
            PhoneNumber::parse("5555555555"),
            Err(ValidationError::InvalidPhoneNumber { input }) if input == "5555555555"
        ));
    }
}
