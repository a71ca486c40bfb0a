use crate::domain::{
    ActivityCode, DeliveryRequest, DeliveryResponse, EventDate, IncidentId, PhoneNumber,
};

use super::TransportError;

pub const DELIVER_PATH: &str = "sms/message/deliver";

pub fn encode_deliver_form(request: &DeliveryRequest) -> Vec<(String, String)> {
    vec![
        (
            PhoneNumber::FIELD.to_owned(),
            request.phone_number().as_str().to_owned(),
        ),
        (
            IncidentId::FIELD.to_owned(),
            request.incident_id().as_str().to_owned(),
        ),
        (
            ActivityCode::FIELD.to_owned(),
            request.activity_code().as_str().to_owned(),
        ),
        (
            EventDate::FIELD.to_owned(),
            request.event_date().to_form_value(),
        ),
    ]
}

pub fn decode_deliver_json_response(json: &str) -> Result<DeliveryResponse, TransportError> {
    Ok(DeliveryResponse::new(serde_json::from_str(json)?))
}
