//! Decode layer between the store's loosely-typed wire documents and the
//! typed records the rest of the application works with.
//!
//! Documents arrive as JSON maps with the document id attached by the
//! gateway as a distinct `id` field. Every field is checked here: a
//! snapshot either decodes completely into typed records or fails with a
//! named [`DecodeError`]. No unchecked map ever reaches the filter/sort
//! engine, so a missing `urgency` surfaces as a decode failure instead of
//! silently corrupting the sort order.

use crate::model::blood::{BloodGroup, RequestStatus, Urgency};
use crate::model::donor::Donor;
use crate::model::request::BloodRequest;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("snapshot payload is not a JSON array")]
    NotAnArray,
    #[error("record {id}: missing field `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("record {id}: field `{field}` has the wrong type")]
    WrongType { id: String, field: &'static str },
    #[error("record {id}: `{field}` value `{value}` is not recognised")]
    UnknownValue {
        id: String,
        field: &'static str,
        value: String,
    },
    #[error("record {id}: `createdAt` cannot be read as a timestamp")]
    BadTimestamp { id: String },
    #[error("snapshot payload is not valid JSON: {0}")]
    BadJson(String),
}

/// Decodes a full live-query payload (a JSON array of wire documents)
/// into blood requests. Fails on the first malformed record.
pub fn decode_request_snapshot(payload: &str) -> Result<Vec<BloodRequest>, DecodeError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| DecodeError::BadJson(e.to_string()))?;
    let items = value.as_array().ok_or(DecodeError::NotAnArray)?;
    items.iter().map(decode_request).collect()
}

/// Decodes a single wire document into a [`BloodRequest`].
pub fn decode_request(doc: &Value) -> Result<BloodRequest, DecodeError> {
    let id = doc_id(doc)?;
    Ok(BloodRequest {
        user_id: required_str(doc, &id, "userId")?,
        requester_name: optional_str(doc, &id, "requesterName")?,
        blood_group: blood_group(doc, &id)?,
        location: required_str(doc, &id, "location")?,
        contact: required_str(doc, &id, "contact")?,
        notes: optional_str(doc, &id, "notes")?,
        created_at: created_at(doc, &id)?,
        status: status(doc, &id)?,
        urgency: urgency(doc, &id)?,
        id,
    })
}

/// Decodes a single wire document into a [`Donor`].
pub fn decode_donor(doc: &Value) -> Result<Donor, DecodeError> {
    let id = doc_id(doc)?;
    let available = match doc.get("available") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            return Err(DecodeError::WrongType {
                id,
                field: "available",
            });
        }
    };
    let last_donation = match doc.get("lastDonation") {
        None | Some(Value::Null) => None,
        Some(v) => Some(timestamp_millis(v).ok_or(DecodeError::BadTimestamp { id: id.clone() })?),
    };
    Ok(Donor {
        user_id: required_str(doc, &id, "userId")?,
        name: required_str(doc, &id, "name")?,
        blood_group: blood_group(doc, &id)?,
        location: required_str(doc, &id, "location")?,
        contact: required_str(doc, &id, "contact")?,
        notify_token: optional_str(doc, &id, "notifyToken")?,
        available,
        last_donation,
        created_at: created_at(doc, &id)?,
        id,
    })
}

fn doc_id(doc: &Value) -> Result<String, DecodeError> {
    match doc.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(_) => Err(DecodeError::WrongType {
            id: "<unknown>".to_string(),
            field: "id",
        }),
        None => Err(DecodeError::MissingField {
            id: "<unknown>".to_string(),
            field: "id",
        }),
    }
}

fn required_str(doc: &Value, id: &str, field: &'static str) -> Result<String, DecodeError> {
    match doc.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::WrongType {
            id: id.to_string(),
            field,
        }),
        None => Err(DecodeError::MissingField {
            id: id.to_string(),
            field,
        }),
    }
}

fn optional_str(doc: &Value, id: &str, field: &'static str) -> Result<Option<String>, DecodeError> {
    match doc.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::WrongType {
            id: id.to_string(),
            field,
        }),
    }
}

fn blood_group(doc: &Value, id: &str) -> Result<BloodGroup, DecodeError> {
    let raw = required_str(doc, id, "bloodGroup")?;
    BloodGroup::parse(&raw).ok_or_else(|| DecodeError::UnknownValue {
        id: id.to_string(),
        field: "bloodGroup",
        value: raw,
    })
}

fn status(doc: &Value, id: &str) -> Result<RequestStatus, DecodeError> {
    let raw = required_str(doc, id, "status")?;
    RequestStatus::parse(&raw).ok_or_else(|| DecodeError::UnknownValue {
        id: id.to_string(),
        field: "status",
        value: raw,
    })
}

fn urgency(doc: &Value, id: &str) -> Result<Urgency, DecodeError> {
    let raw = required_str(doc, id, "urgency")?;
    Urgency::parse(&raw).ok_or_else(|| DecodeError::UnknownValue {
        id: id.to_string(),
        field: "urgency",
        value: raw,
    })
}

fn created_at(doc: &Value, id: &str) -> Result<i64, DecodeError> {
    match doc.get("createdAt") {
        None | Some(Value::Null) => Err(DecodeError::MissingField {
            id: id.to_string(),
            field: "createdAt",
        }),
        Some(v) => timestamp_millis(v).ok_or(DecodeError::BadTimestamp { id: id.to_string() }),
    }
}

/// Coerces the store's timestamp representations to epoch milliseconds:
/// integer millis, float seconds, or a `{seconds, nanos}` map.
fn timestamp_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(millis) = n.as_i64() {
                Some(millis)
            } else {
                n.as_f64().map(|secs| (secs * 1000.0) as i64)
            }
        }
        Value::Object(map) => {
            let seconds = map.get("seconds")?.as_i64()?;
            let nanos = map.get("nanos").and_then(Value::as_i64).unwrap_or(0);
            seconds.checked_mul(1000)?.checked_add(nanos / 1_000_000)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_doc() -> Value {
        json!({
            "id": "req-1",
            "userId": "user-1",
            "requesterName": "Karim",
            "bloodGroup": "O-",
            "location": "Dhaka",
            "contact": "+8801700000000",
            "createdAt": 1_700_000_000_000i64,
            "status": "active",
            "urgency": "Urgent"
        })
    }

    #[test]
    fn decodes_complete_request() {
        let request = decode_request(&request_doc()).unwrap();
        assert_eq!(request.id, "req-1");
        assert_eq!(request.blood_group, BloodGroup::ONegative);
        assert_eq!(request.status, RequestStatus::Active);
        assert_eq!(request.urgency, Urgency::Urgent);
        assert_eq!(request.created_at, 1_700_000_000_000);
        assert_eq!(request.notes, None);
    }

    #[test]
    fn missing_urgency_is_a_named_error() {
        let mut doc = request_doc();
        doc.as_object_mut().unwrap().remove("urgency");
        assert_eq!(
            decode_request(&doc),
            Err(DecodeError::MissingField {
                id: "req-1".to_string(),
                field: "urgency",
            })
        );
    }

    #[test]
    fn unknown_blood_group_is_rejected() {
        let mut doc = request_doc();
        doc["bloodGroup"] = json!("Z+");
        assert_eq!(
            decode_request(&doc),
            Err(DecodeError::UnknownValue {
                id: "req-1".to_string(),
                field: "bloodGroup",
                value: "Z+".to_string(),
            })
        );
    }

    #[test]
    fn created_at_coerces_float_seconds() {
        let mut doc = request_doc();
        doc["createdAt"] = json!(1_700_000_000.5);
        let request = decode_request(&doc).unwrap();
        assert_eq!(request.created_at, 1_700_000_000_500);
    }

    #[test]
    fn created_at_coerces_seconds_nanos_map() {
        let mut doc = request_doc();
        doc["createdAt"] = json!({ "seconds": 1_700_000_000i64, "nanos": 250_000_000i64 });
        let request = decode_request(&doc).unwrap();
        assert_eq!(request.created_at, 1_700_000_000_250);
    }

    #[test]
    fn created_at_overflowing_seconds_is_a_timestamp_error() {
        let mut doc = request_doc();
        doc["createdAt"] = json!({ "seconds": i64::MAX, "nanos": 0i64 });
        assert_eq!(
            decode_request(&doc),
            Err(DecodeError::BadTimestamp {
                id: "req-1".to_string(),
            })
        );
    }

    #[test]
    fn created_at_string_is_a_timestamp_error() {
        let mut doc = request_doc();
        doc["createdAt"] = json!("yesterday");
        assert_eq!(
            decode_request(&doc),
            Err(DecodeError::BadTimestamp {
                id: "req-1".to_string(),
            })
        );
    }

    #[test]
    fn snapshot_fails_on_first_malformed_record() {
        let mut bad = request_doc();
        bad["id"] = json!("req-2");
        bad.as_object_mut().unwrap().remove("location");
        let payload = serde_json::to_string(&json!([request_doc(), bad])).unwrap();
        assert_eq!(
            decode_request_snapshot(&payload),
            Err(DecodeError::MissingField {
                id: "req-2".to_string(),
                field: "location",
            })
        );
    }

    #[test]
    fn empty_snapshot_decodes_to_empty_vec() {
        assert_eq!(decode_request_snapshot("[]"), Ok(vec![]));
    }

    #[test]
    fn snapshot_must_be_an_array() {
        assert_eq!(
            decode_request_snapshot("{\"id\": \"req-1\"}"),
            Err(DecodeError::NotAnArray)
        );
    }

    #[test]
    fn donor_without_available_flag_counts_as_available() {
        let doc = json!({
            "id": "donor-1",
            "userId": "user-2",
            "name": "Rahim",
            "bloodGroup": "AB+",
            "location": "Chittagong",
            "contact": "+8801800000000",
            "createdAt": 1_690_000_000_000i64
        });
        let donor = decode_donor(&doc).unwrap();
        assert_eq!(donor.available, None);
        assert!(donor.is_available());
        assert_eq!(donor.blood_group, BloodGroup::AbPositive);
    }
}
