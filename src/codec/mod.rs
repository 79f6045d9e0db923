//! Wire codec for monitors.
//!
//! Decoding runs in two passes. The top-level object is first split into its
//! fields without decoding any value, which is enough to read the `type`
//! discriminator. The whole buffer is then decoded into the record that the
//! discriminator selects, so each record only has to know its own fields.

mod error;
pub mod sparse;

use std::collections::HashMap;

pub use error::CodecError;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::models::monitor::{Monitor, MonitorKind};

const TYPE_FIELD: &str = "type";
const MONITORS_FIELD: &str = "monitors";

/// Splits a JSON object into its top-level fields, leaving values undecoded.
fn top_level_fields(bytes: &[u8]) -> Result<HashMap<String, &RawValue>, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Malformed)
}

/// Decodes a whole payload into a single record type, reporting the path of
/// the field that failed.
fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let field = err.path().to_string();
        CodecError::FieldType { field, source: err.into_inner() }
    })
}

/// Reads the `type` discriminator of a monitor object.
fn read_kind(fields: &HashMap<String, &RawValue>) -> Result<MonitorKind, CodecError> {
    let raw = fields.get(TYPE_FIELD).ok_or(CodecError::MissingField(TYPE_FIELD))?;
    let type_name: String = serde_json::from_str(raw.get()).map_err(CodecError::Malformed)?;
    type_name.parse()
}

/// Decodes a single monitor object.
///
/// # Errors
/// * [`CodecError::Malformed`] / [`CodecError::MissingField`] if the payload
///   is not a JSON object with a string `type` field.
/// * [`CodecError::UnknownType`] if `type` names no known monitor kind.
/// * [`CodecError::FieldType`] if a field of the selected record has the
///   wrong JSON type.
pub fn decode_monitor(bytes: &[u8]) -> Result<Monitor, CodecError> {
    let fields = top_level_fields(bytes)?;
    let kind = read_kind(&fields)?;

    let monitor = match kind {
        MonitorKind::Connectivity => Monitor::Connectivity(decode_record(bytes)?),
        MonitorKind::HostMetric => Monitor::HostMetric(decode_record(bytes)?),
        MonitorKind::ServiceMetric => Monitor::ServiceMetric(decode_record(bytes)?),
        MonitorKind::ExternalHttp => Monitor::ExternalHttp(decode_record(bytes)?),
        MonitorKind::Expression => Monitor::Expression(decode_record(bytes)?),
    };

    Ok(monitor)
}

/// Decodes a `{"monitors": [...]}` wrapper, element by element and in order.
///
/// The first element that fails to decode fails the whole list.
pub fn decode_monitor_list(bytes: &[u8]) -> Result<Vec<Monitor>, CodecError> {
    let fields = top_level_fields(bytes)?;
    let raw_list = fields.get(MONITORS_FIELD).ok_or(CodecError::MissingField(MONITORS_FIELD))?;
    let elements: Vec<&RawValue> =
        serde_json::from_str(raw_list.get()).map_err(CodecError::Malformed)?;

    elements.into_iter().map(|raw| decode_monitor(raw.get().as_bytes())).collect()
}

/// Encodes a monitor into its sparse wire form, `type` included.
///
/// # Errors
/// [`CodecError::Encode`] if a threshold is NaN or infinite.
pub fn encode_monitor(monitor: &Monitor) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(monitor).map_err(CodecError::Encode)
}
