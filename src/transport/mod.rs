//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod verify_call;
mod verify_sms;
mod wire;

pub use verify_call::encode_verify_call_form;
pub use verify_sms::encode_verify_sms_form;
pub use wire::{decode_error_body, decode_json_response, encode_form};
