//!
//! # ende
//!
//! (en)Encode and (de)Decode
//!
//! The text codec is JSON. Keys of an [`OrderedMap`](crate::OrderedMap) end
//! up as object field names, so they get a codec of their own: whatever a
//! key encodes to, the field name is always a JSON string.
//!

use ruc::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Methods used to encode the KEY.
pub trait KeyEn {
    /// Encode a key into the text of an object field name.
    ///
    /// A key that encodes to a JSON string contributes that string as is;
    /// any other key (number, bool, array, ...) contributes its compact JSON
    /// text, which is then quoted like every other field name.
    fn try_encode_key(&self) -> Result<String>;
}

/// Methods used to decode the KEY.
pub trait KeyDe: Sized {
    /// Decode an object field name back to the original key type.
    fn decode_key(name: &str) -> Result<Self>;
}

/// Methods used to encode the VALUE.
pub trait ValueEn {
    /// Encode a value to compact JSON text.
    fn try_encode_value(&self) -> Result<String>;
}

/// Methods used to decode the VALUE.
pub trait ValueDe: Sized {
    /// Decode JSON text to the original value type.
    fn decode_value(text: &str) -> Result<Self>;
}

impl<T: Serialize + ?Sized> KeyEn for T {
    fn try_encode_key(&self) -> Result<String> {
        // a JSON text starting with a quote is a string literal
        let text = serde_json::to_string(self).c(d!())?;
        if text.starts_with('"') {
            serde_json::from_str::<String>(&text).c(d!())
        } else {
            Ok(text)
        }
    }
}

impl<T: DeserializeOwned> KeyDe for T {
    fn decode_key(name: &str) -> Result<Self> {
        serde_json::from_value(Value::String(name.to_owned()))
            .or_else(|_| serde_json::from_str(name))
            .c(d!(format!("invalid key: {}", name)))
    }
}

impl<T: Serialize + ?Sized> ValueEn for T {
    fn try_encode_value(&self) -> Result<String> {
        serde_json::to_string(self).c(d!())
    }
}

impl<T: DeserializeOwned> ValueDe for T {
    fn decode_value(text: &str) -> Result<Self> {
        serde_json::from_str(text).c(d!())
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////
