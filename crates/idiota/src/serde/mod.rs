//! JSON and serde support.
//!
//! By default an [`IotaId`] serializes as its canonical text form. Use
//! [`as_native`] on a field to store the packed `u64` instead.

mod native;
mod text;

pub use native::as_native;

use crate::{IotaId, TextCodec};

impl<C: TextCodec> IotaId<C> {
    /// Serializes this id as a JSON string literal holding its text form.
    ///
    /// # Example
    /// ```
    /// use idiota::IotaId36;
    ///
    /// let id = IotaId36::from_parts(1_700_000_000, 123_456_789);
    /// assert_eq!(id.to_json(), r#""1jh0y113ytr85""#);
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        // A string literal of alphabet characters needs no escaping.
        format!("\"{}\"", self.encode())
    }

    /// Parses a JSON value that must be a string holding the text form.
    ///
    /// # Errors
    ///
    /// Fails if the input is not valid JSON, is not a JSON string, or the
    /// string is not a valid id (the [`crate::Error`] is carried in the
    /// message).
    ///
    /// # Example
    /// ```
    /// use idiota::IotaId36;
    ///
    /// let id = IotaId36::from_json(r#""1jh0y113ytr85""#).unwrap();
    /// assert_eq!(id.timestamp(), 1_700_000_000);
    /// assert!(IotaId36::from_json("42").is_err());
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
