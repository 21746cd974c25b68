//! Defaulted struct properties that are stored, and serialized, as optionals.
//!
//! [`optional_default!`] wraps a struct declaration in which every field carries a type
//! annotation and a default value. Each field is rewritten into a private optional backing
//! field plus a getter/setter pair, so the property behaves like a plain non-optional value
//! while a value equal to the default is stored as "absent" and omitted from serialized
//! output.
//!
//! ```
//! use optional_default::optional_default;
//!
//! optional_default! {
//!     #[derive(Debug, Default)]
//!     pub struct Settings {
//!         pub flag: bool = false,
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! assert_eq!(settings.flag(), false);
//!
//! settings.set_flag(true);
//! assert_eq!(settings.flag(), true);
//!
//! // Setting the default again clears the backing storage.
//! settings.set_flag(false);
//! assert_eq!(settings.flag(), false);
//! ```
//!
//! The macro generates a private optional backing field for every property, named by prefixing
//! the property name with an underscore:
//!
//! ```ignore
//! _flag: Option<bool>
//! ```
//!
//! # Serialization
//!
//! Attributes written on a property are carried over to its backing field. To omit the default
//! value from encoded output, map the serialization key onto the backing field and skip it
//! while absent:
//!
//! ```
//! use optional_default::optional_default;
//! use serde::{Deserialize, Serialize};
//!
//! optional_default! {
//!     #[derive(Debug, Default, Serialize, Deserialize)]
//!     pub struct Settings {
//!         #[serde(rename = "flag", skip_serializing_if = "Option::is_none")]
//!         pub flag: bool = false,
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! assert_eq!(serde_json::to_string(&settings).unwrap(), "{}");
//!
//! settings.set_flag(true);
//! assert_eq!(serde_json::to_string(&settings).unwrap(), r#"{"flag":true}"#);
//! ```
//!
//! A missing key deserializes to an absent backing field, so the getter reports the default
//! after decoding, and re-encoding omits it again.
//!
//! The declared type of every property must implement `Clone` and `PartialEq`: the getter
//! clones the stored value out of the backing field, and the setter compares the new value
//! against the default to decide whether to store it. Whether two values the type considers
//! equal are interchangeable in every other respect is up to the type; the macro treats
//! equality to the default as "nothing to store".

pub use optional_default_macros::optional_default;
