//! Object identifier validation.
//!
//! Identifiers are opaque tokens assigned by the external provisioning
//! process. Valid identifiers:
//! - Must be non-empty
//! - Must be at most 100 characters
//! - May contain only ASCII alphanumerics and underscore

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Maximum length of an object identifier in characters.
pub const MAX_OBJECT_ID_LEN: usize = 100;

/// Validated identifier of a productline object.
///
/// Globally unique and immutable once created. Construct through
/// [`ObjectId::new`], which rejects malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an identifier, validating its shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use plv_types::ObjectId;
    ///
    /// assert!(ObjectId::new("OBJ_001").is_ok());
    /// assert!(ObjectId::new("").is_err());
    /// assert!(ObjectId::new("no-dashes").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_object_id(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate an object identifier, returning `Ok(())` if valid.
pub fn validate_object_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(TypeError::InvalidObjectId {
            id: id.to_string(),
            reason: "must not be empty".into(),
        });
    }

    if id.len() > MAX_OBJECT_ID_LEN {
        return Err(TypeError::InvalidObjectId {
            id: id.to_string(),
            reason: format!("must be at most {MAX_OBJECT_ID_LEN} characters"),
        });
    }

    if let Some(ch) = id.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(TypeError::InvalidObjectId {
            id: id.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }

    Ok(())
}
