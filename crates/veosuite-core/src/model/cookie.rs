use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::Result;

/// A personal cookie string saved for advanced features
///
/// `value` is the raw cookie text pasted by the user; `name` is a mnemonic
/// label (e.g. which account the cookie belongs to).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCookie {
    /// Unique identifier for this cookie entry (UUID v7)
    pub id: String,

    /// Mnemonic label
    pub name: String,

    /// Raw cookie value
    pub value: String,
}

/// Partial update for a UserCookie; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCookiePatch {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl UserCookie {
    /// Create a new UserCookie with a generated ID
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Record for UserCookie {
    type Patch = UserCookiePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: UserCookiePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("name", &self.name)?;
        require_nonempty("value", &self.value)?;
        Ok(())
    }
}
