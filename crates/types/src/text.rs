//! Fixed-capacity text for a single display field

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of bytes a single display field may hold
pub const FIELD_WIDTH: usize = 16;

/// Bounded text for one display row.
///
/// Implements [`fmt::Write`], so fields are built with `write!`. Output that
/// does not fit into [`FIELD_WIDTH`] bytes is cut at the last whole character
/// and every later write is ignored. Writing never fails and never panics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldText {
    text: heapless::String<FIELD_WIDTH>,
    #[serde(skip)]
    truncated: bool,
}

impl FieldText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from `s`, keeping as much of it as fits
    pub fn truncated_from(s: &str) -> Self {
        let mut field = Self::new();
        field.append(s);
        field
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether any write was cut short
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    fn append(&mut self, s: &str) {
        if self.truncated {
            return;
        }

        let room = FIELD_WIDTH - self.text.len();
        let mut cut = s.len().min(room);
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }

        // cut <= room, so this push cannot overflow
        let _ = self.text.push_str(&s[..cut]);
        if cut < s.len() {
            self.truncated = true;
        }
    }
}

impl fmt::Write for FieldText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for FieldText {
    fn from(s: &str) -> Self {
        Self::truncated_from(s)
    }
}

// Equality and hashing look at the visible text only
impl PartialEq for FieldText {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for FieldText {}

impl Hash for FieldText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<&str> for FieldText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
