//! Message endpoint identity (`name@vessel`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A person on a vessel.
///
/// Both parts are non-empty and stored lower-cased so that comparison and the
/// canonical signing bytes do not depend on how the user typed them. Decoding
/// off the wire goes through the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdentityWire")]
pub struct Identity {
    name: String,
    vessel: String,
}

impl Identity {
    /// Build a normalized identity. Emptiness is checked by packaging, which
    /// knows which raw field is being validated.
    pub(crate) fn normalized(name: &str, vessel: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            vessel: vessel.to_lowercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IdentityWire {
    name: String,
    vessel: String,
}

impl TryFrom<IdentityWire> for Identity {
    type Error = &'static str;

    fn try_from(w: IdentityWire) -> std::result::Result<Self, Self::Error> {
        if w.name.is_empty() {
            return Err("identity name must not be empty");
        }
        if w.vessel.is_empty() {
            return Err("identity vessel must not be empty");
        }
        Ok(Self::normalized(&w.name, &w.vessel))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.vessel)
    }
}
