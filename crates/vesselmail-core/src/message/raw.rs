use crate::error::{Field, MailError, Result};

/// User-authored message, not yet signed. Never transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    pub to_name: String,
    pub to_vessel: String,
    pub from_name: String,
    pub from_vessel: String,
    pub subject: String,
    pub body: String,
}

impl RawMessage {
    pub fn new(
        to: (impl Into<String>, impl Into<String>),
        from: (impl Into<String>, impl Into<String>),
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to_name: to.0.into(),
            to_vessel: to.1.into(),
            from_name: from.0.into(),
            from_vessel: from.1.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Fails on the first empty field, in wire order.
    pub(crate) fn validate(&self) -> Result<()> {
        let fields = [
            (Field::ToName, &self.to_name),
            (Field::ToVessel, &self.to_vessel),
            (Field::FromName, &self.from_name),
            (Field::FromVessel, &self.from_vessel),
            (Field::Subject, &self.subject),
            (Field::Body, &self.body),
        ];
        match fields.iter().find(|(_, v)| v.is_empty()) {
            Some((field, _)) => Err(MailError::MissingField { field: *field }),
            None => Ok(()),
        }
    }
}
