//! Canonicalization, HMAC-SHA256 signing and verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{MailError, Result, SignatureError};
use crate::identity::Identity;

use super::{PackagedMessage, RawMessage};

type HmacSha256 = Hmac<Sha256>;

const FIELD_DELIMITER: char = '|';

/// Exact input to signing and verification:
/// `to.name@to.vessel|from.name@from.vessel|subject|body`.
pub fn canonical_bytes(to: &Identity, from: &Identity, subject: &str, body: &str) -> Vec<u8> {
    format!("{to}{FIELD_DELIMITER}{from}{FIELD_DELIMITER}{subject}{FIELD_DELIMITER}{body}")
        .into_bytes()
}

fn keyed_mac(secret: &[u8]) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(secret).map_err(|e| MailError::Internal(format!("mac init: {e}")))
}

/// Validate a raw message and turn it into an immutable, signed one.
///
/// Identities are lower-cased before signing; subject and body are kept
/// verbatim. Fails with `MissingField` naming the first empty field.
pub fn package(raw: &RawMessage, secret: &[u8]) -> Result<PackagedMessage> {
    raw.validate()?;

    let to = Identity::normalized(&raw.to_name, &raw.to_vessel);
    let from = Identity::normalized(&raw.from_name, &raw.from_vessel);

    let mut mac = keyed_mac(secret)?;
    mac.update(&canonical_bytes(&to, &from, &raw.subject, &raw.body));
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(PackagedMessage::new(
        to,
        from,
        raw.subject.clone(),
        raw.body.clone(),
        signature,
    ))
}

/// Recompute the signature from the message's current contents and compare
/// it with the stored one in constant time.
pub fn verify(msg: &PackagedMessage, secret: &[u8]) -> Result<()> {
    let received = hex::decode(msg.signature()).map_err(|_| SignatureError::MalformedEncoding)?;

    let mut mac = keyed_mac(secret)?;
    mac.update(&canonical_bytes(msg.to(), msg.from(), msg.subject(), msg.body()));
    mac.verify_slice(&received).map_err(|_| SignatureError::Mismatch)?;
    Ok(())
}
