//! Inline authorization of a transaction-carried signature set.

use vgv_crypto::SignatureVerifier;
use vgv_types::{Official, OfficialId, Signature};

use crate::error::MultisigError;

/// Authorize a message against an account's official set.
///
/// Every listed signature must be attributable and valid — a single unknown
/// signer, duplicate, or bad signature fails the whole set rather than being
/// skipped, so a malformed transaction never authorizes by accident.
///
/// Returns the number of valid signatures (≥ `threshold`) on success.
pub fn authorize<V: SignatureVerifier>(
    officials: &[Official],
    threshold: u32,
    message: &[u8],
    signatures: &[(OfficialId, Signature)],
    verifier: &V,
) -> Result<u32, MultisigError> {
    let mut signed: Vec<&OfficialId> = Vec::with_capacity(signatures.len());

    for (official_id, signature) in signatures {
        let official = officials
            .iter()
            .find(|o| &o.id == official_id)
            .ok_or_else(|| MultisigError::UnknownOfficial(official_id.to_string()))?;
        if signed.contains(&official_id) {
            return Err(MultisigError::DuplicateSignature(official_id.to_string()));
        }
        if !verifier.verify(&official.public_key, message, signature) {
            return Err(MultisigError::InvalidSignature(official_id.to_string()));
        }
        signed.push(official_id);
    }

    let have = signed.len() as u32;
    if have < threshold {
        return Err(MultisigError::InsufficientSignatures {
            have,
            need: threshold,
        });
    }
    Ok(have)
}
