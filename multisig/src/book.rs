//! The open governance request book.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vgv_crypto::SignatureVerifier;
use vgv_types::{Official, OfficialId, ProtocolParams, Signature, Timestamp, TxHash};

use crate::error::MultisigError;
use crate::request::{RequestStatus, SigningRequest};

/// Result of submitting one signature to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureOutcome {
    /// Signatures collected so far, including this one.
    pub signatures: u32,
    /// Whether the request is (now or already) approved.
    pub approved: bool,
}

/// All open and recently-closed governance signing requests.
///
/// Expiry is evaluated lazily against block time on every access that could
/// observe it, so no background task is needed and replay stays deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBook {
    requests: BTreeMap<TxHash, SigningRequest>,
}

impl RequestBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new signing request.
    ///
    /// The deadline must fall within the parameterized window after creation
    /// (24–48 hours under default parameters).
    pub fn open(
        &mut self,
        request: SigningRequest,
        params: &ProtocolParams,
    ) -> Result<TxHash, MultisigError> {
        let deadline_secs = request.deadline.as_secs().saturating_sub(request.created_at.as_secs());
        if deadline_secs < params.multisig_deadline_min_secs
            || deadline_secs > params.multisig_deadline_max_secs
        {
            return Err(MultisigError::InvalidDeadline {
                deadline_secs,
                min_secs: params.multisig_deadline_min_secs,
                max_secs: params.multisig_deadline_max_secs,
            });
        }
        if self.requests.contains_key(&request.id) {
            return Err(MultisigError::DuplicateRequest(request.id));
        }
        let id = request.id;
        self.requests.insert(id, request);
        Ok(id)
    }

    /// Submit one official's signature to a pending request.
    ///
    /// Expiry is checked before anything else. Signatures landing after
    /// approval are still verified and recorded (audit trail) but cannot
    /// change the outcome.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_signature<V: SignatureVerifier>(
        &mut self,
        id: &TxHash,
        officials: &[Official],
        threshold: u32,
        official_id: OfficialId,
        signature: Signature,
        now: Timestamp,
        verifier: &V,
    ) -> Result<SignatureOutcome, MultisigError> {
        let request = self
            .requests
            .get_mut(id)
            .ok_or(MultisigError::UnknownRequest(*id))?;

        request.expire_if_due(now);
        match request.status {
            RequestStatus::Expired => return Err(MultisigError::RequestExpired),
            RequestStatus::Rejected => return Err(MultisigError::RequestClosed(*id)),
            RequestStatus::Pending | RequestStatus::Approved => {}
        }

        let key = officials
            .iter()
            .find(|o| o.id == official_id)
            .map(|o| &o.public_key)
            .ok_or_else(|| MultisigError::UnknownOfficial(official_id.to_string()))?;
        if request.signatures.contains_key(&official_id) {
            return Err(MultisigError::DuplicateSignature(official_id.to_string()));
        }
        if !verifier.verify(key, &request.signing_bytes(), &signature) {
            return Err(MultisigError::InvalidSignature(official_id.to_string()));
        }

        request.signatures.insert(official_id, signature);
        if request.status == RequestStatus::Pending && request.signature_count() >= threshold {
            request.status = RequestStatus::Approved;
        }

        Ok(SignatureOutcome {
            signatures: request.signature_count(),
            approved: request.status == RequestStatus::Approved,
        })
    }

    /// Remove and return an approved request for execution.
    pub fn take_approved(
        &mut self,
        id: &TxHash,
        now: Timestamp,
    ) -> Result<SigningRequest, MultisigError> {
        let request = self
            .requests
            .get_mut(id)
            .ok_or(MultisigError::UnknownRequest(*id))?;
        request.expire_if_due(now);
        match request.status {
            RequestStatus::Approved => {}
            RequestStatus::Expired => return Err(MultisigError::RequestExpired),
            _ => return Err(MultisigError::NotApproved(*id)),
        }
        self.requests
            .remove(id)
            .ok_or(MultisigError::UnknownRequest(*id))
    }

    /// Withdraw a still-pending request. Approved requests cannot be
    /// withdrawn.
    pub fn reject(&mut self, id: &TxHash, now: Timestamp) -> Result<(), MultisigError> {
        let request = self
            .requests
            .get_mut(id)
            .ok_or(MultisigError::UnknownRequest(*id))?;
        request.expire_if_due(now);
        match request.status {
            RequestStatus::Pending => {
                request.status = RequestStatus::Rejected;
                Ok(())
            }
            RequestStatus::Expired => Err(MultisigError::RequestExpired),
            _ => Err(MultisigError::RequestClosed(*id)),
        }
    }

    pub fn get(&self, id: &TxHash) -> Option<&SigningRequest> {
        self.requests.get(id)
    }

    /// Drop terminal (expired/rejected) requests, returning how many were
    /// removed. Called by the processor at block boundaries.
    pub fn sweep(&mut self, now: Timestamp) -> usize {
        for request in self.requests.values_mut() {
            request.expire_if_due(now);
        }
        let before = self.requests.len();
        self.requests.retain(|_, r| !r.status.is_terminal());
        before - self.requests.len()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GovernanceAction;
    use vgv_crypto::{keypair_from_seed, sign_message, Ed25519Verifier};
    use vgv_types::{GovernmentId, KeyPair};

    const DAY: u64 = 86_400;

    fn official_set(count: u8) -> (Vec<Official>, Vec<KeyPair>) {
        let mut officials = Vec::new();
        let mut keys = Vec::new();
        for i in 0..count {
            let kp = keypair_from_seed(&[i + 10; 32]);
            officials.push(Official {
                id: OfficialId::new(format!("IND-{i}")),
                public_key: kp.public.clone(),
            });
            keys.push(kp);
        }
        (officials, keys)
    }

    fn open_request(book: &mut RequestBook) -> SigningRequest {
        let request = SigningRequest::new(
            GovernmentId::new("IND"),
            GovernanceAction::SuspendGovernment(GovernmentId::new("BRA")),
            Timestamp::new(1_000),
            Timestamp::new(1_000 + 30 * 3_600),
        );
        book.open(request.clone(), &ProtocolParams::default()).unwrap();
        request
    }

    fn sign(request: &SigningRequest, kp: &KeyPair) -> Signature {
        sign_message(&request.signing_bytes(), &kp.private)
    }

    #[test]
    fn deadline_window_enforced() {
        let mut book = RequestBook::new();
        let params = ProtocolParams::default();
        let too_short = SigningRequest::new(
            GovernmentId::new("IND"),
            GovernanceAction::SuspendGovernment(GovernmentId::new("BRA")),
            Timestamp::new(0),
            Timestamp::new(DAY - 1),
        );
        assert!(matches!(
            book.open(too_short, &params),
            Err(MultisigError::InvalidDeadline { .. })
        ));

        let too_long = SigningRequest::new(
            GovernmentId::new("IND"),
            GovernanceAction::SuspendGovernment(GovernmentId::new("BRA")),
            Timestamp::new(0),
            Timestamp::new(2 * DAY + 1),
        );
        assert!(matches!(
            book.open(too_long, &params),
            Err(MultisigError::InvalidDeadline { .. })
        ));
    }

    #[test]
    fn threshold_three_approves_on_third_signature() {
        let mut book = RequestBook::new();
        let (officials, keys) = official_set(5);
        let request = open_request(&mut book);
        let now = Timestamp::new(2_000);

        for (i, expect_approved) in [(0usize, false), (1, false), (2, true)] {
            let outcome = book
                .submit_signature(
                    &request.id,
                    &officials,
                    3,
                    officials[i].id.clone(),
                    sign(&request, &keys[i]),
                    now,
                    &Ed25519Verifier,
                )
                .unwrap();
            assert_eq!(outcome.approved, expect_approved, "signature {i}");
        }

        // a fourth signature is recorded but changes nothing
        let outcome = book
            .submit_signature(
                &request.id,
                &officials,
                3,
                officials[3].id.clone(),
                sign(&request, &keys[3]),
                now,
                &Ed25519Verifier,
            )
            .unwrap();
        assert!(outcome.approved);
        assert_eq!(outcome.signatures, 4);

        let approved = book.take_approved(&request.id, now).unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert!(book.is_empty());
    }

    #[test]
    fn duplicate_signature_rejected() {
        let mut book = RequestBook::new();
        let (officials, keys) = official_set(3);
        let request = open_request(&mut book);
        let now = Timestamp::new(2_000);

        book.submit_signature(
            &request.id,
            &officials,
            3,
            officials[0].id.clone(),
            sign(&request, &keys[0]),
            now,
            &Ed25519Verifier,
        )
        .unwrap();
        let err = book
            .submit_signature(
                &request.id,
                &officials,
                3,
                officials[0].id.clone(),
                sign(&request, &keys[0]),
                now,
                &Ed25519Verifier,
            )
            .unwrap_err();
        assert_eq!(err, MultisigError::DuplicateSignature("IND-0".into()));
    }

    #[test]
    fn expired_request_refuses_signatures() {
        let mut book = RequestBook::new();
        let (officials, keys) = official_set(3);
        let request = open_request(&mut book);
        let after_deadline = Timestamp::new(request.deadline.as_secs());

        let err = book
            .submit_signature(
                &request.id,
                &officials,
                3,
                officials[0].id.clone(),
                sign(&request, &keys[0]),
                after_deadline,
                &Ed25519Verifier,
            )
            .unwrap_err();
        assert_eq!(err, MultisigError::RequestExpired);
        assert_eq!(book.sweep(after_deadline), 1);
    }

    #[test]
    fn approval_survives_deadline() {
        let mut book = RequestBook::new();
        let (officials, keys) = official_set(3);
        let request = open_request(&mut book);
        let now = Timestamp::new(2_000);

        for i in 0..3 {
            book.submit_signature(
                &request.id,
                &officials,
                3,
                officials[i].id.clone(),
                sign(&request, &keys[i]),
                now,
                &Ed25519Verifier,
            )
            .unwrap();
        }

        // well past the deadline, the approved request is still executable
        let late = Timestamp::new(request.deadline.as_secs() + DAY);
        assert!(book.take_approved(&request.id, late).is_ok());
    }

    #[test]
    fn pending_request_can_be_withdrawn() {
        let mut book = RequestBook::new();
        let request = open_request(&mut book);
        let now = Timestamp::new(2_000);
        book.reject(&request.id, now).unwrap();
        assert_eq!(
            book.take_approved(&request.id, now),
            Err(MultisigError::NotApproved(request.id))
        );
    }
}
