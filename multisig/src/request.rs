//! Governance signing requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vgv_crypto::hash_transaction;
use vgv_types::{GovernableParam, GovernmentId, OfficialId, Signature, Timestamp, TxHash};

/// Domain separator prepended to governance signing bytes so a signature over
/// a request can never double as a signature over a settlement transaction.
const GOVERNANCE_DOMAIN: &[u8] = b"vgv-governance-v1";

/// A governance action an account's officials can co-sign.
///
/// These never appear inside blocks as transactions; they live in the
/// [`RequestBook`](crate::RequestBook) until approved, then the processor
/// applies them between blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceAction {
    SuspendGovernment(GovernmentId),
    ReinstateGovernment(GovernmentId),
    SetParam { param: GovernableParam, value: u128 },
}

impl GovernanceAction {
    /// Canonical byte encoding: one tag byte, then a fixed-layout payload.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(20);
        match self {
            Self::SuspendGovernment(id) => {
                out.push(0x10);
                out.extend_from_slice(id.as_bytes());
            }
            Self::ReinstateGovernment(id) => {
                out.push(0x11);
                out.extend_from_slice(id.as_bytes());
            }
            Self::SetParam { param, value } => {
                out.push(0x12);
                out.push(param.wire_tag());
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Collecting signatures.
    Pending,
    /// Threshold reached. One-way: later expiry checks do not demote it.
    Approved,
    /// Deadline passed before threshold.
    Expired,
    /// Withdrawn by the proposing account.
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired | Self::Rejected)
    }
}

/// A pending governance action collecting official signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningRequest {
    /// Content hash; doubles as the request identifier.
    pub id: TxHash,
    /// The account whose officials must sign.
    pub government: GovernmentId,
    pub action: GovernanceAction,
    pub created_at: Timestamp,
    /// Hard deadline; signatures at or after this instant are refused.
    pub deadline: Timestamp,
    /// Collected signatures, keyed by official for duplicate detection.
    pub signatures: BTreeMap<OfficialId, Signature>,
    pub status: RequestStatus,
}

impl SigningRequest {
    pub fn new(
        government: GovernmentId,
        action: GovernanceAction,
        created_at: Timestamp,
        deadline: Timestamp,
    ) -> Self {
        let mut request = Self {
            id: TxHash::ZERO,
            government,
            action,
            created_at,
            deadline,
            signatures: BTreeMap::new(),
            status: RequestStatus::Pending,
        };
        request.id = hash_transaction(&request.signing_bytes());
        request
    }

    /// The exact bytes each official signs.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(GOVERNANCE_DOMAIN);
        out.extend_from_slice(self.government.as_bytes());
        out.extend_from_slice(&self.action.signing_bytes());
        out.extend_from_slice(&self.created_at.as_secs().to_le_bytes());
        out.extend_from_slice(&self.deadline.as_secs().to_le_bytes());
        out
    }

    pub fn signature_count(&self) -> u32 {
        self.signatures.len() as u32
    }

    /// Transition to `Expired` if the deadline has passed and the request is
    /// still pending. Approval is sticky.
    pub fn expire_if_due(&mut self, now: Timestamp) {
        if self.status == RequestStatus::Pending && now >= self.deadline {
            self.status = RequestStatus::Expired;
        }
    }
}
