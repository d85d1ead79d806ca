//! Governance hooks: suspension, reinstatement, parameter changes.
//!
//! Governance never rides inside blocks. An account's officials open a
//! signing request, co-sign it over the deadline window, and the approved
//! action is executed between blocks — every validator runs the same hooks
//! with the same block time.

use tracing::info;

use vgv_crypto::SignatureVerifier;
use vgv_multisig::{GovernanceAction, SignatureOutcome, SigningRequest};
use vgv_types::{GovernmentId, GovernmentStatus, OfficialId, Signature, Timestamp, TxHash};

use crate::error::ProcessError;
use crate::state::CoreState;

/// Open a signing request on behalf of `proposer`'s officials.
///
/// The proposer must be active; suspension and reinstatement targets must be
/// registered.
pub fn open_governance_request(
    state: &mut CoreState,
    proposer: &GovernmentId,
    action: GovernanceAction,
    now: Timestamp,
    deadline: Timestamp,
) -> Result<TxHash, ProcessError> {
    state.ledger.ensure_active(proposer)?;
    match &action {
        GovernanceAction::SuspendGovernment(target)
        | GovernanceAction::ReinstateGovernment(target) => {
            if state.ledger.account(target).is_none() {
                return Err(vgv_ledger::LedgerError::UnknownAccount(target.to_string()).into());
            }
        }
        GovernanceAction::SetParam { .. } => {}
    }

    let request = SigningRequest::new(proposer.clone(), action, now, deadline);
    let id = state.requests.open(request, &state.params)?;
    info!(request = %id, government = %proposer, "governance request opened");
    Ok(id)
}

/// Submit one official signature to a pending request.
pub fn submit_governance_signature<V: SignatureVerifier>(
    state: &mut CoreState,
    id: &TxHash,
    official: OfficialId,
    signature: Signature,
    now: Timestamp,
    verifier: &V,
) -> Result<SignatureOutcome, ProcessError> {
    let government = state
        .requests
        .get(id)
        .ok_or(vgv_multisig::MultisigError::UnknownRequest(*id))?
        .government
        .clone();
    let account = state.ledger.ensure_active(&government)?;
    let officials = account.officials.clone();
    let threshold = account.signature_threshold;

    let outcome = state.requests.submit_signature(
        id, &officials, threshold, official, signature, now, verifier,
    )?;
    if outcome.approved {
        info!(request = %id, signatures = outcome.signatures, "governance request approved");
    }
    Ok(outcome)
}

/// Execute an approved request, removing it from the book.
pub fn execute_approved(
    state: &mut CoreState,
    id: &TxHash,
    now: Timestamp,
) -> Result<GovernanceAction, ProcessError> {
    let request = state.requests.take_approved(id, now)?;
    match &request.action {
        GovernanceAction::SuspendGovernment(target) => {
            state.ledger.set_status(target, GovernmentStatus::Suspended)?;
            info!(government = %target, "government suspended");
        }
        GovernanceAction::ReinstateGovernment(target) => {
            state.ledger.set_status(target, GovernmentStatus::Active)?;
            info!(government = %target, "government reinstated");
        }
        GovernanceAction::SetParam { param, value } => {
            state.params.apply(*param, *value)?;
            info!(?param, value, "parameter updated");
        }
    }
    Ok(request.action)
}
