//! End-to-end block processing tests with real Ed25519 signatures.

use std::collections::BTreeMap;

use vgv_allocation::IndicatorSet;
use vgv_bridge::{OraclePrice, PRICE_SCALE};
use vgv_crypto::{keypair_from_seed, sign_message, Ed25519Verifier};
use vgv_ledger::GenesisConfig;
use vgv_ledger::GenesisGovernment;
use vgv_multisig::GovernanceAction;
use vgv_processor::{
    apply_allocation, execute_approved, open_governance_request, process_block,
    submit_governance_signature, Block, CoreState,
};
use vgv_transactions::{BridgeConvertTx, MintTx, Purpose, Transaction, TransferTx};
use vgv_types::{
    Amount, GovernmentId, GovernmentTier, InstitutionType, KeyPair, OfficialId, ProtocolParams,
    Signature, Timestamp, TxHash, UrgencyLevel,
};

// 2026-08-25 00:00:00 UTC
const NOW: Timestamp = Timestamp::new(1_787_616_000);

fn official_keys(code: &str) -> Vec<(OfficialId, KeyPair)> {
    (0u8..3)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..3].copy_from_slice(code.as_bytes());
            seed[3] = i + 1;
            (
                OfficialId::new(format!("{code}-{i}")),
                keypair_from_seed(&seed),
            )
        })
        .collect()
}

fn genesis_state() -> CoreState {
    let make = |code: &str, tier, balance| GenesisGovernment {
        id: code.to_string(),
        tier,
        institution: InstitutionType::Treasury,
        officials: official_keys(code)
            .into_iter()
            .map(|(id, kp)| (id.as_str().to_string(), kp.public))
            .collect(),
        signature_threshold: 2,
        initial_balance: balance,
    };
    let config = GenesisConfig {
        initial_supply: 10_000_000,
        governments: vec![
            make("IND", GovernmentTier::Founding, 1_000_000),
            make("BRA", GovernmentTier::Full, 500_000),
        ],
    };
    CoreState::from_genesis(&config, ProtocolParams::default(), NOW).unwrap()
}

fn sign_with(code: &str, signers: &[usize], bytes: &[u8]) -> Vec<(OfficialId, Signature)> {
    let keys = official_keys(code);
    signers
        .iter()
        .map(|&i| (keys[i].0.clone(), sign_message(bytes, &keys[i].1.private)))
        .collect()
}

fn transfer(from: &str, to: &str, amount: u128, sequence: u64, signers: &[usize]) -> Transaction {
    let mut tx = TransferTx {
        hash: TxHash::ZERO,
        from: GovernmentId::new(from),
        to: GovernmentId::new(to),
        amount: Amount::new(amount),
        purpose: Purpose::TradeSettlement {
            agreement_id: "AGR-2026-0042".into(),
        },
        urgency: UrgencyLevel::Standard,
        sequence,
        timestamp: NOW,
        signatures: Vec::new(),
    };
    tx.hash = tx.compute_hash();
    tx.signatures = sign_with(from, signers, &tx.signing_bytes());
    Transaction::Transfer(tx)
}

fn block(height: u64, transactions: Vec<Transaction>) -> Block {
    Block {
        height,
        timestamp: NOW,
        oracle: None,
        transactions,
    }
}

#[test]
fn transfer_settles_and_charges_fee() {
    let state = genesis_state();
    let outcome = process_block(
        &state,
        &block(1, vec![transfer("IND", "BRA", 40_000, 0, &[0, 1])]),
        &Ed25519Verifier,
    )
    .unwrap();

    assert_eq!(outcome.committed.len(), 1);
    assert!(outcome.rejected.is_empty());

    let next = &outcome.state;
    // 40,000 transferred plus the 10-unit standard fee
    assert_eq!(
        next.ledger.get_balance(&GovernmentId::new("IND")).unwrap(),
        Amount::new(959_990)
    );
    assert_eq!(
        next.ledger.get_balance(&GovernmentId::new("BRA")).unwrap(),
        Amount::new(540_000)
    );
    assert_eq!(
        next.ledger.reserve(),
        state.ledger.reserve().saturating_add(Amount::new(10))
    );
    next.ledger.check_conservation().unwrap();

    // the input state is untouched
    assert_eq!(
        state.ledger.get_balance(&GovernmentId::new("IND")).unwrap(),
        Amount::new(1_000_000)
    );
}

#[test]
fn urgency_scales_the_fee() {
    let state = genesis_state();
    let mut tx = TransferTx {
        hash: TxHash::ZERO,
        from: GovernmentId::new("IND"),
        to: GovernmentId::new("BRA"),
        amount: Amount::new(1_000),
        purpose: Purpose::EmergencyAid {
            disaster_reference: "EQ-2026-117".into(),
        },
        urgency: UrgencyLevel::Emergency,
        sequence: 0,
        timestamp: NOW,
        signatures: Vec::new(),
    };
    tx.hash = tx.compute_hash();
    tx.signatures = sign_with("IND", &[0, 1], &tx.signing_bytes());

    let outcome = process_block(
        &state,
        &block(1, vec![Transaction::Transfer(tx)]),
        &Ed25519Verifier,
    )
    .unwrap();
    // base fee 10 × emergency multiplier 5
    assert_eq!(
        outcome
            .state
            .ledger
            .get_balance(&GovernmentId::new("IND"))
            .unwrap(),
        Amount::new(1_000_000 - 1_000 - 50)
    );
}

#[test]
fn replayed_transaction_rejected_without_double_debit() {
    let state = genesis_state();
    let tx = transfer("IND", "BRA", 40_000, 0, &[0, 1]);
    let outcome = process_block(
        &state,
        &block(1, vec![tx.clone(), tx.clone()]),
        &Ed25519Verifier,
    )
    .unwrap();

    assert_eq!(outcome.committed.len(), 1);
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].reason.contains("out of order"));
    // debited exactly once
    assert_eq!(
        outcome
            .state
            .ledger
            .get_balance(&GovernmentId::new("IND"))
            .unwrap(),
        Amount::new(959_990)
    );
}

#[test]
fn sequences_must_arrive_in_order() {
    let state = genesis_state();
    // sequence 1 before sequence 0
    let outcome = process_block(
        &state,
        &block(
            1,
            vec![
                transfer("IND", "BRA", 100, 1, &[0, 1]),
                transfer("IND", "BRA", 100, 0, &[0, 1]),
            ],
        ),
        &Ed25519Verifier,
    )
    .unwrap();
    assert_eq!(outcome.committed.len(), 1);
    assert_eq!(outcome.rejected.len(), 1);
}

#[test]
fn threshold_not_met_rejected() {
    let state = genesis_state();
    let outcome = process_block(
        &state,
        &block(1, vec![transfer("IND", "BRA", 100, 0, &[0])]),
        &Ed25519Verifier,
    )
    .unwrap();
    assert!(outcome.committed.is_empty());
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(
        outcome
            .state
            .ledger
            .get_balance(&GovernmentId::new("IND"))
            .unwrap(),
        Amount::new(1_000_000)
    );
}

#[test]
fn overdraw_including_fee_rejected() {
    let state = genesis_state();
    // amount leaves nothing for the fee
    let outcome = process_block(
        &state,
        &block(1, vec![transfer("IND", "BRA", 1_000_000, 0, &[0, 1])]),
        &Ed25519Verifier,
    )
    .unwrap();
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].reason.contains("insufficient balance"));
    outcome.state.ledger.check_conservation().unwrap();
}

#[test]
fn mint_and_bridge_in_one_block() {
    let state = genesis_state();

    let mut mint = MintTx {
        hash: TxHash::ZERO,
        source: GovernmentId::new("IND"),
        amount: Amount::new(100_000), // 1% of 10M supply, under the 2% cap
        dao_approval_pct: 70,
        gdp_growth_positive: true,
        sequence: 0,
        timestamp: NOW,
        signatures: Vec::new(),
    };
    mint.hash = mint.compute_hash();
    mint.signatures = sign_with("IND", &[0, 1, 2], &mint.signing_bytes());

    let mut convert = BridgeConvertTx {
        hash: TxHash::ZERO,
        source: GovernmentId::new("BRA"),
        amount: Amount::new(20_000), // cap: 5% of 500k = 25k
        sequence: 0,
        timestamp: NOW,
        signatures: Vec::new(),
    };
    convert.hash = convert.compute_hash();
    convert.signatures = sign_with("BRA", &[0, 1], &convert.signing_bytes());

    let block = Block {
        height: 1,
        timestamp: NOW,
        oracle: Some(OraclePrice {
            price: 3 * PRICE_SCALE / 2, // 1 VGV = 1.5 citizen units
            timestamp: NOW,
        }),
        transactions: vec![Transaction::Mint(mint), Transaction::BridgeConvert(convert)],
    };

    let outcome = process_block(&state, &block, &Ed25519Verifier).unwrap();
    assert_eq!(outcome.committed.len(), 2, "{:?}", outcome.rejected);

    let next = &outcome.state;
    assert_eq!(
        next.ledger.supply().total_supply(),
        Amount::new(10_100_000)
    );
    assert_eq!(next.ledger.supply().minted_in(2026), Amount::new(100_000));
    // BRA paid 20,000 escrow + 10 fee
    assert_eq!(
        next.ledger.get_balance(&GovernmentId::new("BRA")).unwrap(),
        Amount::new(479_990)
    );
    assert_eq!(
        next.bridge
            .window(&GovernmentId::new("BRA"))
            .map(|w| w.converted),
        Some(Amount::new(20_000))
    );
    next.ledger.check_conservation().unwrap();
}

#[test]
fn mint_above_annual_cap_rejected() {
    let state = genesis_state();
    let mut mint = MintTx {
        hash: TxHash::ZERO,
        source: GovernmentId::new("IND"),
        amount: Amount::new(300_000), // 3% of 10M supply
        dao_approval_pct: 90,
        gdp_growth_positive: true,
        sequence: 0,
        timestamp: NOW,
        signatures: Vec::new(),
    };
    mint.hash = mint.compute_hash();
    mint.signatures = sign_with("IND", &[0, 1], &mint.signing_bytes());

    let outcome = process_block(
        &state,
        &block(1, vec![Transaction::Mint(mint)]),
        &Ed25519Verifier,
    )
    .unwrap();
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].reason.contains("annual cap"));
    assert_eq!(
        outcome.state.ledger.supply().total_supply(),
        Amount::new(10_000_000)
    );
}

#[test]
fn conservation_holds_across_chained_blocks() {
    let mut state = genesis_state();
    for height in 1..=5 {
        let outcome = process_block(
            &state,
            &block(
                height,
                vec![transfer("IND", "BRA", 1_000 * height as u128, height - 1, &[0, 1])],
            ),
            &Ed25519Verifier,
        )
        .unwrap();
        assert_eq!(outcome.committed.len(), 1);
        state = outcome.state;
        state.ledger.check_conservation().unwrap();
    }
    assert_eq!(
        state
            .ledger
            .account(&GovernmentId::new("IND"))
            .unwrap()
            .next_sequence,
        5
    );
}

#[test]
fn governance_suspension_blocks_settlement() {
    let mut state = genesis_state();
    let deadline = Timestamp::new(NOW.as_secs() + 30 * 3_600);

    let id = open_governance_request(
        &mut state,
        &GovernmentId::new("IND"),
        GovernanceAction::SuspendGovernment(GovernmentId::new("BRA")),
        NOW,
        deadline,
    )
    .unwrap();

    let keys = official_keys("IND");
    let bytes = state.requests.get(&id).unwrap().signing_bytes();
    for (official, kp) in keys.iter().take(2) {
        submit_governance_signature(
            &mut state,
            &id,
            official.clone(),
            sign_message(&bytes, &kp.private),
            NOW,
            &Ed25519Verifier,
        )
        .unwrap();
    }
    execute_approved(&mut state, &id, NOW).unwrap();

    // BRA can no longer send or receive
    let outcome = process_block(
        &state,
        &block(1, vec![transfer("IND", "BRA", 100, 0, &[0, 1])]),
        &Ed25519Verifier,
    )
    .unwrap();
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].reason.contains("suspended"));
}

#[test]
fn governance_can_change_parameters() {
    let mut state = genesis_state();
    let deadline = Timestamp::new(NOW.as_secs() + 30 * 3_600);

    let id = open_governance_request(
        &mut state,
        &GovernmentId::new("IND"),
        GovernanceAction::SetParam {
            param: vgv_types::GovernableParam::BaseFee,
            value: 100,
        },
        NOW,
        deadline,
    )
    .unwrap();

    let keys = official_keys("IND");
    let bytes = state.requests.get(&id).unwrap().signing_bytes();
    for (official, kp) in keys.iter().take(2) {
        submit_governance_signature(
            &mut state,
            &id,
            official.clone(),
            sign_message(&bytes, &kp.private),
            NOW,
            &Ed25519Verifier,
        )
        .unwrap();
    }
    execute_approved(&mut state, &id, NOW).unwrap();
    assert_eq!(state.params.base_fee, 100);

    // the new fee applies immediately
    let outcome = process_block(
        &state,
        &block(1, vec![transfer("IND", "BRA", 1_000, 0, &[0, 1])]),
        &Ed25519Verifier,
    )
    .unwrap();
    assert_eq!(
        outcome
            .state
            .ledger
            .get_balance(&GovernmentId::new("IND"))
            .unwrap(),
        Amount::new(1_000_000 - 1_000 - 100)
    );
}

#[test]
fn allocation_credits_from_reserve() {
    let mut state = genesis_state();
    let mut indicators = BTreeMap::new();
    indicators.insert(GovernmentId::new("IND"), IndicatorSet::uniform(2));
    indicators.insert(GovernmentId::new("BRA"), IndicatorSet::uniform(2));

    let reserve_before = state.ledger.reserve();
    let events = apply_allocation(&mut state, &indicators, Amount::new(210_000)).unwrap();
    assert_eq!(events.len(), 2);

    // IND is a founding member: 110/210 of the pool is 110,000
    assert_eq!(
        state.ledger.get_balance(&GovernmentId::new("IND")).unwrap(),
        Amount::new(1_110_000)
    );
    assert_eq!(
        state.ledger.get_balance(&GovernmentId::new("BRA")).unwrap(),
        Amount::new(600_000)
    );
    assert_eq!(
        state.ledger.reserve(),
        reserve_before.checked_sub(Amount::new(210_000)).unwrap()
    );
    state.ledger.check_conservation().unwrap();
}
