//! End-to-end pipeline scenarios against in-memory collaborators.

use std::cell::RefCell;

use assert_matches::assert_matches;
use attest_client::codec::ReviewInstruction;
use attest_client::config::ClientConfig;
use attest_client::error::{ClientError, ClientResult};
use attest_client::identity::IdentityStore;
use attest_client::ledger::LedgerNode;
use attest_client::pda::{derive_review_address, review_seeds};
use attest_client::pipeline::{self, ReviewRequest};
use solana_sdk::hash::Hash;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

#[derive(Default)]
struct MemoryStore {
    secret: RefCell<Option<Vec<u8>>>,
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> ClientResult<Option<Vec<u8>>> {
        Ok(self.secret.borrow().clone())
    }

    fn save(&self, secret: &[u8]) -> ClientResult<()> {
        *self.secret.borrow_mut() = Some(secret.to_vec());
        Ok(())
    }
}

struct MockLedger {
    balance: u64,
    reject_with: Option<String>,
    top_ups: RefCell<Vec<u64>>,
    submitted: RefCell<Vec<Transaction>>,
}

impl MockLedger {
    fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            reject_with: None,
            top_ups: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }
}

impl LedgerNode for MockLedger {
    fn balance(&self, _owner: &Pubkey) -> ClientResult<u64> {
        Ok(self.balance)
    }

    fn request_top_up(&self, _owner: &Pubkey, lamports: u64) -> ClientResult<()> {
        self.top_ups.borrow_mut().push(lamports);
        Ok(())
    }

    fn latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(Hash::new_unique())
    }

    fn submit_and_confirm(&self, transaction: &Transaction) -> ClientResult<Signature> {
        if let Some(reason) = &self.reject_with {
            return Err(ClientError::SubmissionRejected(reason.clone()));
        }
        self.submitted.borrow_mut().push(transaction.clone());
        Ok(Signature::new_unique())
    }
}

fn request() -> ReviewRequest {
    ReviewRequest {
        subject_hash: "X-42".to_string(),
        output_count: 5,
        proof_label: "note".to_string(),
    }
}

#[test]
fn funded_run_submits_and_reports() {
    let store = MemoryStore::default();
    let ledger = MockLedger::with_balance(2 * LAMPORTS_PER_SOL);
    let config = ClientConfig::default();

    let receipt = pipeline::run(&store, &ledger, &config, request()).unwrap();

    // No top-up was needed.
    assert!(ledger.top_ups.borrow().is_empty());

    // The reporter string references the confirmed signature.
    assert!(receipt.explorer.contains(&receipt.signature.to_string()));

    // Exactly one transaction with one instruction went out.
    let submitted = ledger.submitted.borrow();
    assert_eq!(submitted.len(), 1);
    let message = &submitted[0].message;
    assert_eq!(message.instructions.len(), 1);

    // The payload on the wire decodes back to the original record.
    let record = ReviewInstruction::decode(&message.instructions[0].data).unwrap();
    assert_eq!(record, ReviewInstruction::submit("X-42", 5, "note"));
    assert_eq!(receipt.payload_len, record.encoded_len());

    // The derived address matches an offline re-derivation and is writable.
    let seeds = review_seeds(&receipt.reviewer, "X-42");
    let (expected, bump) = derive_review_address(&seeds, &config.program_id).unwrap();
    assert_eq!(receipt.review_address, expected);
    assert_eq!(receipt.bump, bump);
    assert!(message.account_keys.contains(&receipt.review_address));
}

#[test]
fn low_balance_requests_one_top_up_and_proceeds() {
    let store = MemoryStore::default();
    let ledger = MockLedger::with_balance(LAMPORTS_PER_SOL / 2);
    let config = ClientConfig::default();

    let receipt = pipeline::run(&store, &ledger, &config, request());

    assert!(receipt.is_ok());
    assert_eq!(
        *ledger.top_ups.borrow(),
        vec![config.funding.top_up_lamports]
    );
    assert_eq!(ledger.submitted.borrow().len(), 1);
}

#[test]
fn identity_is_stable_across_runs() {
    let store = MemoryStore::default();
    let ledger = MockLedger::with_balance(2 * LAMPORTS_PER_SOL);
    let config = ClientConfig::default();

    let first = pipeline::run(&store, &ledger, &config, request()).unwrap();
    let second = pipeline::run(&store, &ledger, &config, request()).unwrap();

    assert_eq!(first.reviewer, second.reviewer);
    // Same identity and subject means the same review address.
    assert_eq!(first.review_address, second.review_address);
    assert_eq!(first.bump, second.bump);
}

#[test]
fn rejection_propagates_without_retry() {
    let store = MemoryStore::default();
    let mut ledger = MockLedger::with_balance(2 * LAMPORTS_PER_SOL);
    ledger.reject_with = Some("insufficient funds for rent".to_string());
    let config = ClientConfig::default();

    let err = pipeline::run(&store, &ledger, &config, request()).unwrap_err();
    assert_matches!(err, ClientError::SubmissionRejected(_));
    assert!(ledger.submitted.borrow().is_empty());
}

#[test]
fn oversized_record_fails_before_any_network_submission() {
    let store = MemoryStore::default();
    let ledger = MockLedger::with_balance(2 * LAMPORTS_PER_SOL);
    let config = ClientConfig::default();

    let big = ReviewRequest {
        subject_hash: "X-42".to_string(),
        output_count: 5,
        proof_label: "n".repeat(config.payload_capacity),
    };

    let err = pipeline::run(&store, &ledger, &config, big).unwrap_err();
    assert_matches!(err, ClientError::BufferTooSmall { .. });
    assert!(ledger.submitted.borrow().is_empty());
}
