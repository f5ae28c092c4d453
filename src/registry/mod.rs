use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::blockchain::{Block, Blockchain};
use crate::error::LedgerError;
use crate::token::TokenLedger;

/// A verified restoration-project submission. Unknown extra fields are
/// carried through unchanged into the block payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub project_name: String,
    pub location: String,
    pub area_ha: f64,
    pub species: String,
    #[serde(rename = "CO2_absorbed_tonnes")]
    pub co2_absorbed_tonnes: u64,
    pub submitted_by: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Record a submission: mine it into the ledger, then credit the
/// submitter with one token per tonne of CO2 absorbed. The credit step
/// only runs after a successful append; a mining failure leaves both
/// ledgers untouched.
pub fn ingest(
    chain: &mut Blockchain,
    tokens: &mut TokenLedger,
    submission: Submission,
) -> Result<Block, LedgerError> {
    let submitter = submission.submitted_by.clone();
    let amount = submission.co2_absorbed_tonnes;

    let payload = serde_json::to_value(&submission).expect("serialize submission");
    let block = chain.append(payload)?.clone();

    tokens.issue(&submitter, amount);
    info!(
        "REGISTRY - sealed block #{} (hash={}) and issued {} {} to {}",
        block.index,
        block.hash,
        amount,
        tokens.symbol(),
        submitter
    );

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::{Submission, ingest};
    use crate::blockchain::Blockchain;
    use crate::token::TokenLedger;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn mangrove_submission() -> Submission {
        Submission {
            project_name: "Mangrove Restoration".into(),
            location: "Goa".into(),
            area_ha: 5.0,
            species: "Rhizophora".into(),
            co2_absorbed_tonnes: 50,
            submitted_by: "NGO_1".into(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn ingest_appends_block_and_credits_submitter() {
        let mut chain = Blockchain::new(2);
        let mut tokens = TokenLedger::new();

        let block = ingest(&mut chain, &mut tokens, mangrove_submission()).unwrap();
        assert_eq!(block.index, 1);
        assert!(block.hash.starts_with("00"));
        assert_eq!(block.payload["project_name"], "Mangrove Restoration");
        assert_eq!(block.payload["CO2_absorbed_tonnes"], 50);

        assert_eq!(tokens.balance_of("NGO_1"), 50);
        assert_eq!(tokens.total_supply(), 50);
        assert!(chain.is_valid_chain().is_ok());
    }

    #[test]
    fn ingest_accumulates_across_submissions() {
        let mut chain = Blockchain::new(1);
        let mut tokens = TokenLedger::new();

        ingest(&mut chain, &mut tokens, mangrove_submission()).unwrap();

        let mut second = mangrove_submission();
        second.project_name = "Seagrass Planting".into();
        second.location = "Kerala".into();
        second.species = "Halodule".into();
        second.co2_absorbed_tonnes = 30;
        second.submitted_by = "Community_1".into();
        ingest(&mut chain, &mut tokens, second).unwrap();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.projects().len(), 2);
        assert_eq!(tokens.balance_of("NGO_1"), 50);
        assert_eq!(tokens.balance_of("Community_1"), 30);
        assert_eq!(tokens.total_supply(), 80);
    }

    #[test]
    fn extra_fields_pass_through_to_payload() {
        let mut chain = Blockchain::new(1);
        let mut tokens = TokenLedger::new();

        let mut submission = mangrove_submission();
        submission
            .extra
            .insert("verifier".into(), json!("NCCR_Admin"));

        let block = ingest(&mut chain, &mut tokens, submission).unwrap();
        assert_eq!(block.payload["verifier"], "NCCR_Admin");
    }

    #[test]
    fn mining_failure_credits_nothing() {
        let mut chain = Blockchain::with_mining_guard(8, 3);
        let mut tokens = TokenLedger::new();

        assert!(ingest(&mut chain, &mut tokens, mangrove_submission()).is_err());
        assert_eq!(chain.len(), 1);
        assert_eq!(tokens.total_supply(), 0);
    }

    #[test]
    fn submission_round_trips_renamed_field() {
        let raw = json!({
            "project_name": "Coral Reef Restoration",
            "location": "Andaman",
            "area_ha": 2,
            "species": "Acropora",
            "CO2_absorbed_tonnes": 20,
            "submitted_by": "NGO_1"
        });
        let s: Submission = serde_json::from_value(raw).unwrap();
        assert_eq!(s.co2_absorbed_tonnes, 20);
        let back = serde_json::to_value(&s).unwrap();
        assert_eq!(back["CO2_absorbed_tonnes"], 20);
    }
}
