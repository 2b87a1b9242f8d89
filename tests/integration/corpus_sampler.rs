use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use slp_oracle::errors::SamplerError;
use slp_oracle::sampler::{CorpusSampler, SamplePlan};
use std::io::{BufRead, BufReader, Write};

use crate::common::mock_indexer::{txid, txid_body, MockIndexer};

const BASE: &str = "https://indexer.test/q/";

fn find_clause(url: &str) -> Value {
    let doc: Value =
        serde_json::from_slice(&STANDARD.decode(&url[BASE.len()..]).unwrap()).unwrap();
    doc["q"]["find"].clone()
}

#[tokio::test]
async fn test_full_run_queries_categories_in_order() -> Result<()> {
    let ids: Vec<String> = "abcdef".chars().map(txid).collect();
    let indexer = MockIndexer::new(vec![
        Some(txid_body(&[ids[0].as_str()])),
        Some(txid_body(&[ids[1].as_str()])),
        Some(txid_body(&[ids[2].as_str()])),
        Some(txid_body(&[ids[3].as_str()])),
        Some(txid_body(&[ids[4].as_str(), ids[5].as_str()])),
    ]);
    let sampler = CorpusSampler::new(indexer, BASE);

    let mut out = Vec::new();
    let written = sampler.run(&SamplePlan::all(1, 10_000), &mut out).await?;

    assert_eq!(written, 6);
    let lines: Vec<&str> = std::str::from_utf8(&out)?.lines().collect();
    assert_eq!(lines, ids.iter().map(String::as_str).collect::<Vec<_>>());

    let finds: Vec<Value> = sampler
        .transport()
        .requests()
        .iter()
        .map(|url| find_clause(url))
        .collect();
    assert_eq!(
        finds,
        vec![
            json!({ "slp.valid": false }),
            json!({ "slp.valid": true, "slp.detail.transactionType": "GENESIS" }),
            json!({ "slp.valid": true, "slp.detail.transactionType": "MINT" }),
            json!({ "slp.valid": true, "slp.detail.transactionType": "SEND" }),
            json!({}),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_first_failure_aborts_remaining_queries() {
    let a = txid('a');
    let indexer = MockIndexer::new(vec![
        Some(txid_body(&[a.as_str()])),
        None,
        Some(txid_body(&[txid('c').as_str()])),
    ]);
    let sampler = CorpusSampler::new(indexer, BASE);

    let mut out = Vec::new();
    let result = sampler.run(&SamplePlan::all(1, 10_000), &mut out).await;

    match result {
        Err(SamplerError::Status { predicate, .. }) => assert_eq!(predicate, "genesis"),
        other => panic!("expected Status error, got {:?}", other),
    }
    assert_eq!(sampler.transport().requests().len(), 2);
    // Lines from steps that completed before the failure are kept
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", a));
}

#[tokio::test]
async fn test_run_writes_corpus_file() -> Result<()> {
    let (a, b) = (txid('1'), txid('2'));
    let indexer = MockIndexer::new(vec![Some(txid_body(&[a.as_str(), b.as_str()]))]);
    let sampler = CorpusSampler::new(indexer, BASE);
    let plan = SamplePlan::all(1, 2)
        .into_iter()
        .filter(|step| step.predicate.is_broad())
        .collect::<Vec<_>>();

    let mut file = tempfile::NamedTempFile::new()?;
    let written = sampler.run(&plan, file.as_file_mut()).await?;
    file.flush()?;
    assert_eq!(written, 2);

    let reader = BufReader::new(std::fs::File::open(file.path())?);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    assert_eq!(lines, vec![a, b]);
    Ok(())
}

#[tokio::test]
async fn test_indexer_error_body_aborts_run() {
    let a = txid('a');
    let indexer = MockIndexer::new(vec![
        Some(txid_body(&[a.as_str()])),
        Some(r#"{"error":"query timed out"}"#.to_string()),
        Some(txid_body(&[txid('c').as_str()])),
    ]);
    let sampler = CorpusSampler::new(indexer, BASE);

    let mut out = Vec::new();
    let result = sampler.run(&SamplePlan::all(1, 10_000), &mut out).await;

    assert!(matches!(result, Err(SamplerError::InvalidResponse(_))));
    assert_eq!(sampler.transport().requests().len(), 2);
}
