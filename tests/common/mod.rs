#![allow(dead_code)]

use mizan::model::Transaction;
use serde_json::Value;
use serde_json::json;

pub const WALLET: &str = "0x742d35cc6634c0532925a3b844bc454e4438f44e";
pub const API_KEY: &str = "TESTKEY1234567890";
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Deterministic counterparty address for `index`.
pub fn counterparty(index: usize) -> String {
    format!("0x{:040x}", index + 1)
}

pub fn eth(amount: u128) -> u128 {
    amount * WEI_PER_ETH
}

pub fn tx(
    hash: &str,
    from: &str,
    to: Option<&str>,
    value_wei: u128,
    timestamp: i64,
) -> Transaction {
    Transaction::new(hash, from, to.map(str::to_string), value_wei, timestamp)
}

/// Raw Etherscan `txlist` record as the provider serializes it.
pub fn raw_record(
    hash: &str,
    from: &str,
    to: &str,
    value_wei: u128,
    timestamp: i64,
) -> Value {
    json!({
        "blockNumber": "19000000",
        "timeStamp": timestamp.to_string(),
        "hash": hash,
        "nonce": "1",
        "from": from,
        "to": to,
        "value": value_wei.to_string(),
        "gas": "21000",
        "gasPrice": "20000000000",
        "isError": "0",
        "input": "0x",
        "contractAddress": "",
    })
}

pub fn ok_envelope(records: Vec<Value>) -> Value {
    json!({ "status": "1", "message": "OK", "result": records })
}

/// 15 outgoing transfers from the wallet, two of them above 10 ETH.
pub fn fifteen_transfers(now: i64) -> Vec<Transaction> {
    (0..15)
        .map(|i| {
            let value = match i {
                3 => eth(12),
                9 => eth(25),
                _ => eth(1),
            };
            tx(
                &format!("0x{:064x}", i + 1),
                WALLET,
                Some(&counterparty(i % 5)),
                value,
                now - (i as i64) * 3_600 * 6,
            )
        })
        .collect()
}
