#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;
use tiny_http::{Method, Response, Server, StatusCode};

use cat_wallet_adapters::{InMemoryWalletService, WalletServiceConfig};
use cat_wallet_core::{
    Account, CollectionInfo, FeeOption, FeeSummary, TokenBalance, WalletContext,
};

pub const OWNER: &str = "bc1pcatowner";
pub const COLLECTION_ID: &str = "9a3f0c5e7b1d2f4a6c8e0b2d4f6a8c0e2b4d6f8a0c2e4b6d8f0a2c4e6b8d0f2a_0";

pub fn owner_context() -> WalletContext {
    WalletContext {
        account: Account {
            address: OWNER.to_owned(),
            alias: "Main".to_owned(),
        },
        ..WalletContext::default()
    }
}

pub fn collection_info() -> CollectionInfo {
    CollectionInfo {
        collection_id: COLLECTION_ID.to_owned(),
        name: "Cat Punks".to_owned(),
        symbol: "CPUNK".to_owned(),
        description: String::new(),
        max: "10000".to_owned(),
        premine: "100".to_owned(),
    }
}

pub fn balance(n: u32) -> TokenBalance {
    TokenBalance {
        token_id: format!("token-{n}"),
        name: format!("token {n}"),
        symbol: format!("T{n}"),
        amount: format!("{}", n * 1_000),
        decimals: 3,
    }
}

pub fn fee_summary() -> FeeSummary {
    FeeSummary {
        list: vec![
            FeeOption::preset("Slow", 1.0),
            FeeOption::preset("Avg", 5.0),
            FeeOption::preset("Fast", 10.0),
        ],
    }
}

pub fn seeded_service() -> InMemoryWalletService {
    InMemoryWalletService::new()
        .with_fee_summary(fee_summary())
        .with_collection(
            collection_info(),
            OWNER,
            vec!["1".to_owned(), "2".to_owned()],
        )
        .with_balances(OWNER, (1..=5).map(balance).collect())
}

pub fn config_for(base_url: String) -> WalletServiceConfig {
    WalletServiceConfig {
        service_base_url: base_url,
        request_timeout_ms: 5_000,
        use_fixtures: false,
    }
}

pub fn spawn_mock_server(calls: Arc<Mutex<Vec<String>>>) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());

    let join = thread::spawn(move || {
        for _ in 0..16 {
            let req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let method = req.method().clone();
            let path = req.url().to_owned();
            if let Ok(mut g) = calls.lock() {
                g.push(path.clone());
            }

            let (code, payload) = match (method, path.as_str()) {
                (Method::Get, "/v5/default/fee-summary") => (
                    200,
                    json!({"code": 0, "msg": "ok", "data": {"list": [
                        {"title": "Slow", "desc": "About 1 hour", "feeRate": 1},
                        {"title": "Avg", "desc": "About 30 minutes", "feeRate": 5},
                        {"title": "Fast", "desc": "About 10 minutes", "feeRate": 10}
                    ]}}),
                ),
                (Method::Get, p) if p.starts_with("/v5/cat721/collection/known_0/address/") => (
                    200,
                    json!({"code": 0, "msg": "ok", "data": {
                        "collectionInfo": {
                            "collectionId": "known_0",
                            "name": "Known",
                            "symbol": "KNW",
                            "description": "a known collection",
                            "max": "500",
                            "premine": "5"
                        },
                        "localIds": ["3", "4"]
                    }}),
                ),
                (Method::Get, p) if p.starts_with("/v5/cat721/collection/") => (
                    200,
                    json!({"code": 0, "msg": "ok", "data": {"collectionInfo": null, "localIds": []}}),
                ),
                (Method::Get, p) if p.starts_with("/v5/cat20/address/limited/") => (
                    200,
                    json!({"code": -1, "msg": "rate limited", "data": null}),
                ),
                (Method::Get, p) if p.starts_with("/v5/cat20/address/broken/") => {
                    (500, json!({"error": "internal"}))
                }
                (Method::Get, p) if p.starts_with("/v5/cat20/address/garbled/") => {
                    (200, json!({"unexpected": true}))
                }
                (Method::Get, p) if p.starts_with("/v5/cat20/address/") => (
                    200,
                    json!({"code": 0, "msg": "ok", "data": {
                        "list": [{
                            "tokenId": "token-1",
                            "name": "token 1",
                            "symbol": "T1",
                            "amount": "1000",
                            "decimals": 3
                        }],
                        "total": 7
                    }}),
                ),
                _ => (404, json!({"error": "not found"})),
            };

            let response =
                Response::from_string(payload.to_string()).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    (addr, join)
}
