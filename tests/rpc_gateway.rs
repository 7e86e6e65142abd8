//! Gateway-level tests: request shaping and response unwrapping against a
//! mocked Solana JSON-RPC endpoint.

use mockito::Matcher;
use serde_json::{json, Value};
use url::Url;

use solana_mcp_server::solana::{Commitment, RpcError, SolanaRpcClient};

fn mock_client() -> SolanaRpcClient {
    SolanaRpcClient::new(
        Url::parse(&mockito::server_url()).expect("mock server url"),
        Commitment::default(),
    )
}

fn unreachable_client() -> SolanaRpcClient {
    SolanaRpcClient::new(
        Url::parse("http://127.0.0.1:9/").expect("static url"),
        Commitment::default(),
    )
}

#[tokio::test]
async fn rent_exemption_includes_scaled_sol() {
    let _m = mockito::mock("POST", "/")
        .match_body(Matcher::PartialJson(
            json!({"method": "getMinimumBalanceForRentExemption", "params": [165]}),
        ))
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": 890_880}).to_string())
        .create();

    let value = mock_client()
        .get_minimum_balance_for_rent_exemption(165)
        .await
        .expect("result");
    assert_eq!(value["minBalance"], 890_880);
    assert_eq!(value["lamports"], 890_880);
    assert_eq!(value["sol"].as_f64().unwrap(), 890_880f64 / 1e9);
}

#[tokio::test]
async fn latest_blockhash_strips_the_context_envelope() {
    let _m = mockito::mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "getLatestBlockhash"})))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "context": {"slot": 301},
                    "value": {
                        "blockhash": "J7rBdM6AecPDEZp8aPq5iPSNKVkU5Q76F3oAV4eW5wsW",
                        "lastValidBlockHeight": 280
                    }
                }
            })
            .to_string(),
        )
        .create();

    let value = mock_client().get_latest_blockhash(&None).await.expect("result");
    assert_eq!(
        value,
        json!({
            "blockhash": "J7rBdM6AecPDEZp8aPq5iPSNKVkU5Q76F3oAV4eW5wsW",
            "lastValidBlockHeight": 280
        })
    );
}

#[tokio::test]
async fn account_info_unwraps_to_null_for_missing_accounts() {
    let m = mockito::mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"method": "getAccountInfo"})),
            Matcher::Regex("\"encoding\":\"base64\"".to_string()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            json!({"jsonrpc": "2.0", "id": 1, "result": {"context": {"slot": 9}, "value": null}})
                .to_string(),
        )
        .create();

    let value = mock_client()
        .get_account_info("11111111111111111111111111111111", &None)
        .await
        .expect("result");
    assert_eq!(value, Value::Null);
    m.assert();
}

#[tokio::test]
async fn multiple_accounts_reject_a_bad_address_before_any_network_call() {
    let addresses = vec![
        "11111111111111111111111111111111".to_string(),
        "definitely not base58".to_string(),
    ];
    let err = unreachable_client()
        .get_multiple_accounts(&addresses, &None)
        .await
        .expect_err("must fail on the bad address");
    assert!(matches!(err, RpcError::Pubkey(_)), "{}", err);
}

#[tokio::test]
async fn airdrop_wraps_the_returned_signature() {
    let _m = mockito::mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "requestAirdrop"})))
        .with_header("content-type", "application/json")
        .with_body(
            json!({"jsonrpc": "2.0", "id": 1, "result": "2id3YC2jK9G5Wo2phDx4gJVAew8DcY5NAojnVuao8rkxwPYPe8cSwE5GzhEgJA2y8fVjDEo6iR6ykBvDxrTQrtpb"})
                .to_string(),
        )
        .create();

    let value = mock_client()
        .request_airdrop("Vote111111111111111111111111111111111111111", 1_000_000_000)
        .await
        .expect("result");
    assert_eq!(
        value["signature"],
        "2id3YC2jK9G5Wo2phDx4gJVAew8DcY5NAojnVuao8rkxwPYPe8cSwE5GzhEgJA2y8fVjDEo6iR6ykBvDxrTQrtpb"
    );
}

#[tokio::test]
async fn health_queries_the_node() {
    let _m = mockito::mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "getHealth"})))
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "ok"}).to_string())
        .create();

    let value = mock_client().get_health().await.expect("result");
    assert_eq!(value, json!({"health": "ok"}));
}

#[tokio::test]
async fn node_errors_keep_their_code_and_message() {
    let _m = mockito::mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "getSupply"})))
        .with_header("content-type", "application/json")
        .with_body(
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32601, "message": "Method not found"}})
                .to_string(),
        )
        .create();

    let err = mock_client().get_supply(&None).await.expect_err("rpc error");
    match err {
        RpcError::Node { code, message } => {
            assert_eq!(code, -32601);
            assert_eq!(message, "Method not found");
        }
        other => panic!("expected RpcError::Node, got {}", other),
    }
}
