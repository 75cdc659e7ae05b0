use alloy_primitives::{B256, Bytes, U64, U256, address, b256, bytes};
use anvil_rpc::{
    AnvilRpcClient, ContractCreator, ForkingOptions, InternalOperation, RpcClientError,
    TxpoolStatus,
};
use anvil_test_utils::{
    accounts::{ACCOUNT_0, ACCOUNT_1},
    rpc::{mock_error, mock_first_call},
};
use mockito::ServerGuard;
use serde_json::{Value, json};

const TX_HASH: B256 = b256!("c008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933022222");

async fn setup() -> (ServerGuard, AnvilRpcClient) {
    let server = mockito::Server::new_async().await;
    let client = AnvilRpcClient::new(&server.url()).expect("valid url");
    (server, client)
}

#[tokio::test]
async fn impersonation() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_impersonateAccount",
        json!([ACCOUNT_0]),
        Value::Null,
    )
    .await;
    client.impersonate_account(ACCOUNT_0).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_stopImpersonatingAccount",
        json!([ACCOUNT_0]),
        json!(true),
    )
    .await;
    client.stop_impersonating_account(ACCOUNT_0).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_autoImpersonateAccount",
        json!([true]),
        Value::Null,
    )
    .await;
    client.auto_impersonate_account(true).await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn automine() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "anvil_getAutomine", json!([]), json!(true)).await;
    assert!(client.get_automine().await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "evm_setAutomine", json!([false]), Value::Null).await;
    client.set_automine(false).await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn blobs() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobByHash",
        json!([TX_HASH]),
        json!("0x0102"),
    )
    .await;
    assert_eq!(
        client.get_blob_by_hash(TX_HASH).await?,
        Some(bytes!("0102"))
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobByHash",
        json!([TX_HASH]),
        Value::Null,
    )
    .await;
    assert_eq!(client.get_blob_by_hash(TX_HASH).await?, None);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobsByTransactionHash",
        json!([TX_HASH]),
        json!(["0x01", "0x02"]),
    )
    .await;
    assert_eq!(
        client.get_blobs_by_transaction_hash(TX_HASH).await?,
        Some(vec![bytes!("01"), bytes!("02")])
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let sidecars = json!([{ "blob": "0x01", "kzgCommitment": "0x02" }]);
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobSidecarsByBlockId",
        json!(["latest"]),
        sidecars.clone(),
    )
    .await;
    assert_eq!(
        client.get_blob_sidecars_by_block_id("latest").await?,
        sidecars
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn blobs_by_block_id_sends_filter_only_when_present() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobsByBlockId",
        json!(["0x10"]),
        json!(["0x01"]),
    )
    .await;
    assert_eq!(
        client.get_blobs_by_block_id("0x10", &[]).await?,
        json!(["0x01"])
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_getBlobsByBlockId",
        json!(["0x10", [TX_HASH]]),
        json!([]),
    )
    .await;
    assert_eq!(
        client.get_blobs_by_block_id("0x10", &[TX_HASH]).await?,
        json!([])
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn mine_trims_absent_parameters() -> Result<(), RpcClientError> {
    let cases = [
        (None, None, json!([])),
        (Some(U256::from(3)), None, json!(["0x3"])),
        (Some(U256::from(3)), Some(U256::ZERO), json!(["0x3", "0x0"])),
        (None, Some(U256::from(12)), json!([null, "0xc"])),
    ];

    for (blocks, interval, params) in cases {
        let (mut server, client) = setup().await;
        let mock = mock_first_call(&mut server, "anvil_mine", params, json!("0x0")).await;
        client.mine(blocks, interval).await?;
        mock.assert_async().await;
    }

    Ok(())
}

#[tokio::test]
async fn mining_controls() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "evm_setIntervalMining",
        json!(["0x5"]),
        Value::Null,
    )
    .await;
    client.set_interval_mining(5).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "evm_mine", json!([]), json!("0x0")).await;
    client.evm_mine(None).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "evm_mine",
        json!(["0x6553f100"]),
        json!("0x0"),
    )
    .await;
    client.evm_mine(Some(1_700_000_000)).await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn mempool_and_forking() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_dropTransaction",
        json!([TX_HASH]),
        json!(TX_HASH),
    )
    .await;
    assert_eq!(client.drop_transaction(TX_HASH).await?, Some(TX_HASH));
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "anvil_reset", json!([]), Value::Null).await;
    client.reset(None).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_reset",
        json!([{ "forking": { "jsonRpcUrl": "https://example.org", "blockNumber": 20_000_000 } }]),
        Value::Null,
    )
    .await;
    client
        .reset(Some(&ForkingOptions {
            json_rpc_url: Some("https://example.org".to_string()),
            block_number: Some(20_000_000),
        }))
        .await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_reset",
        json!([{ "forking": { "blockNumber": 1 } }]),
        Value::Null,
    )
    .await;
    client
        .reset(Some(&ForkingOptions {
            json_rpc_url: None,
            block_number: Some(1),
        }))
        .await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setRpcUrl",
        json!(["https://example.org"]),
        Value::Null,
    )
    .await;
    client.set_rpc_url("https://example.org").await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn account_state() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setBalance",
        json!([ACCOUNT_1, "0xff"]),
        Value::Null,
    )
    .await;
    client.set_balance(ACCOUNT_1, U256::from(255)).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let code = bytes!("6080604052");
    let mock = mock_first_call(
        &mut server,
        "anvil_setCode",
        json!([ACCOUNT_1, "0x6080604052"]),
        Value::Null,
    )
    .await;
    client.set_code(ACCOUNT_1, &code).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setNonce",
        json!([ACCOUNT_1, "0x0"]),
        Value::Null,
    )
    .await;
    client.set_nonce(ACCOUNT_1, 0).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let value = b256!("00000000000000000000000000000000000000000000000000000000000000ff");
    let mock = mock_first_call(
        &mut server,
        "anvil_setStorageAt",
        json!([ACCOUNT_1, "0x1", value]),
        json!(true),
    )
    .await;
    assert!(client.set_storage_at(ACCOUNT_1, U256::from(1), value).await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setCoinbase",
        json!([ACCOUNT_1]),
        Value::Null,
    )
    .await;
    client.set_coinbase(ACCOUNT_1).await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn node_settings() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setLoggingEnabled",
        json!([false]),
        Value::Null,
    )
    .await;
    client.set_logging_enabled(false).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setMinGasPrice",
        json!(["0x3b9aca00"]),
        Value::Null,
    )
    .await;
    client.set_min_gas_price(U256::from(1_000_000_000u64)).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setNextBlockBaseFeePerGas",
        json!(["0x0"]),
        Value::Null,
    )
    .await;
    client.set_next_block_base_fee_per_gas(U256::ZERO).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setChainId",
        json!(["0x7a69"]),
        Value::Null,
    )
    .await;
    client.set_chain_id(31337).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "evm_setBlockGasLimit",
        json!(["0x1c9c380"]),
        json!(true),
    )
    .await;
    client.set_block_gas_limit(U256::from(30_000_000u64)).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "anvil_enableTraces", json!([]), Value::Null).await;
    client.enable_traces().await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn state_dump_and_info() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "anvil_dumpState", json!([]), json!("0x1f8b")).await;
    let state = client.dump_state().await?;
    assert_eq!(state, bytes!("1f8b"));
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_loadState",
        json!(["0x1f8b"]),
        json!(true),
    )
    .await;
    assert!(client.load_state(&state).await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let info = json!({ "currentBlockNumber": 0, "hardFork": "prague" });
    let mock = mock_first_call(&mut server, "anvil_nodeInfo", json!([]), info.clone()).await;
    assert_eq!(Value::Object(client.node_info().await?), info);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let metadata = json!({ "chainId": 31337, "clientVersion": "anvil/v1.0.0" });
    let mock = mock_first_call(&mut server, "anvil_metadata", json!([]), metadata.clone()).await;
    assert_eq!(Value::Object(client.metadata().await?), metadata);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn snapshots_and_time() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "evm_snapshot", json!([]), json!("0x1")).await;
    let snapshot_id = client.snapshot().await?;
    assert_eq!(snapshot_id, U256::from(1));
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "evm_revert", json!(["0x1"]), json!(true)).await;
    assert!(client.revert(snapshot_id).await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "evm_increaseTime", json!([3600]), json!(3600)).await;
    assert_eq!(client.increase_time(3600).await?, 3600);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "evm_setNextBlockTimestamp",
        json!(["0x6553f100"]),
        Value::Null,
    )
    .await;
    client.set_next_block_timestamp(1_700_000_000).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setBlockTimestampInterval",
        json!(["0xc"]),
        Value::Null,
    )
    .await;
    client.set_block_timestamp_interval(12).await?;
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_removeBlockTimestampInterval",
        json!([]),
        json!(true),
    )
    .await;
    assert!(client.remove_block_timestamp_interval().await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "anvil_setTime",
        json!([1_700_000_000]),
        json!(0),
    )
    .await;
    assert_eq!(client.set_time(1_700_000_000).await?, 0);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn eth_methods() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "eth_blockNumber", json!([]), json!("0x10")).await;
    assert_eq!(client.block_number().await?, 16);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "eth_chainId", json!([]), json!("0x7a69")).await;
    assert_eq!(client.chain_id().await?, 31337);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "web3_clientVersion",
        json!([]),
        json!("anvil/v1.0.0"),
    )
    .await;
    assert_eq!(client.client_version().await?, "anvil/v1.0.0");
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let transaction = json!({ "from": ACCOUNT_0, "to": ACCOUNT_1, "value": "0x1" });
    let mock = mock_first_call(
        &mut server,
        "eth_sendUnsignedTransaction",
        json!([transaction.clone()]),
        json!(TX_HASH),
    )
    .await;
    assert_eq!(client.send_unsigned_transaction(&transaction).await?, TX_HASH);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn txpool() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "txpool_status",
        json!([]),
        json!({ "pending": "0x2", "queued": "0x0" }),
    )
    .await;
    assert_eq!(
        client.txpool_status().await?,
        TxpoolStatus {
            pending: U64::from(2),
            queued: U64::ZERO,
        }
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let pool = json!({ "pending": {}, "queued": {} });
    let mock = mock_first_call(&mut server, "txpool_inspect", json!([]), pool.clone()).await;
    assert_eq!(Value::Object(client.txpool_inspect().await?), pool);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "txpool_content", json!([]), pool.clone()).await;
    assert_eq!(Value::Object(client.txpool_content().await?), pool);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn otterscan_typed_results() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(&mut server, "ots_getApiLevel", json!([]), json!(8)).await;
    assert_eq!(client.ots_get_api_level().await?, 8);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getInternalOperations",
        json!([TX_HASH]),
        json!([{ "type": 0, "from": ACCOUNT_0, "to": ACCOUNT_1, "value": "0x64" }]),
    )
    .await;
    assert_eq!(
        client.ots_get_internal_operations(TX_HASH).await?,
        vec![InternalOperation {
            kind: 0,
            from: ACCOUNT_0,
            to: ACCOUNT_1,
            value: U256::from(100),
        }]
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_hasCode",
        json!([ACCOUNT_0, "latest"]),
        json!(false),
    )
    .await;
    assert!(!client.ots_has_code(ACCOUNT_0, "latest").await?);
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getTransactionError",
        json!([TX_HASH]),
        json!("0x"),
    )
    .await;
    assert_eq!(client.ots_get_transaction_error(TX_HASH).await?, Bytes::new());
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getTransactionBySenderAndNonce",
        json!([ACCOUNT_0, 0]),
        json!(TX_HASH),
    )
    .await;
    assert_eq!(
        client
            .ots_get_transaction_by_sender_and_nonce(ACCOUNT_0, 0)
            .await?,
        Some(TX_HASH)
    );
    mock.assert_async().await;

    let contract = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getContractCreator",
        json!([contract]),
        json!({ "hash": TX_HASH, "creator": ACCOUNT_0 }),
    )
    .await;
    assert_eq!(
        client.ots_get_contract_creator(contract).await?,
        Some(ContractCreator {
            hash: TX_HASH,
            creator: ACCOUNT_0,
        })
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getContractCreator",
        json!([ACCOUNT_1]),
        Value::Null,
    )
    .await;
    assert_eq!(client.ots_get_contract_creator(ACCOUNT_1).await?, None);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn otterscan_raw_results() -> Result<(), RpcClientError> {
    let trace = json!([{ "type": "CALL", "depth": 0 }]);
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_traceTransaction",
        json!([TX_HASH]),
        trace.clone(),
    )
    .await;
    assert_eq!(client.ots_trace_transaction(TX_HASH).await?, trace);
    mock.assert_async().await;

    let details = json!({ "block": { "number": "0x1" }, "issuance": {} });
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getBlockDetails",
        json!(["0x1"]),
        details.clone(),
    )
    .await;
    assert_eq!(client.ots_get_block_details(1).await?, details);
    mock.assert_async().await;

    let page = json!({ "fullblock": {}, "receipts": [] });
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_getBlockTransactions",
        json!(["0x1", 0, 25]),
        page.clone(),
    )
    .await;
    assert_eq!(client.ots_get_block_transactions(1, 0, 25).await?, page);
    mock.assert_async().await;

    let search = json!({ "txs": [], "receipts": [], "firstPage": true, "lastPage": true });
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_searchTransactionsBefore",
        json!([ACCOUNT_0, 100, 25]),
        search.clone(),
    )
    .await;
    assert_eq!(
        client
            .ots_search_transactions_before(ACCOUNT_0, 100, 25)
            .await?,
        search
    );
    mock.assert_async().await;

    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "ots_searchTransactionsAfter",
        json!([ACCOUNT_0, 0, 25]),
        search.clone(),
    )
    .await;
    assert_eq!(
        client.ots_search_transactions_after(ACCOUNT_0, 0, 25).await?,
        search
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn generic_call() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let mock = mock_first_call(
        &mut server,
        "eth_getBalance",
        json!([ACCOUNT_0, "latest"]),
        json!("0x21e19e0c9bab2400000"),
    )
    .await;
    let balance: U256 = client.call("eth_getBalance", (ACCOUNT_0, "latest")).await?;
    assert_eq!(
        balance,
        U256::from(anvil_test_utils::accounts::DEFAULT_BALANCE_WEI)
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn json_rpc_error_is_reported() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let _mock = mock_error(&mut server, "evm_revert", -32602, "invalid snapshot id").await;

    let error = client
        .revert(U256::from(42))
        .await
        .expect_err("node rejected the call");
    assert!(matches!(error, RpcClientError::JsonRpcError { ref error, .. } if error.code == -32602));

    Ok(())
}

#[tokio::test]
async fn optional_results_require_a_result_field() -> Result<(), RpcClientError> {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":1}"#)
        .expect_at_least(1)
        .create_async()
        .await;

    assert!(matches!(
        client.get_blob_by_hash(TX_HASH).await,
        Err(RpcClientError::InvalidResponse { .. })
    ));
    assert!(matches!(
        client.drop_transaction(TX_HASH).await,
        Err(RpcClientError::InvalidResponse { .. })
    ));
    assert!(matches!(
        client.ots_get_contract_creator(ACCOUNT_0).await,
        Err(RpcClientError::InvalidResponse { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn closed_client_rejects_calls() -> Result<(), RpcClientError> {
    let (_server, client) = setup().await;
    let clone = client.clone();

    client.close();

    assert!(matches!(
        clone.get_automine().await,
        Err(RpcClientError::Closed)
    ));

    Ok(())
}
