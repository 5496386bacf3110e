//! Tests for the MCP router and the validating service in front of it.

mod common;

use common::{Reply, ScriptedDriver, router_with};
use deepseek_error::DeepSeekErrorKind;
use deepseek_mcp::{DeepSeekRouter, Router, RouterService, ValidatingService};
use mcp_spec::handler::ToolError;
use mcp_spec::protocol::{INVALID_PARAMS, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND};
use serde_json::{Value, json};
use tower_service::Service;

type Svc = ValidatingService<RouterService<DeepSeekRouter>>;

fn service(router: DeepSeekRouter) -> Svc {
    let tools = router.tools().clone();
    ValidatingService::new(RouterService(router), tools)
}

fn request(id: u64, method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    }))
    .unwrap()
}

async fn send(svc: &mut Svc, req: JsonRpcRequest) -> JsonRpcResponse {
    std::future::poll_fn(|cx| svc.poll_ready(cx)).await.unwrap();
    svc.call(req).await.unwrap()
}

fn call_params(name: &str, arguments: Value) -> Value {
    json!({"name": name, "arguments": arguments})
}

#[test]
fn test_catalog_has_single_tool() {
    let router = router_with(ScriptedDriver::text("unused"));
    let tools = router.list_tools();

    assert_eq!(tools.len(), 1);
    let tool = serde_json::to_value(&tools[0]).unwrap();
    assert_eq!(tool["name"], "deepseek_r1");
    assert_eq!(tool["description"], "Generate text using DeepSeek R1 model");
}

#[test]
fn test_catalog_listing_is_idempotent() {
    let router = router_with(ScriptedDriver::text("unused"));

    let first = serde_json::to_string(&router.list_tools()).unwrap();
    for _ in 0..5 {
        assert_eq!(serde_json::to_string(&router.list_tools()).unwrap(), first);
    }
}

#[test]
fn test_instructions_name_the_tool() {
    let router = router_with(ScriptedDriver::text("unused"));
    assert_eq!(router.name(), "deepseek-r1");
    assert!(router.instructions().contains("deepseek_r1"));
    assert!(router.instructions().contains("0.0.0-test"));
}

#[tokio::test]
async fn test_call_tool_returns_text_content() {
    let router = router_with(ScriptedDriver::text("generated"));

    let content = router
        .call_tool("deepseek_r1", json!({"prompt": "hi"}))
        .await
        .unwrap();
    assert_eq!(content.len(), 1);

    let block = serde_json::to_value(&content[0]).unwrap();
    assert_eq!(block["type"], "text");
    assert_eq!(block["text"], "generated");
}

#[tokio::test]
async fn test_call_tool_maps_errors() {
    let router = router_with(ScriptedDriver::new(Reply::Fail(DeepSeekErrorKind::Http(
        "dns failure".to_string(),
    ))));

    match router.call_tool("deepseek_r1", json!({"prompt": "hi"})).await {
        Err(ToolError::ExecutionError(msg)) => {
            assert!(msg.contains("Error calling DeepSeek API"));
            assert!(msg.contains("dns failure"));
        }
        other => panic!("expected execution error, got {:?}", other),
    }

    assert!(matches!(
        router.call_tool("other_tool", json!({"prompt": "hi"})).await,
        Err(ToolError::NotFound(_))
    ));
    assert!(matches!(
        router.call_tool("deepseek_r1", json!({"prompt": 1})).await,
        Err(ToolError::InvalidParameters(_))
    ));
}

#[tokio::test]
async fn test_service_lists_tools_identically() {
    let mut svc = service(router_with(ScriptedDriver::text("unused")));

    let first = send(&mut svc, request(1, "tools/list", json!({}))).await;
    let second = send(&mut svc, request(2, "tools/list", json!({}))).await;

    assert!(first.error.is_none());
    assert_eq!(
        serde_json::to_string(&first.result).unwrap(),
        serde_json::to_string(&second.result).unwrap()
    );
    let tools = &first.result.unwrap()["tools"];
    assert_eq!(tools.as_array().map(Vec::len), Some(1));
    assert_eq!(tools[0]["name"], "deepseek_r1");
}

#[tokio::test]
async fn test_service_rejects_unknown_tool() {
    let driver = ScriptedDriver::text("unused");
    let mut svc = service(router_with(driver.clone()));

    let response = send(
        &mut svc,
        request(7, "tools/call", call_params("gpt_4", json!({"prompt": "hi"}))),
    )
    .await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, METHOD_NOT_FOUND);
    assert!(error.message.contains("gpt_4"));
    assert_eq!(response.id, Some(7));
    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn test_service_rejects_malformed_arguments() {
    let driver = ScriptedDriver::text("unused");
    let mut svc = service(router_with(driver.clone()));

    for arguments in [
        json!({}),
        json!({"prompt": 3}),
        json!({"prompt": "hi", "max_tokens": "lots"}),
        json!({"prompt": "hi", "temperature": false}),
    ] {
        let response = send(
            &mut svc,
            request(3, "tools/call", call_params("deepseek_r1", arguments)),
        )
        .await;
        let error = response.error.expect("expected an error");
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(response.result.is_none());
    }

    // Arguments missing entirely.
    let response = send(
        &mut svc,
        request(4, "tools/call", json!({"name": "deepseek_r1"})),
    )
    .await;
    assert_eq!(response.error.map(|e| e.code), Some(INVALID_PARAMS));

    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn test_service_forwards_valid_call() {
    let driver = ScriptedDriver::text("forwarded");
    let mut svc = service(router_with(driver.clone()));

    let response = send(
        &mut svc,
        request(9, "tools/call", call_params("deepseek_r1", json!({"prompt": "hi"}))),
    )
    .await;

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "forwarded");
    assert_ne!(result["isError"], true);
    assert_eq!(driver.requests().len(), 1);
}

#[tokio::test]
async fn test_service_keeps_remote_failures_in_band() {
    let driver = ScriptedDriver::new(Reply::Fail(DeepSeekErrorKind::Api {
        status: 503,
        message: "Server busy".to_string(),
    }));
    let mut svc = service(router_with(driver));

    let response = send(
        &mut svc,
        request(5, "tools/call", call_params("deepseek_r1", json!({"prompt": "hi"}))),
    )
    .await;

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap().to_string();
    assert!(text.contains("Error calling DeepSeek API"));
    assert!(text.contains("Server busy"));

    // Still serving afterwards.
    let listing = send(&mut svc, request(6, "tools/list", json!({}))).await;
    assert!(listing.error.is_none());
}

#[tokio::test]
async fn test_no_resources_or_prompts() {
    let router = router_with(ScriptedDriver::text("unused"));

    assert!(router.list_resources().is_empty());
    assert!(router.list_prompts().is_empty());
    assert!(router.read_resource("file:///etc/hosts").await.is_err());
    assert!(router.get_prompt("summarize").await.is_err());
}
