use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use twcheck::mcp::{TwcheckMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture) -> Parameters<GetConfigParams> {
    Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    })
}

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.get_config(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["resolvedSeparator"], ":");
    assert_eq!(json_result["config"]["classRegex"], "^class(Name)?$");
    assert_eq!(
        json_result["config"]["callees"],
        json!(["classnames", "clsx", "ctl", "cva", "tv"])
    );
    assert!(json_result["config"].get("config").is_none());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "callees": ["cn"],
            "tags": ["tw"],
            "config": { "separator": "_" }
        }))
        .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.get_config(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["callees"], json!(["cn"]));
    assert_eq!(json_result["config"]["tags"], json!(["tw"]));
    assert_eq!(json_result["config"]["config"], json!({ "separator": "_" }));
    assert_eq!(json_result["resolvedSeparator"], "_");
}

#[tokio::test]
async fn test_get_config_resolves_json_tailwind_config() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_source("tailwind.config.json", r#"{ "separator": "__" }"#)
        .unwrap();
    fixture
        .write_config(&json!({ "config": "tailwind.config.json" }))
        .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.get_config(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["config"], "tailwind.config.json");
    assert_eq!(json_result["resolvedSeparator"], "__");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "classRegex": "^(class" }))
        .unwrap();
    let server = TwcheckMcpServer::new();

    assert!(server.get_config(params(&fixture)).await.is_err());
}
