use rmcp::handler::server::wrapper::Parameters;
use twcheck::mcp::{TwcheckMcpServer, types::ScanParams};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json};

fn params(fixture: &McpTestFixture, limit: Option<u32>, offset: Option<u32>) -> Parameters<ScanParams> {
    Parameters(ScanParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_scan_clean_project() {
    let fixture = McpTestFixture::with_source(
        "src/app.tsx",
        r#"export const App = () => <div className="top-[-1px]" />;"#,
    )
    .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["sourceFilesChecked"], 1);
    assert!(json_result["items"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_reports_items() {
    let fixture = McpTestFixture::with_source(
        "src/app.tsx",
        r#"export const App = () => <div className="flex md:-top-[1px]" />;"#,
    )
    .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["totalFileCount"], 1);

    let item = &json_result["items"][0];
    assert_eq!(item["classname"], "md:-top-[1px]");
    assert_eq!(item["suggestion"], "md:top-[-1px]");
    assert_eq!(item["site"], "`className` attribute");
    assert_eq!(item["line"], 1);
    assert_eq!(
        item["message"],
        "Arbitrary value classname 'md:-top-[1px]' should not start with a dash (-)"
    );
    assert!(
        item["filePath"]
            .as_str()
            .unwrap()
            .ends_with("src/app.tsx")
    );
}

#[tokio::test]
async fn test_scan_pagination() {
    let fixture = McpTestFixture::with_source(
        "src/app.tsx",
        r#"export const a = clsx("-top-[1px] -left-[1px] -right-[1px]");"#,
    )
    .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, Some(2), None)).await.unwrap();
    let first = extract_tool_result_json(&result);
    assert_eq!(first["totalCount"], 3);
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_eq!(first["items"][0]["classname"], "-top-[1px]");
    assert_pagination(&first, 0, 2, true);

    let result = server.scan(params(&fixture, Some(2), Some(2))).await.unwrap();
    let second = extract_tool_result_json(&result);
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["items"][0]["classname"], "-right-[1px]");
    assert_pagination(&second, 2, 2, false);
}

#[tokio::test]
async fn test_scan_limit_is_capped() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, Some(500), None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_uses_project_config() {
    let fixture = McpTestFixture::with_source(
        "src/styles.ts",
        "export const box = tw`-inset-[3px]`;\n",
    )
    .unwrap();
    fixture
        .write_config(&serde_json::json!({ "tags": ["tw"] }))
        .unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["site"], "`tw` tagged template");
}

#[tokio::test]
async fn test_scan_lists_parse_errors() {
    let fixture = McpTestFixture::with_source("src/broken.tsx", "export const = ;").unwrap();
    let server = TwcheckMcpServer::new();

    let result = server.scan(params(&fixture, None, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("broken.tsx")
    );
    assert!(fixture.root_path().join("src/broken.tsx").exists());
}
