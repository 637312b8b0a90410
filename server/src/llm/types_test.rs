use super::*;

// =============================================================================
// LlmError::error_code: all 6 variants
// =============================================================================

#[test]
fn error_code_config_parse() {
    let err = LlmError::ConfigParse("bad".into());
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
}

#[test]
fn error_code_api_request() {
    let err = LlmError::ApiRequest("timeout".into());
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn error_code_api_response() {
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_api_parse() {
    let err = LlmError::ApiParse("json".into());
    assert_eq!(err.error_code(), "E_API_PARSE");
}

#[test]
fn error_code_http_client_build() {
    let err = LlmError::HttpClientBuild("tls".into());
    assert_eq!(err.error_code(), "E_HTTP_CLIENT_BUILD");
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_missing_api_key_names_var() {
    let err = LlmError::MissingApiKey { var: "GOOGLE_GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GOOGLE_GEMINI_API_KEY not set");
}

#[test]
fn display_api_response_includes_status_and_body() {
    let err = LlmError::ApiResponse { status: 429, body: "quota exceeded".into() };
    let msg = err.to_string();
    assert!(msg.contains("429"));
    assert!(msg.contains("quota exceeded"));
}
