use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::config::CompilerConfig;

/// Blockscout API endpoint used for contract verification on Passet Hub.
pub(crate) const DEFAULT_API_URL: &str =
    "https://blockscout-passet-hub.parity-testnet.parity.io/api";

/// Optimizer run count reported when the project configuration leaves it unset.
const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// `status` value that signals an accepted submission.
const STATUS_ACCEPTED: &str = "1";

/// Form body of a `verifysourcecode` submission.
#[derive(Debug, Serialize)]
pub(crate) struct VerificationRequest<'a> {
    apikey: &'a str,
    module: &'static str,
    action: &'static str,
    contractaddress: &'a str,
    #[serde(rename = "sourceCode")]
    source_code: &'a str,
    codeformat: &'static str,
    contractname: String,
    compilerversion: String,
    #[serde(rename = "optimizationUsed")]
    optimization_used: u8,
    runs: u32,
    /// The misspelling is part of the Etherscan-compatible API surface
    /// and is expected verbatim by the explorer.
    #[serde(rename = "constructorArguements")]
    constructor_arguments: &'a str,
}

impl<'a> VerificationRequest<'a> {
    /// Assemble a single-file verification request for a matched artifact.
    pub fn single_file(
        api_key: &'a str,
        address: &'a str,
        contract_name: &str,
        source_code: &'a str,
        compiler: &CompilerConfig,
        constructor_arguments: &'a str,
    ) -> Self {
        Self {
            apikey: api_key,
            module: "contract",
            action: "verifysourcecode",
            contractaddress: address,
            source_code,
            codeformat: "solidity-single-file",
            contractname: format!("{contract_name}.sol:{contract_name}"),
            compilerversion: format!("v{}", compiler.version),
            optimization_used: compiler.optimizer.enabled.into(),
            runs: compiler.optimizer.runs.unwrap_or(DEFAULT_OPTIMIZER_RUNS),
            constructor_arguments,
        }
    }
}

/// JSON envelope returned by the explorer API.
#[derive(Debug, Deserialize)]
struct VerificationResponse {
    status: String,
    result: String,
}

/// Verification submission errors.
#[derive(Debug, Display, From, Error)]
pub(crate) enum ExplorerError {
    /// HTTP transport failure, including non-success status codes.
    Http(reqwest::Error),

    /// The explorer rejected the submission.
    #[display(fmt = "verification rejected: {}", _0)]
    Rejected(#[error(ignore)] String),
}

/// Blockscout verification API client.
#[derive(Debug, Clone)]
pub(crate) struct ExplorerClient {
    api_url: String,
}

impl ExplorerClient {
    /// Create a client for the given API endpoint.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Submit a verification request, returning the submission GUID on acceptance.
    ///
    /// The GUID can later be used to poll the verification status manually,
    /// see [`check_status_url`].
    ///
    /// [`check_status_url`]: ExplorerClient::check_status_url
    pub fn verify_source_code(
        &self,
        request: &VerificationRequest<'_>,
    ) -> Result<String, ExplorerError> {
        let response: VerificationResponse = reqwest::blocking::Client::new()
            .post(&self.api_url)
            .form(request)
            .send()?
            .error_for_status()?
            .json()?;

        if response.status == STATUS_ACCEPTED {
            Ok(response.result)
        } else {
            Err(ExplorerError::Rejected(response.result))
        }
    }

    /// URL that can be queried to track the status of a submission.
    pub fn check_status_url(&self, guid: &str) -> String {
        format!(
            "{}?module=contract&action=checkverifystatus&guid={}",
            self.api_url, guid
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::config::{CompilerConfig, OptimizerConfig};

    use super::{ExplorerClient, ExplorerError, VerificationRequest};

    fn compiler(enabled: bool, runs: Option<u32>) -> CompilerConfig {
        CompilerConfig {
            version: String::from("0.8.28"),
            optimizer: OptimizerConfig { enabled, runs },
        }
    }

    async fn mock_explorer(response: serde_json::Value) -> (MockServer, ExplorerClient) {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&server)
            .await;

        let client = ExplorerClient::new(format!("{}/api", server.uri()));

        (server, client)
    }

    fn submit(client: ExplorerClient, enabled: bool) -> Result<String, ExplorerError> {
        let compiler = compiler(enabled, None);
        let request = VerificationRequest::single_file(
            "test-key",
            "0xabc",
            "Example",
            "contract Example {}",
            &compiler,
            "0x2a",
        );

        client.verify_source_code(&request)
    }

    #[test]
    fn optimizer_flag_maps_to_integer_and_runs_default_to_200() {
        let enabled = compiler(true, None);
        let request =
            VerificationRequest::single_file("key", "0xabc", "Example", "source", &enabled, "");

        assert_eq!(request.optimization_used, 1);
        assert_eq!(request.runs, 200);
        assert_eq!(request.contractname, "Example.sol:Example");
        assert_eq!(request.compilerversion, "v0.8.28");

        let disabled = compiler(false, Some(1000));
        let request =
            VerificationRequest::single_file("key", "0xabc", "Example", "source", &disabled, "");

        assert_eq!(request.optimization_used, 0);
        assert_eq!(request.runs, 1000);
    }

    #[tokio::test]
    async fn accepted_submission_returns_the_guid() {
        let (_server, client) = mock_explorer(json!({
            "message": "OK",
            "result": "50a1b2c3-7b3e-4c5d-8e9f-0a1b2c3d4e5f",
            "status": "1"
        }))
        .await;

        let guid = tokio::task::spawn_blocking(move || submit(client, true))
            .await
            .unwrap()
            .expect("submission was not accepted");

        assert_eq!(guid, "50a1b2c3-7b3e-4c5d-8e9f-0a1b2c3d4e5f");
    }

    #[tokio::test]
    async fn rejected_submission_carries_the_reason() {
        let (_server, client) = mock_explorer(json!({
            "message": "NOTOK",
            "result": "Unable to locate ContractCode at 0xabc",
            "status": "0"
        }))
        .await;

        let error = tokio::task::spawn_blocking(move || submit(client, true))
            .await
            .unwrap()
            .expect_err("rejected submission did not error");

        assert!(
            matches!(error, ExplorerError::Rejected(reason) if reason == "Unable to locate ContractCode at 0xabc")
        );
    }

    #[tokio::test]
    async fn server_errors_surface_as_http_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ExplorerClient::new(format!("{}/api", server.uri()));

        let error = tokio::task::spawn_blocking(move || submit(client, true))
            .await
            .unwrap()
            .expect_err("server error did not surface");

        assert!(matches!(error, ExplorerError::Http(_)));
    }

    #[tokio::test]
    async fn form_fields_match_the_explorer_wire_format() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api"))
            .and(body_string_contains("module=contract"))
            .and(body_string_contains("action=verifysourcecode"))
            .and(body_string_contains("contractaddress=0xabc"))
            .and(body_string_contains("codeformat=solidity-single-file"))
            .and(body_string_contains("contractname=Example.sol%3AExample"))
            .and(body_string_contains("compilerversion=v0.8.28"))
            .and(body_string_contains("optimizationUsed=1"))
            .and(body_string_contains("runs=200"))
            .and(body_string_contains("constructorArguements=0x2a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "OK",
                "result": "guid",
                "status": "1"
            })))
            .mount(&server)
            .await;

        let client = ExplorerClient::new(format!("{}/api", server.uri()));

        tokio::task::spawn_blocking(move || submit(client, true))
            .await
            .unwrap()
            .expect("request body did not match the expected wire format");
    }

    #[test]
    fn check_status_url_points_at_the_submission() {
        let client = ExplorerClient::new("https://explorer.example/api");

        assert_eq!(
            client.check_status_url("guid"),
            "https://explorer.example/api?module=contract&action=checkverifystatus&guid=guid"
        );
    }
}
