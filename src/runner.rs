use std::time::{Duration, Instant};

use tracing::debug;

use crate::errors::{CheckError, CheckResult};
use crate::models::{Envelope, Payload, Status, TestCase, TestResult};
use crate::report::{color, Palette};
use crate::validate::{csv_preview, looks_like_csv, strip_bom, validate_keys};

const PREVIEW_CHARS: usize = 500;
const PREVIEW_LINES: usize = 3;

/// Method-and-URL progress line. Every probe is a GET.
pub fn request_line(url: &str) -> String {
	format!("GET {}", url)
}

/// Sequential executor. Owns the HTTP client, the append-only result list
/// and the pass/fail counters; one request in flight at a time.
pub struct Runner {
	client: reqwest::Client,
	base: String,
	palette: Palette,
	results: Vec<TestResult>,
	passed: usize,
	failed: usize,
}

impl Runner {
	pub fn new(base: &str, timeout: Duration, token: Option<&str>, palette: Palette) -> anyhow::Result<Self> {
		let mut headers = reqwest::header::HeaderMap::new();
		headers.insert(reqwest::header::CONTENT_TYPE, reqwest::header::HeaderValue::from_static("application/json"));
		if let Some(token) = token {
			let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))?;
			headers.insert(reqwest::header::AUTHORIZATION, value);
		}
		let client = reqwest::Client::builder()
			.user_agent("fleet-smoke/0.1")
			.timeout(timeout)
			.default_headers(headers)
			.build()?;
		Ok(Self {
			client,
			base: base.trim_end_matches('/').to_string(),
			palette,
			results: Vec::new(),
			passed: 0,
			failed: 0,
		})
	}

	pub async fn run_suite(&mut self, cases: &[TestCase]) {
		for case in cases {
			self.run_case(case).await;
		}
	}

	/// Executes one probe. Every failure is folded into the result's note,
	/// nothing propagates, so one broken endpoint never aborts the run.
	pub async fn run_case(&mut self, case: &TestCase) {
		let id = self.results.len() + 1;
		let url = format!("{}{}", self.base, case.endpoint);
		println!("{}", "-".repeat(80));
		println!("{}", self.palette.paint(color::HEADER, &format!("Test #{}: {}", id, case.desc)));
		println!("{}", request_line(&url));
		if !case.params.is_empty() {
			let rendered: Vec<String> = case.params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
			println!("Params: {}", rendered.join("&"));
		}

		let started = Instant::now();
		let outcome = self.check(&url, case).await;
		let time_ms = started.elapsed().as_secs_f64() * 1000.0;

		let (status, note) = match outcome {
			Ok(None) => (Status::Pass, String::new()),
			Ok(Some(warning)) => (Status::Pass, warning),
			Err(err) => {
				println!("{}", self.palette.paint(color::RED, &err.to_string()));
				(Status::Fail, err.to_string())
			}
		};
		match status {
			Status::Pass => self.passed += 1,
			Status::Fail => self.failed += 1,
		}
		let code = if status == Status::Pass { color::GREEN } else { color::RED };
		println!("{}", self.palette.paint(code, &format!("Result: {} ({:.2}ms)", status.as_str(), time_ms)));

		self.results.push(TestResult {
			id,
			desc: case.desc.clone(),
			endpoint: case.endpoint.clone(),
			status,
			time_ms,
			note,
		});
	}

	/// Ordered, short-circuiting classification: transport, HTTP status,
	/// body format, business code, expected keys.
	async fn check(&self, url: &str, case: &TestCase) -> CheckResult<Option<String>> {
		let mut req = self.client.get(url);
		if !case.params.is_empty() {
			req = req.query(&case.params);
		}
		debug!(url, "sending request");
		let resp = req.send().await?;

		let http_status = resp.status();
		let code = if http_status == reqwest::StatusCode::OK { color::GREEN } else { color::RED };
		println!("{}", self.palette.paint(code, &format!("HTTP Status: {}", http_status.as_u16())));
		if http_status != reqwest::StatusCode::OK {
			return Err(CheckError::HttpStatus(http_status.as_u16()));
		}

		match &case.payload {
			Payload::RawCsv => {
				let content_type = resp
					.headers()
					.get(reqwest::header::CONTENT_TYPE)
					.and_then(|v| v.to_str().ok())
					.unwrap_or("")
					.to_string();
				println!("Content-Type: {}", content_type);
				let bytes = resp.bytes().await?;
				let body = std::str::from_utf8(&bytes)?;
				self.check_csv(&content_type, body)
			}
			Payload::Json { expected_keys } => {
				let bytes = resp.bytes().await?;
				self.check_json(&bytes, expected_keys)
			}
		}
	}

	fn check_csv(&self, content_type: &str, body: &str) -> CheckResult<Option<String>> {
		if !looks_like_csv(content_type, body) {
			return Err(CheckError::InvalidFormat);
		}
		let (bom, text) = strip_bom(body);
		if bom {
			println!("{}", self.palette.paint(color::CYAN, "BOM head detected (Excel safe)"));
		}
		println!("{}", self.palette.paint(color::BLUE, &format!("CSV preview:\n{}", csv_preview(text, PREVIEW_LINES))));
		Ok(None)
	}

	fn check_json(&self, bytes: &[u8], expected_keys: &[String]) -> CheckResult<Option<String>> {
		let envelope: Envelope = serde_json::from_slice(bytes)?;
		if !envelope.is_success() {
			let msg = envelope.msg.unwrap_or_default();
			println!("{}", self.palette.paint(color::RED, &format!("API error: {}", msg)));
			return Err(CheckError::Business(msg));
		}
		let warning = validate_keys(&envelope.data, expected_keys)?;
		let mut preview = serde_json::to_string_pretty(&envelope.data).unwrap_or_default();
		if preview.chars().count() > PREVIEW_CHARS {
			preview = preview.chars().take(PREVIEW_CHARS).collect::<String>() + "\n... (truncated)";
		}
		println!("{}", self.palette.paint(color::BLUE, &format!("Data preview:\n{}", preview)));
		Ok(warning)
	}

	pub fn results(&self) -> &[TestResult] {
		&self.results
	}

	pub fn passed(&self) -> usize {
		self.passed
	}

	pub fn failed(&self) -> usize {
		self.failed
	}
}
