use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

/// One declared probe. Built by the suite tables, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TestCase {
	pub desc: String,
	pub endpoint: String,
	pub params: Vec<(String, String)>,
	pub payload: Payload,
}

/// How the response body is expected to look.
#[derive(Debug, Clone)]
pub enum Payload {
	Json { expected_keys: Vec<String> },
	RawCsv,
}

impl TestCase {
	pub fn json(desc: &str, endpoint: &str) -> Self {
		Self { desc: desc.into(), endpoint: endpoint.into(), params: Vec::new(), payload: Payload::Json { expected_keys: Vec::new() } }
	}

	pub fn csv(desc: &str, endpoint: &str) -> Self {
		Self { desc: desc.into(), endpoint: endpoint.into(), params: Vec::new(), payload: Payload::RawCsv }
	}

	pub fn with_params(mut self, params: &[(&str, &str)]) -> Self {
		self.params = params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		self
	}

	pub fn expect_keys(mut self, keys: &[&str]) -> Self {
		if let Payload::Json { expected_keys } = &mut self.payload {
			*expected_keys = keys.iter().map(|k| k.to_string()).collect();
		}
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Pass,
	Fail,
}

impl Status {
	pub fn as_str(&self) -> &'static str {
		match self {
			Status::Pass => "PASS",
			Status::Fail => "FAIL",
		}
	}
}

/// Outcome of one probe, one row of the summary table.
#[derive(Debug, Clone)]
pub struct TestResult {
	pub id: usize,
	pub desc: String,
	pub endpoint: String,
	pub status: Status,
	pub time_ms: f64,
	pub note: String,
}

/// Envelope the backend wraps every JSON payload in. The business success
/// code is distinct from the HTTP status.
#[derive(Debug, Deserialize)]
pub struct Envelope {
	#[serde(default)]
	pub code: Option<i64>,
	#[serde(default)]
	pub msg: Option<String>,
	#[serde(default)]
	pub data: Value,
}

impl Envelope {
	pub const SUCCESS: i64 = 1;

	pub fn is_success(&self) -> bool {
		self.code == Some(Self::SUCCESS)
	}
}

/// Parameter block shared by the statistics cases, fed from CLI flags.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
	pub car_series: String,
	pub start: String,
	pub end: String,
	pub series: String,
	pub days: u32,
}

impl Default for SuiteConfig {
	fn default() -> Self {
		Self {
			car_series: "ALL".into(),
			start: "2023-10-01".into(),
			end: "2023-11-01".into(),
			series: "深蓝SL03,阿维塔11".into(),
			days: 30,
		}
	}
}

pub fn now_iso() -> String {
	OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into())
}
