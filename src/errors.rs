use thiserror::Error;

/// One variant per way a probe can fail. The Display string becomes the
/// note column of the summary report.
#[derive(Debug, Error)]
pub enum CheckError {
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),
	#[error("HTTP {0}")]
	HttpStatus(u16),
	#[error("cannot parse response: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("body is not valid UTF-8: {0}")]
	Decode(#[from] std::str::Utf8Error),
	#[error("{0}")]
	Business(String),
	#[error("missing keys: {}", .0.join(", "))]
	MissingKeys(Vec<String>),
	#[error("invalid content type")]
	InvalidFormat,
}

pub type CheckResult<T> = Result<T, CheckError>;
