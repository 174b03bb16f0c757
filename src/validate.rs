use serde_json::{Map, Value};

use crate::errors::{CheckError, CheckResult};

pub const EMPTY_LIST_WARNING: &str = "empty list returned (warning)";

/// Shape of the envelope's `data` payload, one validation strategy per variant.
pub enum DataShape<'a> {
	Sequence(&'a [Value]),
	Mapping(&'a Map<String, Value>),
	Scalar,
}

impl<'a> From<&'a Value> for DataShape<'a> {
	fn from(v: &'a Value) -> Self {
		match v {
			Value::Array(items) => DataShape::Sequence(items.as_slice()),
			Value::Object(map) => DataShape::Mapping(map),
			_ => DataShape::Scalar,
		}
	}
}

/// Shallow presence check: sequences are judged by their first element only,
/// scalars and sequences of primitives are trivially valid. This is smoke
/// depth, not schema depth.
pub fn validate_keys(data: &Value, expected: &[String]) -> CheckResult<Option<String>> {
	if expected.is_empty() {
		return Ok(None);
	}
	let inspected = match DataShape::from(data) {
		DataShape::Sequence([]) => return Ok(Some(EMPTY_LIST_WARNING.into())),
		DataShape::Sequence(items) => match items[0].as_object() {
			Some(map) => map,
			None => return Ok(None),
		},
		DataShape::Mapping(map) => map,
		DataShape::Scalar => return Ok(None),
	};
	let missing: Vec<String> = expected.iter().filter(|k| !inspected.contains_key(k.as_str())).cloned().collect();
	if missing.is_empty() {
		Ok(None)
	} else {
		Err(CheckError::MissingKeys(missing))
	}
}

/// Best-effort sniff: trust the declared content-type first, fall back to a
/// structural signal (a field separator anywhere in the body). False
/// negatives are possible for single-column exports; the server offers no
/// stronger contract to check against.
pub fn looks_like_csv(content_type: &str, body: &str) -> bool {
	content_type.contains("text/csv") || content_type.contains("application/csv") || body.contains(',')
}

/// Excel-compatibility BOM. Reported to the operator, never a failure.
pub fn strip_bom(body: &str) -> (bool, &str) {
	match body.strip_prefix('\u{feff}') {
		Some(rest) => (true, rest),
		None => (false, body),
	}
}

pub fn csv_preview(body: &str, lines: usize) -> String {
	body.lines().take(lines).collect::<Vec<_>>().join("\n")
}
