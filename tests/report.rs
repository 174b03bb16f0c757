use fleet_smoke::models::{Status, TestResult};
use fleet_smoke::report::{render_summary, Palette};

fn result(id: usize, desc: &str, status: Status, note: &str) -> TestResult {
	TestResult {
		id,
		desc: desc.into(),
		endpoint: format!("/endpoint-{}", id),
		status,
		time_ms: 12.5,
		note: note.into(),
	}
}

#[test]
fn summary_lists_every_row_and_the_totals() {
	let results = vec![
		result(1, "KPI overview", Status::Pass, ""),
		result(2, "Vehicle export", Status::Fail, "HTTP 500"),
	];
	let out = render_summary(&results, Palette { enabled: false });

	assert!(out.contains("TEST SUMMARY REPORT"));
	assert!(out.contains("KPI overview"));
	assert!(out.contains("Vehicle export"));
	assert!(out.contains("/endpoint-1"));
	assert!(out.contains("HTTP 500"));
	assert!(out.contains("12.50"));
	assert!(out.contains("Total: 2, Passed: 1, Failed: 1"));
}

#[test]
fn plain_output_contains_no_escape_codes() {
	let results = vec![result(1, "KPI overview", Status::Pass, "")];
	let out = render_summary(&results, Palette { enabled: false });
	assert!(!out.contains('\x1b'));
}

#[test]
fn colored_output_paints_only_the_status_cell() {
	let results = vec![
		result(1, "KPI overview", Status::Pass, ""),
		result(2, "Vehicle export", Status::Fail, "HTTP 500"),
	];
	let out = render_summary(&results, Palette { enabled: true });
	assert!(out.contains("\x1b[92mPASS"));
	assert!(out.contains("\x1b[91mFAIL"));
	// descriptions stay unpainted
	assert!(out.contains("| KPI overview"));
}

#[test]
fn grid_borders_are_consistent() {
	let results = vec![result(1, "KPI overview", Status::Pass, "")];
	let out = render_summary(&results, Palette { enabled: false });
	let borders: Vec<&str> = out.lines().filter(|l| l.starts_with('+')).collect();
	// top, under header, under the single row
	assert_eq!(borders.len(), 3);
	assert!(borders.windows(2).all(|w| w[0] == w[1]));
}
