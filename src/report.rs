use crate::models::{now_iso, Status, TestResult};

pub mod color {
	pub const HEADER: &str = "\x1b[95m";
	pub const BLUE: &str = "\x1b[94m";
	pub const CYAN: &str = "\x1b[96m";
	pub const GREEN: &str = "\x1b[92m";
	pub const RED: &str = "\x1b[91m";
	pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
	pub enabled: bool,
}

impl Palette {
	/// Honors both the CLI flag and the NO_COLOR convention.
	pub fn from_env(no_color_flag: bool) -> Self {
		Self { enabled: !no_color_flag && std::env::var_os("NO_COLOR").is_none() }
	}

	pub fn paint(&self, code: &str, text: &str) -> String {
		if self.enabled {
			format!("{}{}{}", code, text, color::RESET)
		} else {
			text.to_string()
		}
	}
}

const HEADERS: [&str; 6] = ["ID", "Test Case", "Endpoint", "Status", "Time(ms)", "Note"];

/// Grid table in the tabulate style, one row per result, totals underneath.
pub fn render_summary(results: &[TestResult], palette: Palette) -> String {
	let rows: Vec<[String; 6]> = results
		.iter()
		.map(|r| {
			[
				r.id.to_string(),
				r.desc.clone(),
				r.endpoint.clone(),
				r.status.as_str().to_string(),
				format!("{:.2}", r.time_ms),
				r.note.clone(),
			]
		})
		.collect();

	let mut widths: [usize; 6] = [0; 6];
	for (i, h) in HEADERS.iter().enumerate() {
		widths[i] = h.chars().count();
	}
	for row in &rows {
		for (i, cell) in row.iter().enumerate() {
			widths[i] = widths[i].max(cell.chars().count());
		}
	}

	let sep = {
		let mut s = String::from("+");
		for w in widths {
			s.push_str(&"-".repeat(w + 2));
			s.push('+');
		}
		s
	};

	let mut out = String::new();
	out.push('\n');
	out.push_str(&"=".repeat(80));
	out.push_str("\nTEST SUMMARY REPORT\n");
	out.push_str(&"=".repeat(80));
	out.push('\n');
	out.push_str(&sep);
	out.push('\n');
	out.push_str(&render_row(&HEADERS.map(String::from), &widths, None));
	out.push('\n');
	out.push_str(&sep);
	out.push('\n');
	for (row, result) in rows.iter().zip(results) {
		let code = match result.status {
			Status::Pass => color::GREEN,
			Status::Fail => color::RED,
		};
		out.push_str(&render_row(row, &widths, Some((palette, code))));
		out.push('\n');
		out.push_str(&sep);
		out.push('\n');
	}

	let passed = results.iter().filter(|r| r.status == Status::Pass).count();
	out.push_str(&format!("\nTotal: {}, Passed: {}, Failed: {}\n", results.len(), passed, results.len() - passed));
	out.push_str(&format!("Run finished at {}\n", now_iso()));
	out
}

fn render_row(cells: &[String; 6], widths: &[usize; 6], status_paint: Option<(Palette, &str)>) -> String {
	let mut line = String::from("|");
	for (i, cell) in cells.iter().enumerate() {
		let pad = widths[i] - cell.chars().count();
		let mut padded = format!(" {}{} ", cell, " ".repeat(pad));
		// only the status column gets color, and only after padding so the
		// escape codes do not throw off the alignment
		if i == 3 {
			if let Some((palette, code)) = status_paint {
				padded = format!(" {} ", palette.paint(code, &format!("{}{}", cell, " ".repeat(pad))));
			}
		}
		line.push_str(&padded);
		line.push('|');
	}
	line
}

pub fn print_summary(results: &[TestResult], palette: Palette) {
	println!("{}", render_summary(results, palette));
}
