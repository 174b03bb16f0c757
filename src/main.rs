use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_smoke::models::SuiteConfig;
use fleet_smoke::report::{print_summary, Palette};
use fleet_smoke::runner::Runner;
use fleet_smoke::suites;

#[derive(Parser, Debug)]
#[command(name = "fleet_smoke")]
#[command(about = "Smoke tests for the fleet dashboard/statistics API", long_about = None)]
struct Opts {
	#[arg(value_enum, default_value = "all")]
	suite: Suite,

	#[arg(long, help = "API base URL (falls back to env SMOKE_BASE_URL)")]
	base: Option<String>,

	#[arg(long, default_value_t = 10)]
	timeout_secs: u64,

	#[arg(long, help = "Bearer token, if the backend requires one")]
	token: Option<String>,

	#[arg(long)]
	no_color: bool,

	#[arg(long, default_value = "ALL")]
	car_series: String,

	#[arg(long, default_value = "2023-10-01")]
	start: String,

	#[arg(long, default_value = "2023-11-01")]
	end: String,

	#[arg(long, default_value = "深蓝SL03,阿维塔11", help = "Comma-separated series for the multi-series trends")]
	series: String,

	#[arg(long, default_value_t = 30)]
	days: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Suite {
	Dashboard,
	Statistics,
	All,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
	dotenv().ok();
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.ok();

	let opts = Opts::parse();
	let base = opts
		.base
		.clone()
		.or_else(|| std::env::var("SMOKE_BASE_URL").ok())
		.unwrap_or_else(|| "http://localhost:8080/api".into());
	let palette = Palette::from_env(opts.no_color);
	let cfg = SuiteConfig {
		car_series: opts.car_series.clone(),
		start: opts.start.clone(),
		end: opts.end.clone(),
		series: opts.series.clone(),
		days: opts.days,
	};

	let mut cases = Vec::new();
	if matches!(opts.suite, Suite::Dashboard | Suite::All) {
		cases.extend(suites::dashboard_suite());
	}
	if matches!(opts.suite, Suite::Statistics | Suite::All) {
		cases.extend(suites::statistics_suite(&cfg));
	}

	println!("Running {} case(s) against {}", cases.len(), base);
	let mut runner = Runner::new(&base, Duration::from_secs(opts.timeout_secs), opts.token.as_deref(), palette)?;
	runner.run_suite(&cases).await;
	print_summary(runner.results(), palette);

	Ok(if runner.failed() > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
