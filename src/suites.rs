use crate::models::{SuiteConfig, TestCase};

/// Dashboard endpoints, one probe each. Envelope check only, no expected
/// keys (the dashboard payloads vary too much for a shallow contract).
pub fn dashboard_suite() -> Vec<TestCase> {
	vec![
		TestCase::json("Vehicle status breakdown", "/dashboard/stats/vehicle-status"),
		TestCase::json("Region risk distribution", "/dashboard/distribution/region-risks"),
		// deprecated endpoint, still probed until it is removed server-side
		TestCase::json("Health assessment (deprecated)", "/dashboard/stats/health-assessment"),
		TestCase::json("Usage intensity KPIs", "/dashboard/kpis/usage-intensity"),
		TestCase::json("Brand distribution", "/dashboard/distribution/brands"),
		TestCase::json("Charge behavior stats", "/dashboard/stats/charge-behavior"),
		TestCase::json("Charge health KPIs", "/dashboard/kpis/charge-health"),
		TestCase::json("Charge/discharge cycle trend", "/dashboard/trends/charge-cycles"),
		TestCase::json("Core KPI summary", "/dashboard/kpis/summary"),
		TestCase::json("Vehicle geo distribution", "/dashboard/distribution/vehicles"),
		TestCase::json("Vehicle geo distribution (online only)", "/dashboard/distribution/vehicles")
			.with_params(&[("status", "online")]),
		TestCase::json("Fault vehicle charge cycle trend", "/dashboard/trends/fault-vehicle-charge-cycles")
			.with_params(&[("days", "30")]),
		TestCase::json("Vehicle model distribution", "/dashboard/distribution/vehicle-models"),
		TestCase::json("Dynamic ranking", "/dashboard/ranking")
			.with_params(&[("dimension", "region"), ("metric", "health")]),
	]
}

/// Statistics endpoints with shallow key validation and one CSV export.
pub fn statistics_suite(cfg: &SuiteConfig) -> Vec<TestCase> {
	let days = cfg.days.to_string();
	vec![
		// plain list of series names, nothing to key-check
		TestCase::json("Car series list", "/statistics/series-list"),
		TestCase::json("KPI overview", "/statistics/overview")
			.with_params(&[("carSeries", &cfg.car_series)])
			.expect_keys(&["monitored_vehicle_count", "normal_ratio"]),
		TestCase::json("Map distribution", "/statistics/vehicle-distribution")
			.with_params(&[("carSeries", &cfg.car_series)])
			.expect_keys(&["name", "value"]),
		TestCase::json("Maintenance stats", "/statistics/maintenance")
			.expect_keys(&["total_push_count"]),
		TestCase::json("Charge/discharge monitoring", "/statistics/charge-process")
			.with_params(&[("carSeries", &cfg.car_series), ("start", &cfg.start), ("end", &cfg.end)])
			.expect_keys(&["chargeDischarge", "overCurrent", "soc"]),
		TestCase::json("Driving behavior monitoring", "/statistics/driving-behavior")
			.with_params(&[("carSeries", &cfg.car_series), ("start", &cfg.start), ("end", &cfg.end)])
			.expect_keys(&["speedDistribution", "energyTrend"]),
		TestCase::json("Vehicle list (page 1)", "/statistics/vehicle-list")
			.with_params(&[("page", "1"), ("pageSize", "5"), ("carSeries", &cfg.car_series)])
			.expect_keys(&["total", "records"]),
		TestCase::csv("Vehicle list export (CSV)", "/statistics/vehicle-list/export")
			.with_params(&[("carSeries", &cfg.car_series)]),
		TestCase::json("Multi-series charge trends", "/statistics/charge-trends/multi-series")
			.with_params(&[("series", &cfg.series), ("days", &days)])
			.expect_keys(&["date", "model", "fast_charge_count"]),
		TestCase::json("Multi-series driving trends", "/statistics/driving-trends/multi-series")
			.with_params(&[("series", &cfg.series), ("days", &days)])
			.expect_keys(&["date", "model", "avg_speed"]),
	]
}
