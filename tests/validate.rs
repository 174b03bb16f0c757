use fleet_smoke::errors::CheckError;
use fleet_smoke::validate::{csv_preview, looks_like_csv, strip_bom, validate_keys, EMPTY_LIST_WARNING};
use serde_json::json;

fn keys(ks: &[&str]) -> Vec<String> {
	ks.iter().map(|k| k.to_string()).collect()
}

#[test]
fn no_expected_keys_is_trivially_valid() {
	let warning = validate_keys(&json!({"anything": 1}), &[]).unwrap();
	assert!(warning.is_none());
}

#[test]
fn mapping_with_all_keys_passes() {
	let data = json!({"monitored_vehicle_count": 5, "normal_ratio": 0.97, "extra": true});
	let warning = validate_keys(&data, &keys(&["monitored_vehicle_count", "normal_ratio"])).unwrap();
	assert!(warning.is_none());
}

#[test]
fn mapping_missing_keys_enumerates_exactly_the_missing_ones() {
	let data = json!({"monitored_vehicle_count": 5});
	let err = validate_keys(&data, &keys(&["monitored_vehicle_count", "normal_ratio"])).unwrap_err();
	match err {
		CheckError::MissingKeys(missing) => assert_eq!(missing, vec!["normal_ratio".to_string()]),
		other => panic!("expected MissingKeys, got {other:?}"),
	}
}

#[test]
fn missing_keys_keep_expected_list_order() {
	let data = json!({"b": 1});
	let err = validate_keys(&data, &keys(&["a", "b", "c"])).unwrap_err();
	match err {
		CheckError::MissingKeys(missing) => assert_eq!(missing, vec!["a".to_string(), "c".to_string()]),
		other => panic!("expected MissingKeys, got {other:?}"),
	}
	assert_eq!(
		CheckError::MissingKeys(vec!["a".into(), "c".into()]).to_string(),
		"missing keys: a, c"
	);
}

#[test]
fn sequence_checks_first_element_only() {
	let data = json!([{"name": "Chengdu", "value": 12}, {"name": "Chongqing"}]);
	let warning = validate_keys(&data, &keys(&["name", "value"])).unwrap();
	assert!(warning.is_none());
}

#[test]
fn empty_sequence_passes_with_warning() {
	let warning = validate_keys(&json!([]), &keys(&["name"])).unwrap();
	assert_eq!(warning.as_deref(), Some(EMPTY_LIST_WARNING));
}

#[test]
fn scalar_data_skips_key_validation() {
	assert!(validate_keys(&json!(42), &keys(&["name"])).unwrap().is_none());
	assert!(validate_keys(&json!("ok"), &keys(&["name"])).unwrap().is_none());
}

#[test]
fn sequence_of_primitives_skips_key_validation() {
	let data = json!(["深蓝SL03", "阿维塔11"]);
	assert!(validate_keys(&data, &keys(&["name"])).unwrap().is_none());
}

#[test]
fn csv_sniff_trusts_declared_content_type() {
	assert!(looks_like_csv("text/csv; charset=utf-8", "single-column"));
	assert!(looks_like_csv("application/csv", "single-column"));
}

#[test]
fn csv_sniff_falls_back_to_separator() {
	assert!(looks_like_csv("application/octet-stream", "vin,model\nL123,SL03"));
	assert!(!looks_like_csv("text/html", "<html>nope</html>"));
}

#[test]
fn bom_is_detected_and_stripped() {
	let (bom, rest) = strip_bom("\u{feff}vin,model");
	assert!(bom);
	assert_eq!(rest, "vin,model");

	let (bom, rest) = strip_bom("vin,model");
	assert!(!bom);
	assert_eq!(rest, "vin,model");
}

#[test]
fn preview_takes_leading_lines_only() {
	let body = "h1,h2\nr1a,r1b\nr2a,r2b\nr3a,r3b";
	assert_eq!(csv_preview(body, 3), "h1,h2\nr1a,r1b\nr2a,r2b");
}
