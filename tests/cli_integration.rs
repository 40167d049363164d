/// CLI integration tests for nutricare.
///
/// Each test spawns the compiled binary via `assert_cmd::cargo_bin_cmd!` and
/// points `NUTRICARE_HOME` at a fresh `TempDir`, so no test touches the real
/// `~/.nutricare` profile.
use assert_cmd::cargo_bin_cmd;
use chrono::Datelike;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("nutricare");
    c.env("NUTRICARE_HOME", dir.path());
    c.env_remove("NUTRICARE_LOG");
    c
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

fn num(v: &Value) -> f64 {
    v.as_f64().unwrap_or_else(|| panic!("not a number: {v}"))
}

fn assert_num(v: &Value, expected: f64) {
    let got = num(v);
    assert!((got - expected).abs() < 1e-6, "expected {expected}, got {got}");
}

/// Store the 70 kg / 175 cm / 30 year old male reference profile.
fn set_reference_profile(dir: &TempDir) {
    let born = (chrono::Local::now().year() - 30).to_string();
    for (key, value) in [
        ("weight", "70"),
        ("height", "175"),
        ("birth_year", born.as_str()),
        ("sex", "male"),
    ] {
        cmd_in(dir)
            .args(["config", "set", key, value])
            .assert()
            .success();
    }
}

// ── init & config ────────────────────────────────────────────────────────────

#[test]
fn test_init_skip_creates_config_file() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config initialized"));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_init_interactive_setup() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("init")
        .write_stdin("68\n172\n1990\nrobot\nfemale\nlight\nlose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid sex"))
        .stdout(predicate::str::contains("Setup complete"));

    let out = cmd_in(&dir).args(["config", "show"]).assert().success();
    let profile = &parse_json(&out)["data"]["config"]["profile"];
    assert_num(&profile["weight_kg"], 68.0);
    assert_eq!(profile["sex"], "female");
    assert_eq!(profile["activity_level"], "light");
    assert_eq!(profile["goal"], "weight_loss");
}

#[test]
fn test_init_without_input_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).arg("init").write_stdin("").assert().failure();
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&out);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["command"], "config");
    assert_eq!(json["data"]["config"]["units"]["system"], "metric");
    assert_eq!(json["data"]["config"]["profile"]["activity_level"], "moderate");
}

#[test]
fn test_config_set_persists() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "weight", "72.5"])
        .assert()
        .success();
    let out = cmd_in(&dir).args(["config", "show"]).assert().success();
    assert_num(
        &parse_json(&out)["data"]["config"]["profile"]["weight_kg"],
        72.5,
    );
}

#[cfg(unix)]
#[test]
fn test_config_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["init", "--skip"]).assert().success();
    let mode = std::fs::metadata(dir.path().join("config.toml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_set_invalid_sex_is_profile_error() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["config", "set", "sex", "robot"])
        .assert()
        .failure();
    let err = parse_stderr_json(&out);
    assert_eq!(err["status"], "error");
    assert_eq!(err["error"]["code"], "invalid_profile");
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_infinite_weight_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["config", "set", "weight", "inf"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["error"]["code"], "invalid_profile");
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_init_keeps_malformed_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[profile\nweight_kg = 70").unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[profile\nweight_kg = 70"
    );
}

#[test]
fn test_config_set_unknown_key() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["config", "set", "shoe_size", "44"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["error"]["code"], "general_error");
}

#[test]
fn test_config_imperial_weight_is_stored_metric() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "units.system", "imperial"])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["config", "set", "weight", "154.3234"])
        .assert()
        .success();
    let out = cmd_in(&dir).args(["config", "show"]).assert().success();
    let kg = num(&parse_json(&out)["data"]["config"]["profile"]["weight_kg"]);
    assert!((kg - 70.0).abs() < 1e-3);
}

// ── metrics ──────────────────────────────────────────────────────────────────

#[test]
fn test_metrics_from_flags() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args([
            "metrics", "--weight", "70", "--height", "175", "--age", "30", "--sex", "male",
        ])
        .assert()
        .success();
    let json = parse_json(&out);
    assert_eq!(json["command"], "metrics");
    let m = &json["data"]["metrics"];
    assert_num(&m["bmi"], 22.86);
    assert_eq!(m["bmi_category"], "normal");
    assert_num(&m["bmr"], 1648.75);
    assert_num(&m["tdee"], 2555.56);
    assert_num(&m["daily_calorie_target"], 2555.56);
    assert_eq!(json["data"]["water_ml"], 2450);
}

#[test]
fn test_metrics_from_stored_profile() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let out = cmd_in(&dir)
        .args(["metrics", "--goal", "weight_loss"])
        .assert()
        .success();
    let m = &parse_json(&out)["data"]["metrics"];
    assert_num(&m["bmr"], 1648.75);
    assert_num(&m["daily_calorie_target"], 2055.56);
}

#[test]
fn test_metrics_empty_profile_reports_nulls() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir).arg("metrics").assert().success();
    let json = parse_json(&out);
    assert!(json["data"]["metrics"]["bmi"].is_null());
    assert_eq!(json["data"]["metrics"]["bmi_category"], "unknown");
    assert!(json["data"]["macros"].is_null());
}

#[test]
fn test_metrics_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["metrics", "--weight=-5"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["error"]["code"], "invalid_profile");

    let out = cmd_in(&dir)
        .args(["metrics", "--age", "5"])
        .assert()
        .failure();
    let err = parse_stderr_json(&out);
    assert_eq!(err["command"], "metrics");
    assert!(
        err["error"]["message"]
            .as_str()
            .unwrap()
            .contains("between 10 and 120")
    );
}

#[test]
fn test_metrics_human_output() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "metrics", "--weight", "70", "--height", "175", "--age", "30", "--sex", "male", "-H",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health Summary"))
        .stdout(predicate::str::contains("22.86"));
}

// ── macros ───────────────────────────────────────────────────────────────────

#[test]
fn test_macros_explicit_calories() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["macros", "--calories", "2000"])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_num(&data["protein_g"], 125.0);
    assert_num(&data["carbs_g"], 225.0);
    assert_num(&data["fats_g"], 66.67);
    assert_eq!(data["percentages"]["protein"], 25);
}

#[test]
fn test_macros_from_profile_target() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let out = cmd_in(&dir).arg("macros").assert().success();
    assert_num(&parse_json(&out)["data"]["daily_calories"], 2555.56);
}

#[test]
fn test_macros_without_target_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .arg("macros")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no calorie target"));
}

// ── burn & exercises ─────────────────────────────────────────────────────────

#[test]
fn test_burn_running() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["burn", "running", "30", "--weight", "70"])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_eq!(data["exercise"], "running");
    assert_eq!(data["known_exercise"], true);
    assert_num(&data["calories_burned"], 315.0);

    let out = cmd_in(&dir)
        .args(["burn", "running", "30", "--weight", "70", "--intensity", "high"])
        .assert()
        .success();
    assert_num(&parse_json(&out)["data"]["calories_burned"], 378.0);
}

#[test]
fn test_burn_unknown_exercise_uses_default_met() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["burn", "parkour", "60", "--weight", "80"])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_eq!(data["known_exercise"], false);
    assert_num(&data["met_value"], 5.0);
    assert_num(&data["calories_burned"], 400.0);
}

#[test]
fn test_burn_uses_profile_weight() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let out = cmd_in(&dir)
        .args(["burn", "jump rope", "10"])
        .assert()
        .success();
    // 11.0 * 70 * 10/60
    assert_num(&parse_json(&out)["data"]["calories_burned"], 128.33);
}

#[test]
fn test_burn_without_weight_fails() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["burn", "yoga", "30"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["command"], "burn");
}

#[test]
fn test_burn_negative_weight_is_profile_error() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["burn", "running", "30", "--weight=-70"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["error"]["code"], "invalid_profile");
}

#[test]
fn test_burn_infinite_weight_is_profile_error() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["burn", "running", "30", "--weight", "inf"])
        .assert()
        .failure();
    assert_eq!(parse_stderr_json(&out)["error"]["code"], "invalid_profile");
}

#[test]
fn test_burn_rejects_zero_minutes() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["burn", "yoga", "0", "--weight", "60"])
        .assert()
        .failure();
}

#[test]
fn test_exercises_catalog() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir).arg("exercises").assert().success();
    let list = parse_json(&out)["data"]["exercises"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(list.len(), 28);
    assert!(
        list.iter()
            .any(|e| e["name"] == "jump_rope" && e["met_value"] == 11.0)
    );
}

#[test]
fn test_exercises_recommend() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args([
            "exercises",
            "--recommend",
            "--weight",
            "60",
            "--height",
            "165",
            "--sex",
            "female",
            "--goal",
            "weight_loss",
        ])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_eq!(data["based_on"]["bmi_category"], "normal");
    assert_eq!(data["recommended_exercises"][0], "zumba");
}

#[test]
fn test_exercises_recommend_needs_profile() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["exercises", "--recommend", "--weight", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please complete your profile"));
}

// ── meal, analyze, day ───────────────────────────────────────────────────────

#[test]
fn test_meal_half_portion() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args([
            "meal",
            "--calories",
            "500",
            "--protein",
            "30",
            "--carbs",
            "55.5",
            "--fats",
            "17.3",
            "--consumed",
            "50",
        ])
        .assert()
        .success();
    let adjusted = &parse_json(&out)["data"]["adjusted"];
    assert_num(&adjusted["calories"], 250.0);
    assert_num(&adjusted["carbs"], 27.75);
    assert_num(&adjusted["fats"], 8.65);
    assert_num(&adjusted["fiber"], 0.0);
}

#[test]
fn test_meal_rejects_bad_percentage() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "meal",
            "--calories",
            "500",
            "--protein",
            "30",
            "--carbs",
            "50",
            "--fats",
            "20",
            "--consumed",
            "150",
        ])
        .assert()
        .failure();
}

#[test]
fn test_meal_rejects_negative_nutrients() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "meal",
            "--calories=-500",
            "--protein",
            "30",
            "--carbs",
            "50",
            "--fats",
            "20",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("calories must be a non-negative number"));
}

#[test]
fn test_analyze_with_explicit_target() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args([
            "analyze",
            "--consumed",
            "2600,50,300,90",
            "--target",
            "2000,125,225,66.67",
        ])
        .assert()
        .success();
    let codes: Vec<String> = parse_json(&out)["data"]["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        codes,
        ["calorie_surplus", "protein_low", "carbs_high", "fat_high"]
    );
}

#[test]
fn test_analyze_target_from_profile() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let out = cmd_in(&dir)
        .args(["analyze", "--consumed", "2500,160,290,85"])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_num(&data["target"]["calories"], 2555.56);
    assert_eq!(data["recommendations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_analyze_rejects_malformed_totals() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["analyze", "--consumed", "2000,100", "--target", "2000,1,1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("4 values"));
}

#[test]
fn test_day_balance() {
    let dir = TempDir::new().unwrap();
    let log = r#"{
        "meals": [
            {"calories": 500, "protein": 30, "carbs": 50, "fats": 10, "consumed_percentage": 50},
            {"calories": 300, "protein": 20, "carbs": 50, "fats": 10}
        ],
        "exercises": [{"exercise_kind": "running", "duration_minutes": 30}],
        "water_ml": 1500,
        "steps": 8000
    }"#;
    let out = cmd_in(&dir)
        .args(["day", "--input", log, "--weight", "70"])
        .assert()
        .success();
    let data = &parse_json(&out)["data"];
    assert_num(&data["balance"]["calories_consumed"], 550.0);
    assert_num(&data["balance"]["calories_burned"], 315.0);
    assert_num(&data["balance"]["net_calories"], 235.0);
    assert_num(&data["balance"]["calorie_target"], 2000.0);
    assert_eq!(data["exercise"]["total_sessions"], 1);
}

#[test]
fn test_day_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let out = cmd_in(&dir)
        .args(["day", "--input", "-"])
        .write_stdin(r#"{"water_ml": 1000}"#)
        .assert()
        .success();
    assert_num(&parse_json(&out)["data"]["balance"]["water_progress"], 50.0);
}

#[test]
fn test_day_exercise_without_weight_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "day",
            "--input",
            r#"{"exercises":[{"exercise_kind":"yoga","duration_minutes":20}]}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("need a weight"));
}

#[test]
fn test_day_rejects_zero_minute_session() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "day",
            "--input",
            r#"{"exercises":[{"exercise_kind":"running","duration_minutes":0}]}"#,
            "--weight",
            "70",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one minute"));
}

#[test]
fn test_day_rejects_out_of_range_portions() {
    let dir = TempDir::new().unwrap();
    for pct in ["250", "-50"] {
        let log = format!(
            r#"{{"meals":[{{"calories":500,"protein":30,"carbs":50,"fats":10,"consumed_percentage":{pct}}}]}}"#
        );
        cmd_in(&dir)
            .args(["day", "--input", &log])
            .assert()
            .failure()
            .stderr(predicate::str::contains("between 0 and 100"));
    }
}

#[test]
fn test_day_rejects_negative_meal_values() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args([
            "day",
            "--input",
            r#"{"meals":[{"calories":500,"protein":-30,"carbs":50,"fats":10}]}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("protein must be a non-negative number"));
}

#[test]
fn test_day_invalid_json() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["day", "--input", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day log JSON"));
}

// ── completions ──────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nutricare"));
}
