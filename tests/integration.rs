use std::{fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_ipmplan"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
}

#[test]
fn basic_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("basic_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    run_bin(&["--plan-dir", test_dir_str, "init"]);
    assert!(test_dir.join("plan.json").exists());

    run_bin(&["--plan-dir", test_dir_str, "summary"]);

    run_bin(&["--plan-dir", test_dir_str, "report"]);
    run_bin(&["--plan-dir", test_dir_str, "report", "--skip-agent-details"]);
    assert!(test_dir.join("report-0000.txt").exists());
    assert!(test_dir.join("report-0001.txt").exists());
    assert!(test_dir.join("report-0001.json").exists());

    run_bin(&["--plan-dir", test_dir_str, "clean"]);
    assert!(!test_dir.join("report-0000.txt").exists());
    assert!(test_dir.join("plan.json").exists());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn report_from_handwritten_plan() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("handwritten_plan");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let plan_contents = r#"{
  "compartments": [
    { "id": "c1", "name": "North", "width": 8, "length": 50, "count": 15 }
  ],
  "agents": [
    {
      "scientificName": "Aphidius Colemani",
      "brandedNames": [{ "name": "Aphipar" }],
      "populationPerUnit": 1000,
      "pricePerUnit": 45
    }
  ],
  "selections": [
    {
      "scientificName": "Aphidius Colemani",
      "desiredPestPerMeter": 1,
      "selectedCompartments": ["c1"]
    }
  ],
  "program": {
    "week": 1,
    "weeklyProgramCost": 150,
    "agents": [
      { "scientificName": "Aphidius Colemani", "quantity": 4 }
    ]
  }
}"#;

    fs::write(test_dir.join("plan.json"), plan_contents).expect("failed to write plan file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    run_bin(&[
        "--plan-dir",
        test_dir_str,
        "report",
        "--title",
        "Week 1 order",
        "--notes",
        "Check pest pressure first.",
    ]);

    let report = fs::read_to_string(test_dir.join("report-0000.txt"))
        .expect("failed to read report file");
    assert!(report.contains("Week 1 order"));
    assert!(report.contains("Total area: 6000 m2"));
    assert!(report.contains("6 units (4 from program, 2 extra) = $90.00"));
    assert!(report.contains("Extra cost: $90.00"));
    assert!(report.contains("Total cost: $240.00"));
    assert!(report.contains("Check pest pressure first."));

    fs::remove_dir_all(&test_dir).ok();
}
