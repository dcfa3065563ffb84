use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use nxdoc_cli::Args;

fn definitions_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../definitions")
}

/// Collects all .nxdl.xml files below a directory
fn collect_nxdl_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                files.extend(collect_nxdl_files(&path));
            } else if path.to_string_lossy().ends_with(".nxdl.xml") {
                files.push(path);
            }
        }
    }

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        category: None,
        log_level: "off".to_string(),
    }
}

fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let name = input.file_name().unwrap().to_string_lossy();
    dir.join(name.replace(".nxdl.xml", ".rst"))
}

#[test]
fn e2e_smoke_test_valid_definitions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid: Vec<_> = ["base_classes", "applications", "contributed_definitions"]
        .iter()
        .flat_map(|dir| collect_nxdl_files(&definitions_dir().join(dir)))
        .collect();

    assert!(!valid.is_empty(), "No valid definitions found");

    let mut failed = Vec::new();

    for path in &valid {
        let output = output_path(temp_dir.path(), path);

        match nxdoc_cli::run(&args(path, &output)) {
            Ok(()) => {
                let page = fs::read_to_string(&output).expect("output written");
                let stem = output.file_stem().unwrap().to_string_lossy().to_string();
                assert!(page.starts_with(".. auto-generated by script nxdl2rst"));
                assert!(page.contains(&format!(".. _{stem}:\n")));
                assert!(page.contains("**Structure**:"));
            }
            Err(e) => failed.push((path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid definitions that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid definition(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} valid definitions rendered", valid.len());
}

#[test]
fn e2e_smoke_test_error_definitions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let errors = collect_nxdl_files(&definitions_dir().join("errors"));

    assert!(!errors.is_empty(), "No error definitions found in errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for path in &errors {
        let output = output_path(temp_dir.path(), path);

        if nxdoc_cli::run(&args(path, &output)).is_ok() {
            unexpectedly_succeeded.push(path.clone());
        }
        assert!(
            !output.exists(),
            "{} left partial output behind",
            path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError definitions that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error definition(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error definitions failed as expected",
        errors.len()
    );
}

#[test]
fn e2e_category_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("NXloose.nxdl.xml");
    fs::write(
        &input,
        r#"<definition xmlns="http://definition.nexusformat.org/nxdl/@NXDL_RELEASE@" name="NXloose" version="1.0" category="contributed">
  <doc>Lives outside the definitions tree.</doc>
</definition>
"#,
    )
    .unwrap();
    let output = temp_dir.path().join("NXloose.rst");

    let mut cli = args(&input, &output);
    assert!(nxdoc_cli::run(&cli).is_err(), "unknown directory must fail");

    cli.category = Some("contributed_definitions".to_string());
    nxdoc_cli::run(&cli).expect("renders with explicit category");

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("**Category**:\n  Contributed Definitions.\n"));
    assert!(page.ends_with("/contributed_definitions/NXloose.nxdl.xml.\n"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("base_classes/NXabsent.nxdl.xml");
    let output = temp_dir.path().join("out.rst");

    let err = nxdoc_cli::run(&args(&input, &output)).unwrap_err();
    assert!(matches!(err, nxdoc::NxdocError::Io(_)));
}

#[test]
fn e2e_category_mismatch_still_renders() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let dir = temp_dir.path().join("applications");
    fs::create_dir(&dir).unwrap();
    let input = dir.join("NXmisfiled.nxdl.xml");
    fs::write(
        &input,
        r#"<definition xmlns="http://definition.nexusformat.org/nxdl/@NXDL_RELEASE@" name="NXmisfiled" version="1.0" category="base">
  <doc>Declares the wrong category.</doc>
</definition>
"#,
    )
    .unwrap();
    let output = temp_dir.path().join("NXmisfiled.rst");

    nxdoc_cli::run(&args(&input, &output)).expect("a warning does not stop rendering");

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("**Category**:\n  Application Definitions.\n"));
}
