use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use callout_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .txt files from a directory
fn collect_txt_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Arguments for one run, pinned to an empty configuration file in `dir` so
/// that no local or user configuration is picked up.
fn args(dir: &Path, inputs: Vec<PathBuf>, output: PathBuf) -> Args {
    let config = dir.join("empty.toml");
    if !config.exists() {
        fs::write(&config, "").expect("Failed to write empty config");
    }

    Args {
        inputs,
        output: Some(output),
        config: Some(config),
        log_level: "off".to_string(),
        ..Args::default()
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_txt_files(demos_dir());

    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &demos {
        let stem = demo_path.file_stem().unwrap().to_string_lossy();
        let output_path = temp_dir.path().join(format!("{stem}.out"));
        let expected_path = demo_path.with_extension("out");

        if let Err(e) = callout_cli::run(&args(
            temp_dir.path(),
            vec![demo_path.clone()],
            output_path.clone(),
        )) {
            failed_demos.push((demo_path.clone(), e.to_string()));
            continue;
        }

        let actual = fs::read_to_string(&output_path).expect("Failed to read output");
        let expected = fs::read_to_string(&expected_path).expect("Failed to read expected output");
        if actual != expected {
            failed_demos.push((
                demo_path.clone(),
                format!("output differs:\n{actual}\nexpected:\n{expected}"),
            ));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} demos passed", demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_txt_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let stem = demo_path.file_stem().unwrap().to_string_lossy();
        let output_path = temp_dir.path().join(format!("error_{stem}.out"));

        // Lenient parsing only warns about these inputs.
        let lenient = args(temp_dir.path(), vec![demo_path.clone()], output_path.clone());
        assert!(
            callout_cli::run(&lenient).is_ok(),
            "{} should render without --strict",
            demo_path.display()
        );

        let strict = Args {
            strict: true,
            ..args(temp_dir.path(), vec![demo_path.clone()], output_path)
        };
        if callout_cli::run(&strict).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_consecutive_files_do_not_merge() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    let output = temp_dir.path().join("out.txt");
    // No trailing newline: the second file must still start a new command.
    fs::write(&first, "ls -l\n   --\nlong listing").unwrap();
    fs::write(&second, "pwd").unwrap();

    callout_cli::run(&args(temp_dir.path(), vec![first, second], output.clone()))
        .expect("run failed");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "ls -l\n   |\n   \\- long listing\n\npwd\n"
    );
}

#[test]
fn e2e_glyph_overrides_and_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("input.txt");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "rm -rf /tmp/foo\n   ---\nrecursive flag\n").unwrap();
    fs::write(&config, "[style]\npreset = \"rounded\"\n").unwrap();

    let args = Args {
        config: Some(config),
        joint: Some("*".to_string()),
        ..args(temp_dir.path(), vec![input], output.clone())
    };
    callout_cli::run(&args).expect("run failed");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "rm -rf /tmp/foo\n   ╰*╯\n    │\n    ╰ recursive flag\n"
    );
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let result = callout_cli::run(&args(
        temp_dir.path(),
        vec![temp_dir.path().join("absent.txt")],
        temp_dir.path().join("out.txt"),
    ));

    assert!(result.is_err());
}
