//! End-to-end tests against the claro binary
//!
//! Run headless with --no-show so no display is required.

use std::process::Command;

use claro_core::pipeline::EnhancedImage;
use claro_core::{decoders, exporters};
use tempfile::tempdir;

fn claro() -> Command {
    Command::new(env!("CARGO_BIN_EXE_claro"))
}

#[test]
fn test_missing_input_exits_one_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no_such_file.jpg");
    let output = dir.path().join("result.jpg");

    let result = claro()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--no-show")
        .output()
        .expect("failed to spawn claro");

    assert_eq!(result.status.code(), Some(1), "Load failure must exit 1");
    assert!(!output.exists(), "No output may be produced on load failure");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("no_such_file.jpg"),
        "Error should name the missing file: {}",
        stderr
    );
}

#[test]
fn test_enhance_run_produces_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scene.png");
    let output = dir.path().join("scene_enhanced.png");

    // Mid-gray scene with a bright block so every stage has something to do
    let mut data = vec![0.4f32; 32 * 32 * 3];
    for y in 8..24 {
        for x in 8..24 {
            let idx = (y * 32 + x) * 3;
            data[idx] = 0.8;
            data[idx + 1] = 0.8;
            data[idx + 2] = 0.8;
        }
    }
    let scene = EnhancedImage {
        width: 32,
        height: 32,
        data,
        channels: 3,
    };
    exporters::export_png(&scene, &input).unwrap();

    let result = claro()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--no-show")
        .output()
        .expect("failed to spawn claro");

    assert!(
        result.status.success(),
        "claro should exit 0, stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(output.exists(), "Enhanced output file should exist");

    // Dimensions are preserved end to end
    let decoded = decoders::decode_image(&output).unwrap();
    assert_eq!(decoded.width, 32);
    assert_eq!(decoded.height, 32);

    // Advisory progress lines are printed for each stage
    let stdout = String::from_utf8_lossy(&result.stdout);
    for marker in ["1.", "2.", "3.", "4."] {
        assert!(
            stdout.contains(marker),
            "Missing stage line '{}' in output: {}",
            marker,
            stdout
        );
    }
    assert!(
        stdout.contains("scene_enhanced.png"),
        "Final confirmation should name the output path"
    );
}

#[test]
fn test_unsupported_output_extension_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scene.png");
    let scene = EnhancedImage {
        width: 8,
        height: 8,
        data: vec![0.5; 8 * 8 * 3],
        channels: 3,
    };
    exporters::export_png(&scene, &input).unwrap();

    let result = claro()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.bmp"))
        .arg("--no-show")
        .output()
        .expect("failed to spawn claro");

    assert_eq!(result.status.code(), Some(1));
}
