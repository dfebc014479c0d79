use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const BADGE_FILES: [&str; 6] = [
    "calc.png",
    "calc-active.png",
    "savings.png",
    "savings-active.png",
    "annual.png",
    "annual-active.png",
];

#[test]
fn badge_driver_creates_all_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    run_generator(&output_dir);

    for filename in BADGE_FILES {
        let path = output_dir.join(filename);
        assert!(path.exists(), "missing icon: {}", path.display());

        let img = image::open(&path)
            .unwrap_or_else(|e| panic!("{} is not a readable PNG: {e}", path.display()));
        assert_eq!(img.width(), 81, "{filename} width");
        assert_eq!(img.height(), 81, "{filename} height");
        assert_eq!(img.color(), image::ColorType::Rgba8, "{filename} color type");
    }
}

#[test]
fn badge_circle_uses_palette_colors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    run_generator(&output_dir);

    // Inside the circle, left of the centered label.
    let normal = image::open(output_dir.join("annual.png")).unwrap().to_rgba8();
    assert_eq!(normal.get_pixel(12, 40).0, [153, 153, 153, 255], "annual.png circle fill");

    let active = image::open(output_dir.join("annual-active.png")).unwrap().to_rgba8();
    assert_eq!(active.get_pixel(12, 40).0, [0, 122, 255, 255], "annual-active.png circle fill");

    // Corners outside the circle stay transparent.
    assert_eq!(normal.get_pixel(0, 0)[3], 0);
    assert_eq!(normal.get_pixel(80, 80)[3], 0);
}

#[test]
fn second_run_overwrites_without_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("images");

    run_generator(&output_dir);
    let first = std::fs::read(output_dir.join("savings.png")).unwrap();

    run_generator(&output_dir);
    let second = std::fs::read(output_dir.join("savings.png")).unwrap();

    // Same machine, same font chain: the overwrite is pixel-identical.
    assert_eq!(first, second);
}

/// Runs the badge generator with `-o <output_dir>` and asserts success.
fn run_generator(output_dir: &Path) {
    let output = Command::new(binary_path("badge-icons"))
        .arg("-o")
        .arg(output_dir)
        .output()
        .expect("Failed to run badge-icons binary");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("badge-icons exited with {}", output.status);
    }
}

/// Gets the path to a generator binary, building it first if needed.
fn binary_path(name: &str) -> PathBuf {
    let debug_path = Path::new("target/debug").join(name);
    if debug_path.exists() {
        return debug_path;
    }

    let build_output = Command::new("cargo")
        .args(["build", "--bin", name])
        .output()
        .expect("Failed to run cargo build");

    if !build_output.status.success() {
        panic!(
            "Failed to build {name}: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    debug_path
}
