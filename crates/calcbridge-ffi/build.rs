use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=native/calc.c");
    println!("cargo:rerun-if-changed=native/calc.h");
    println!("cargo:rerun-if-changed=tests/fixtures/add_only.c");

    cc::Build::new()
        .file("native/calc.c")
        .include("native")
        .warnings(true)
        .compile("calcbridge_calc");

    build_fixture_libraries();
}

/// Shared builds of the C sources for the dynamic backend tests
///
/// Only built when the test binaries can load them (unix, host == target).
/// On success `CALCBRIDGE_FIXTURE_DIR` names the directory holding them.
fn build_fixture_libraries() {
    let family = env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    if family != "unix" || host != target {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };
    let dir = out_dir.join("fixtures");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        println!("cargo:warning=skipping fixture libraries: {}", e);
        return;
    }

    let ext = if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        "dylib"
    } else {
        "so"
    };

    let compiler = match cc::Build::new().try_get_compiler() {
        Ok(compiler) => compiler,
        Err(e) => {
            println!("cargo:warning=skipping fixture libraries: {}", e);
            return;
        }
    };

    let fixtures = [
        ("calcbridge_dyn", "native/calc.c"),
        ("calcbridge_add_only", "tests/fixtures/add_only.c"),
    ];
    for (name, source) in fixtures {
        let output = dir.join(format!("lib{}.{}", name, ext));
        let status = compiler
            .to_command()
            .args(["-shared", "-fPIC", "-Inative", "-o"])
            .arg(&output)
            .arg(source)
            .status();
        match status {
            Ok(status) if status.success() => {}
            other => {
                println!(
                    "cargo:warning=could not build {}: {:?}",
                    output.display(),
                    other
                );
                return;
            }
        }
    }

    println!("cargo:rustc-env=CALCBRIDGE_FIXTURE_DIR={}", dir.display());
}
