#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_base(&outdir_path, "default_base.rs")?;
    Ok(())
}

/// Create default_base.rs, containing definition of public constant DEFAULT_BASE
fn write_default_base(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_base = env::var("RUST_INTEGER_DIGITS_DEFAULT_BASE")
        .map(|s| s.parse::<u32>().expect("$RUST_INTEGER_DIGITS_DEFAULT_BASE must be an integer"))
        .unwrap_or(10u32);

    assert!(default_base >= 2, "$RUST_INTEGER_DIGITS_DEFAULT_BASE must be at least 2, got {}", default_base);

    let default_base_rs_path = outdir_path.join(filename);

    let default_base = format!("pub const DEFAULT_BASE: u32 = {default_base};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_base_rs_path) {
        Ok(existing_contents) if existing_contents == default_base => {},
        _ => {
            let mut default_base_rs = File::create(&default_base_rs_path)
                .expect("Could not create default_base.rs");
            write!(default_base_rs, "{default_base}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_base_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_INTEGER_DIGITS_DEFAULT_BASE");

    Ok(())
}
