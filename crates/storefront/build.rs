//! Build script for the storefront crate.
//!
//! Computes a content hash for the stylesheet so templates can emit a
//! cache-busting query parameter via `env!("CSS_HASH")`.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(content) = fs::read(&css_path) else {
        // Stylesheet may be absent in stripped-down builds
        println!("cargo:rustc-env=CSS_HASH=dev");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..8).unwrap_or("dev");
    println!("cargo:rustc-env=CSS_HASH={short_hash}");
}
