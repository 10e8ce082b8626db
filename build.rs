//! Stamps the footer build label with the crate version and short commit.
//!
//! `MENU_CART_GIT_SHA` can be set by a release job building outside a
//! checkout; otherwise the local HEAD is used, or "dev" without git.

use std::path::Path;
use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=MENU_CART_VERSION={}",
        env!("CARGO_PKG_VERSION")
    );

    let sha = std::env::var("MENU_CART_GIT_SHA")
        .ok()
        .filter(|sha| !sha.trim().is_empty())
        .or_else(head_commit)
        .unwrap_or_else(|| "dev".to_string());
    println!("cargo:rustc-env=MENU_CART_GIT_SHA={sha}");

    println!("cargo:rerun-if-env-changed=MENU_CART_GIT_SHA");
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
