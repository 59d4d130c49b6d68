use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SSHLS_VERSION");

    // Release builds pin the version from CI; local builds use the manifest.
    let version = env::var("SSHLS_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=SSHLS_VERSION={version}");

    let hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SSHLS_BUILD_HASH={hash}");
}

fn git_short_hash() -> Option<String> {
    Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}
