use std::process::Command;

/// Embed the short commit hash as `GIT_HASH` for the startup log line.
fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"])
        .map(|hash| {
            let dirty = git(&["status", "--porcelain"]).is_some_and(|out| !out.is_empty());
            if dirty { format!("{}-dirty", hash) } else { hash }
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
