//! Build metadata embedded by the build script.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git branch at build time, or "unknown" outside a checkout.
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Git commit SHA at build time, or "unknown" outside a checkout.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// `{version}+{branch}.{short sha}`, with `.dirty` appended for builds from a
/// modified tree.
pub fn version_string() -> String {
    let short_sha = &GIT_SHA[..GIT_SHA.len().min(7)];
    let mut version = format!("{PKG_VERSION}+{GIT_BRANCH}.{short_sha}");
    if option_env!("VERGEN_GIT_DIRTY") == Some("true") {
        version.push_str(".dirty");
    }
    version
}
