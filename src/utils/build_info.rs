//! Build metadata stamped by `build.rs`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_HASH: &str = env!("BOOKING_CORE_BUILD_HASH");
pub const BUILD_STATUS: &str = env!("BOOKING_CORE_BUILD_STATUS");
pub const BUILD_TIMESTAMP: &str = env!("BOOKING_CORE_BUILD_TIMESTAMP");
pub const BUILD_TARGET: &str = env!("BOOKING_CORE_BUILD_TARGET");
pub const BUILD_PROFILE: &str = env!("BOOKING_CORE_BUILD_PROFILE");
pub const BUILD_RUSTC: &str = env!("BOOKING_CORE_BUILD_RUSTC");

/// One-line version banner for the `version` command.
pub fn version_line() -> String {
    format!(
        "booking_core v{} ({}-{}) · {} · {}",
        VERSION, BUILD_HASH, BUILD_STATUS, BUILD_TARGET, BUILD_PROFILE
    )
}

/// Multi-line build report.
pub fn full_report() -> String {
    format!(
        "booking_core v{}\nbuild: {}-{} at {}\ntarget: {} ({})\nrustc: {}",
        VERSION, BUILD_HASH, BUILD_STATUS, BUILD_TIMESTAMP, BUILD_TARGET, BUILD_PROFILE, BUILD_RUSTC
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_mentions_package_version() {
        assert!(version_line().contains(VERSION));
    }
}
