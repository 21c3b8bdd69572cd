//! Version resolution.
//!
//! This module contains the resolution of a version token into a vendor and a canonical version.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// The vendor assumed when the token carries no vendor prefix.
pub(crate) const DEFAULT_VENDOR: &str = "openjdk";

// Pattern that splits a vendor-prefixed token into vendor and version.
#[doc(hidden)]
static VENDOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^([A-Za-z]+)-(.+)$").expect("vendor prefix pattern"));

/// A version token resolved into vendor and canonical version.
#[derive(Debug, PartialEq)]
pub(crate) struct ResolvedVersion {
    /// The vendor of the runtime.
    pub(crate) vendor: String,
    /// The canonical version of the runtime.
    pub(crate) version: String,
}

impl ResolvedVersion {
    /// Resolves the given version token.
    ///
    /// Resolution never fails: tokens without vendor prefix or alias pass through verbatim.
    pub(crate) fn from_token(token: &str) -> Self {
        // the one-off 9 release is matched against the raw token, before any prefix splitting
        if token == "9.0.0" || token == "9+181" {
            return Self {
                vendor: DEFAULT_VENDOR.to_string(),
                version: "9-181".to_string(),
            };
        }

        let (vendor, version) = match VENDOR_PREFIX.captures(token) {
            Some(captures) => (captures[1].to_string(), captures[2].to_string()),
            None => (DEFAULT_VENDOR.to_string(), token.to_string()),
        };
        let version = canonical(&version).to_string();
        trace!(%vendor, %version, "resolved token");

        Self { vendor, version }
    }
}

// Maps release shorthands to the canonical version; unknown versions pass through.
#[doc(hidden)]
fn canonical(version: &str) -> &str {
    match version {
        "7" | "1.7" => "1.7.0_242",
        "8" | "1.8" => "1.8.0_232",
        "9" | "1.9" => "9.0.4",
        "10" => "10.0.2",
        "11" => "11.0.5",
        "12" => "12.0.2",
        "13" => "13.0.1",
        _ => version,
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use test_log::test;

    #[test]
    fn shorthand_tokens() {
        let expectations = [
            ("7", "1.7.0_242"),
            ("1.7", "1.7.0_242"),
            ("8", "1.8.0_232"),
            ("1.8", "1.8.0_232"),
            ("9", "9.0.4"),
            ("1.9", "9.0.4"),
            ("10", "10.0.2"),
            ("11", "11.0.5"),
            ("12", "12.0.2"),
            ("13", "13.0.1"),
        ];
        for (token, version) in expectations {
            let resolved = ResolvedVersion::from_token(token);
            assert_eq!(resolved.vendor, "openjdk", "token {token}");
            assert_eq!(resolved.version, version, "token {token}");
        }
    }

    #[test]
    fn vendor_prefix() {
        let resolved = ResolvedVersion::from_token("zulu-13.0.1");
        assert_eq!(resolved.vendor, "zulu");
        assert_eq!(resolved.version, "13.0.1");
    }

    #[test]
    fn vendor_prefix_with_shorthand() {
        let resolved = ResolvedVersion::from_token("zulu-8");
        assert_eq!(resolved.vendor, "zulu");
        assert_eq!(resolved.version, "1.8.0_232");
    }

    #[test]
    fn one_off_9_release() {
        for token in ["9.0.0", "9+181"] {
            let resolved = ResolvedVersion::from_token(token);
            assert_eq!(resolved.vendor, "openjdk", "token {token}");
            assert_eq!(resolved.version, "9-181", "token {token}");
        }
    }

    #[test]
    fn exact_version_passes_through() {
        let resolved = ResolvedVersion::from_token("11.0.5");
        assert_eq!(resolved.vendor, "openjdk");
        assert_eq!(resolved.version, "11.0.5");
    }

    #[test]
    fn unknown_token_passes_through() {
        let resolved = ResolvedVersion::from_token("unknown-token-xyz");
        assert_eq!(resolved.vendor, "unknown");
        assert_eq!(resolved.version, "token-xyz");
    }

    #[test]
    fn unresolvable_token_passes_through() {
        let resolved = ResolvedVersion::from_token("whatever_42");
        assert_eq!(resolved.vendor, "openjdk");
        assert_eq!(resolved.version, "whatever_42");
    }

    #[test]
    fn trailing_dash_is_no_prefix() {
        let resolved = ResolvedVersion::from_token("zulu-");
        assert_eq!(resolved.vendor, "openjdk");
        assert_eq!(resolved.version, "zulu-");
    }
}
