//! Package manifest placeholder substitution.
//!
//! Substitution is a literal, case-sensitive substring replace over the whole
//! file. Any occurrence of a token is replaced, including occurrences embedded
//! in unrelated text.

/// Manifest file name inside the package root.
pub const MANIFEST_FILE: &str = "pkg.json";

/// Token replaced with the package version.
pub const VERSION_TOKEN: &str = "$Version$";

/// Token replaced with the host install version.
pub const INSTALL_VERSION_TOKEN: &str = "$DynamoVersion$";

/// All tokens a processed manifest must no longer contain.
pub const PLACEHOLDER_TOKENS: [&str; 2] = [VERSION_TOKEN, INSTALL_VERSION_TOKEN];

/// Replace both placeholder tokens in manifest content.
pub fn substitute_placeholders(
    content: &str,
    package_version: &str,
    install_version: &str,
) -> String {
    content.replace(VERSION_TOKEN, package_version).replace(INSTALL_VERSION_TOKEN, install_version)
}

/// Tokens still present in `content`.
pub fn remaining_placeholders(content: &str) -> Vec<String> {
    PLACEHOLDER_TOKENS
        .iter()
        .filter(|token| content.contains(*token))
        .map(|token| token.to_string())
        .collect()
}
