//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shipnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shipnotes.yaml";

/// Default changelog file
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Sub-heading inserted after the version heading
pub const DEFAULT_RELEASE_NOTES_HEADING: &str = "Release Notes";

/// Placeholder for the previous tag in a diff URL template
pub const OLD_PLACEHOLDER: &str = "{old}";

/// Placeholder for the released tag in a diff URL template
pub const NEW_PLACEHOLDER: &str = "{new}";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".shipnotes.toml",
        ".shipnotes.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# shipnotes configuration

[release_notes]
changelog = "CHANGELOG.md"
heading = "Release Notes"
# GitLab CI:        "$CI_PROJECT_URL/-/compare/{old}...{new}"
# GitHub Workflow:  "$GITHUB_SERVER_URL/$GITHUB_REPOSITORY/compare/{old}...{new}"
# diff_url = "https://gitlab.example.com/group/project/-/compare/{old}...{new}"

[git]
backend = "cli"
"#;
