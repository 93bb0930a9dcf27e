// crates/remove_buttons/src/config.rs

use std::path::PathBuf;

use button_markers::DEFAULT_TARGET_FILE;

/// Environment variable that replaces the default target file.
/// An explicit path on the command line still wins.
pub const TARGET_FILE_ENV: &str = "REMOVE_BUTTONS_FILE";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub target_file: PathBuf,
    pub strict: bool, // fail instead of warn when nothing matched
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_sources(
        file_arg: Option<PathBuf>,
        env_override: Option<String>,
        strict: bool,
        verbose: bool,
    ) -> Self {
        let target_file = file_arg
            .or_else(|| {
                env_override
                    .filter(|value| !value.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_FILE));

        Self {
            target_file,
            strict,
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_hardcoded_path() {
        let config = AppConfig::from_sources(None, None, false, false);
        assert_eq!(config.target_file, PathBuf::from(DEFAULT_TARGET_FILE));
        assert!(!config.strict);
    }

    #[test]
    fn test_env_override_replaces_default() {
        let config = AppConfig::from_sources(None, Some("web/Quotes.tsx".into()), false, false);
        assert_eq!(config.target_file, PathBuf::from("web/Quotes.tsx"));
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let config = AppConfig::from_sources(None, Some("  ".into()), false, false);
        assert_eq!(config.target_file, PathBuf::from(DEFAULT_TARGET_FILE));
    }

    #[test]
    fn test_cli_argument_wins_over_env() {
        let config = AppConfig::from_sources(
            Some(PathBuf::from("cli.tsx")),
            Some("env.tsx".into()),
            true,
            true,
        );
        assert_eq!(config.target_file, PathBuf::from("cli.tsx"));
        assert!(config.strict);
        assert!(config.verbose);
    }
}
