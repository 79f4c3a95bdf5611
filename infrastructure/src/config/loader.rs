//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["query-form.toml", ".query-form.toml"];

/// Prefix of environment variable overrides (`QUERY_FORM_HTTP__BASE_URL`, ...)
const ENV_PREFIX: &str = "QUERY_FORM_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUERY_FORM_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./query-form.toml` or `./.query-form.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/query-form/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Load configuration with explicit global path and project directory
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_in(project_dir) {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/query-form/config.toml if set,
    /// otherwise falls back to ~/.config/query-form/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("query-form").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path,
        ) {
            println!("  {}", line);
        }
    }

    /// One line per source, highest priority first
    fn config_sources(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Vec<String> {
        let marker = |path: &Path| if path.exists() { "FOUND" } else { "     " };
        let mut lines = vec![format!("[ENV  ] {}*", ENV_PREFIX)];

        if let Some(path) = config_path {
            lines.push(format!("[{}] Explicit: {}", marker(path), path.display()));
        }

        match Self::project_config_in(project_dir) {
            Some(path) => lines.push(format!("[FOUND] Project: {}", path.display())),
            None => lines.push(
                "[     ] Project: ./query-form.toml or ./.query-form.toml".to_string(),
            ),
        }

        if let Some(path) = global_path {
            lines.push(format!("[{}] Global:  {}", marker(path), path.display()));
        }

        lines.push("[     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_form_domain::{OutputFormat, SubmitPolicy};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.http.endpoint, "/api/query");
        assert_eq!(config.form.policy, SubmitPolicy::Unguarded);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("query-form"));
    }

    #[test]
    fn test_load_from_empty_dir_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from(None, dir.path(), None).unwrap();
        assert_eq!(config.http, ConfigLoader::load_defaults().http);
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[http]\nbase_url = \"http://global:1\"\n[output]\nformat = \"html\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("query-form.toml"),
            "[http]\nbase_url = \"http://project:2\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(Some(&global), dir.path(), None).unwrap();

        assert_eq!(config.http.base_url, "http://project:2");
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".query-form.toml"),
            "[form]\npolicy = \"latest-wins\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(None, dir.path(), None).unwrap();
        assert_eq!(config.form.policy, SubmitPolicy::LatestWins);
    }

    #[test]
    fn test_explicit_file_has_highest_file_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("query-form.toml"),
            "[http]\nendpoint = \"/project\"\ntimeout_seconds = 5\n",
        )
        .unwrap();
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[http]\nendpoint = \"/explicit\"\n").unwrap();

        let config = ConfigLoader::load_from(None, dir.path(), Some(&explicit)).unwrap();

        assert_eq!(config.http.endpoint, "/explicit");
        assert_eq!(config.http.timeout_seconds, Some(5));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("query-form.toml"),
            "[form]\npolicy = \"debounce\"\n",
        )
        .unwrap();

        assert!(ConfigLoader::load_from(None, dir.path(), None).is_err());
    }

    #[test]
    fn test_config_sources_list_explicit_path() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();
        let global = dir.path().join("missing-global.toml");

        let lines = ConfigLoader::config_sources(Some(&global), dir.path(), Some(&explicit));

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[ENV  ] QUERY_FORM_"));
        assert_eq!(lines[1], format!("[FOUND] Explicit: {}", explicit.display()));
        assert!(lines[2].starts_with("[     ] Project:"));
        assert_eq!(lines[3], format!("[     ] Global:  {}", global.display()));
    }

    #[test]
    fn test_config_sources_without_explicit_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("query-form.toml"), "").unwrap();

        let lines = ConfigLoader::config_sources(None, dir.path(), None);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("[FOUND] Project:"));
        assert!(!lines.iter().any(|l| l.contains("Explicit")));
    }
}
