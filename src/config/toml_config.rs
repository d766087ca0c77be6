use crate::utils::error::{CipherError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Operator settings for the shell. Cipher parameters are never read from here;
/// they are always asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub output_path: String,
    pub base_dir: String,
    pub banner: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            output_path: "results.txt".to_string(),
            base_dir: ".".to_string(),
            banner: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl ShellConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CipherError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CipherError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CipherError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_path("base_dir", &self.base_dir)?;

        if let Some(filter) = &self.logging.filter {
            validate_non_empty_string("logging.filter", filter)?;
        }

        Ok(())
    }
}
