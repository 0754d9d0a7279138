use crate::config::rules::RuleSet;
use crate::core::random::{SeededRandom, ThreadRandom};
use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{
    validate_bounds, validate_non_empty_string, validate_pattern, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilsConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub brands: Vec<BrandRuleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    String,
    Number,
    Integer,
    Any,
}

/// A brand declared in configuration rather than in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandRuleConfig {
    pub name: String,
    pub kind: RuleKind,
    /// Regular expression the stringified value must match.
    pub pattern: Option<String>,
    /// Lower bound: numeric value for numbers, character count for strings.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub error_message: Option<String>,
}

impl UtilsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${PATTERN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_unique_names("brands.name", self.brands.iter().map(|b| b.name.as_str()))?;

        for brand in &self.brands {
            validate_non_empty_string("brands.name", &brand.name)?;
            if let Some(pattern) = &brand.pattern {
                validate_pattern(&format!("brands.{}.pattern", brand.name), pattern)?;
            }
            validate_bounds(&format!("brands.{}.min", brand.name), brand.min, brand.max)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }

    /// Seeded generator when `random.seed` is set, thread generator otherwise.
    pub fn random_source(&self) -> Box<dyn RandomSource + Send> {
        match self.random.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        }
    }

    pub fn brand_rules(&self) -> Result<RuleSet> {
        RuleSet::compile(&self.brands)
    }
}

impl Validate for UtilsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
