use crate::config::cli::Command;
use crate::config::rules::RuleSet;
use crate::config::toml_config::UtilsConfig;
use crate::core::array::times_lossy;
use crate::core::delay::{delay_for, MILLISECONDS};
use crate::core::random::pick_with;
use crate::core::template::template;
use crate::domain::model::Unknown;
use crate::domain::ports::RandomSource;
use crate::utils::error::Result;

/// Executes CLI commands against a loaded configuration.
pub struct CommandRunner {
    rules: RuleSet,
    random: Box<dyn RandomSource + Send>,
}

impl CommandRunner {
    pub fn new(config: &UtilsConfig) -> Result<Self> {
        Ok(Self {
            rules: config.brand_rules()?,
            random: config.random_source(),
        })
    }

    /// Runs `command` and returns what should be printed on success.
    pub async fn run(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Check {
                brand,
                value,
                message,
            } => {
                let rule = self.rules.get(brand)?;
                let input = parse_unknown(value);
                tracing::debug!("checking {} against brand '{}'", input, brand);
                let branded = rule.check_with_message(input, message.as_deref())?;
                Ok(serde_json::to_string(&branded)?)
            }
            Command::Pick { values } => {
                let choice = pick_with(&mut *self.random, values)?;
                Ok(choice.clone())
            }
            Command::Times { n } => Ok(serde_json::to_string(&times_lossy(*n))?),
            Command::Render {
                template: source,
                replacements,
                strict,
            } => {
                let t = template(source.as_str());
                let pairs = replacements.iter().map(|(k, v)| (k.as_str(), v.as_str()));
                if *strict {
                    t.render_strict(pairs)
                } else {
                    Ok(t.render(pairs))
                }
            }
            Command::Delay { ms } => {
                let ms = MILLISECONDS.from(parse_unknown(ms), None)?;
                let waited = *ms;
                delay_for(ms).await;
                Ok(format!("waited {}ms", waited))
            }
            Command::Brands => Ok(self.rules.names().join("\n")),
        }
    }
}

/// Reads a CLI argument as JSON, falling back to a plain string.
pub fn parse_unknown(raw: &str) -> Unknown {
    serde_json::from_str(raw).unwrap_or_else(|_| Unknown::String(raw.to_string()))
}
