//! Brands declared in `[[brands]]` configuration tables.
//!
//! Each rule compiles into a [`BrandDescriptor`] over a boxed predicate. The
//! base type stays [`Unknown`] because a rule's kind is only known at runtime.

use crate::config::toml_config::{BrandRuleConfig, RuleKind};
use crate::core::brand::{BrandDescriptor, BrandTag, Branded, DynPredicate};
use crate::core::values::stringify;
use crate::domain::model::Unknown;
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{validate_bounds, validate_pattern};
use regex::Regex;

pub struct RuleBrand;

impl BrandTag for RuleBrand {
    const NAME: &'static str = "Rule";
}

pub type RuleDescriptor = BrandDescriptor<Unknown, RuleBrand, DynPredicate>;

/// A value accepted by some configured rule.
pub type RuleValue = Branded<Unknown, RuleBrand>;

pub struct BrandRule {
    name: String,
    error_message: Option<String>,
    descriptor: RuleDescriptor,
}

impl BrandRule {
    pub fn compile(config: &BrandRuleConfig) -> Result<Self> {
        let pattern = match &config.pattern {
            Some(pattern) => Some(validate_pattern(
                &format!("brands.{}.pattern", config.name),
                pattern,
            )?),
            None => None,
        };
        validate_bounds(&format!("brands.{}.min", config.name), config.min, config.max)?;

        let predicate = build_predicate(config.kind, pattern, config.min, config.max);

        Ok(Self {
            name: config.name.clone(),
            error_message: config.error_message.clone(),
            descriptor: BrandDescriptor::new(predicate),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is(&self, value: &Unknown) -> bool {
        self.descriptor.is(value)
    }

    /// Validates `value`, using the rule's configured error message if any.
    pub fn check(&self, value: Unknown) -> Result<RuleValue> {
        self.check_with_message(value, None)
    }

    /// Like [`check`](Self::check), preferring `message` over the configured one.
    pub fn check_with_message(&self, value: Unknown, message: Option<&str>) -> Result<RuleValue> {
        self.descriptor
            .from(value, message.or(self.error_message.as_deref()))
    }
}

impl std::fmt::Debug for BrandRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandRule")
            .field("name", &self.name)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

fn build_predicate(
    kind: RuleKind,
    pattern: Option<Regex>,
    min: Option<f64>,
    max: Option<f64>,
) -> DynPredicate {
    Box::new(move |value: &Unknown| {
        let measure = match (kind, value) {
            (RuleKind::String | RuleKind::Any, Unknown::String(s)) => Some(s.chars().count() as f64),
            (RuleKind::Number | RuleKind::Any, Unknown::Number(n)) => n.as_f64(),
            (RuleKind::Integer, Unknown::Number(n)) => {
                n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)
            }
            (RuleKind::Any, _) => None,
            _ => return false,
        };

        if let Some(measure) = measure {
            if min.is_some_and(|min| measure < min) || max.is_some_and(|max| measure > max) {
                return false;
            }
        } else if kind == RuleKind::Integer {
            return false;
        }

        match &pattern {
            Some(re) => re.is_match(&stringify(value)),
            None => true,
        }
    })
}

/// The compiled `[[brands]]` tables, looked up by name.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<BrandRule>,
}

impl RuleSet {
    pub fn compile(configs: &[BrandRuleConfig]) -> Result<Self> {
        let rules = configs
            .iter()
            .map(BrandRule::compile)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("compiled {} brand rules", rules.len());
        Ok(Self { rules })
    }

    pub fn get(&self, name: &str) -> Result<&BrandRule> {
        self.rules
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| UtilsError::ConfigError {
                message: format!(
                    "Unknown brand '{}'. Configured brands: {}",
                    name,
                    self.names().join(", ")
                ),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
