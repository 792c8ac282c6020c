use crate::{
    error::RuleError,
    rule::{CompiledRule, ast::Rule, validate::validate},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// RuleSet
///
/// Named declarative rules, typically loaded from a JSON config file:
///
/// ```json
/// { "rules": { "adult": { "compare": { "field": "age", "op": "gt", "value": 17 } } } }
/// ```
///
/// Every rule is validated on load and on insert.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a rule set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        tracing::debug!(rules = set.rules.len(), "loaded rule set");

        Ok(set)
    }

    /// Serialize the rule set back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, RuleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every rule; the first failure wins.
    pub fn validate(&self) -> Result<(), RuleError> {
        for (name, rule) in &self.rules {
            validate(rule).inspect_err(|err| {
                tracing::debug!(rule = %name, error = %err, "invalid rule");
            })?;
        }

        Ok(())
    }

    /// Insert a validated rule, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        rule: Rule,
    ) -> Result<Option<Rule>, RuleError> {
        validate(&rule)?;

        Ok(self.rules.insert(name.into(), rule))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Compile a named rule into an evaluable predicate.
    pub fn compile(&self, name: &str) -> Result<CompiledRule, RuleError> {
        let rule = self.get(name).ok_or_else(|| RuleError::UnknownRule {
            name: name.to_string(),
        })?;

        CompiledRule::compile(rule)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
