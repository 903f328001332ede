//! Per-section override rules for the line composition.
//!
//! A section kind owns one [`OverrideTable`]: a map from [`GroupKey`] to a pure
//! [`OverrideRule`]. The renderer consults it before the default `VAR = a b c`
//! composition; a rule answering `None` (or an empty string) falls through.

use crate::error::SchemaError;
use crate::field::FieldKind;
use crate::grouping::GroupKey;
use crate::schema::SectionSchema;
use crate::section::Section;
use fxhash::FxHashMap;
use std::fmt;
use std::sync::Arc;

type RuleFn = dyn Fn(&Section, &GroupKey) -> Option<String> + Send + Sync;

/// A named, pure formatter for one composite variable.
#[derive(Clone)]
pub struct OverrideRule {
    name: &'static str,
    apply: Arc<RuleFn>,
}

impl OverrideRule {
    pub fn new<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&Section, &GroupKey) -> Option<String> + Send + Sync + 'static,
    {
        Self { name, apply: Arc::new(apply) }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the rule; `None` means "use the default composition".
    #[must_use]
    pub fn apply(&self, section: &Section, key: &GroupKey) -> Option<String> {
        (self.apply)(section, key)
    }
}

impl fmt::Debug for OverrideRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideRule").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    rules: FxHashMap<GroupKey, OverrideRule>,
}

impl OverrideTable {
    #[must_use]
    pub fn builder() -> OverrideTableBuilder {
        OverrideTableBuilder::default()
    }

    /// A table without rules: every key uses the default composition.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<&OverrideRule> {
        self.rules.get(key)
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

#[derive(Debug, Default)]
pub struct OverrideTableBuilder {
    keyed: Vec<(GroupKey, OverrideRule)>,
    by_kind: Vec<(FieldKind, OverrideRule)>,
}

impl OverrideTableBuilder {
    /// Registers `rule` for exactly `key`. A later registration for the same key wins.
    #[must_use]
    pub fn rule(mut self, key: GroupKey, rule: OverrideRule) -> Self {
        self.keyed.push((key, rule));
        self
    }

    /// Registers `rule` for every key whose first field has `kind` (e.g. all boolean-backed
    /// variables). Explicit [`rule`](Self::rule) entries take precedence.
    #[must_use]
    pub fn each_kind(mut self, kind: FieldKind, rule: OverrideRule) -> Self {
        self.by_kind.push((kind, rule));
        self
    }

    /// Resolves the registrations against `schema`.
    ///
    /// # Errors
    /// Returns [`SchemaError::InvalidSchema`] when an explicit key is not a group of the
    /// schema, so a misspelled variable is caught when the catalog is defined.
    pub fn build(self, schema: &SectionSchema) -> Result<OverrideTable, SchemaError> {
        let mut rules = FxHashMap::default();

        for (kind, rule) in self.by_kind {
            for group in schema.index() {
                let first = schema.field(group.members()[0]);
                if first.kind() == kind {
                    rules.insert(group.key().clone(), rule.clone());
                }
            }
        }

        for (key, rule) in self.keyed {
            if !schema.index().contains(&key) {
                return Err(SchemaError::InvalidSchema {
                    message: format!("override `{}` targets unknown variable `{key}`", rule.name())
                        .into(),
                    context: Some(schema.tag().to_owned().into()),
                });
            }
            rules.insert(key, rule);
        }

        Ok(OverrideTable { rules })
    }
}

/// Stock rules covering the namelist conventions used by model input files.
///
/// Rules locate their operands by field kind inside the group rather than by key, so
/// the same rule serves symmetric variables (`NX`/`NY`) and every section that pairs an
/// enumeration with a numeric companion.
pub mod rules {
    use super::OverrideRule;
    use crate::field::{FieldKind, FieldRef, FieldValue};
    use chrono::Datelike;

    fn first_of<'a>(fields: &[FieldRef<'a>], kind: FieldKind) -> Option<FieldRef<'a>> {
        fields.iter().copied().find(|f| f.spec().kind() == kind)
    }

    fn first_not<'a>(fields: &[FieldRef<'a>], kind: FieldKind) -> Option<FieldRef<'a>> {
        fields.iter().copied().find(|f| f.spec().kind() != kind)
    }

    /// `DATE` becomes three lines: `YEAR = 2008`, `MONTH = 4`, `DAY = 29`.
    #[must_use]
    pub fn date_parts() -> OverrideRule {
        OverrideRule::new("date_parts", |section, key| {
            let fields = section.group(key);
            match first_of(&fields, FieldKind::Date)?.value()? {
                FieldValue::Date(date) => Some(format!(
                    "YEAR = {}\nMONTH = {}\nDAY = {}",
                    date.year(),
                    date.month(),
                    date.day()
                )),
                _ => None,
            }
        })
    }

    /// Count/toggle/spacing triple: `NX = RESOLUTION 0.1` when the toggle is on,
    /// `NX = 50` otherwise.
    #[must_use]
    pub fn resolution_toggle() -> OverrideRule {
        OverrideRule::new("resolution_toggle", |section, key| {
            let fields = section.group(key);
            let toggle = first_of(&fields, FieldKind::Boolean)?;
            let value = if toggle.is_true() {
                format!("RESOLUTION {}", first_of(&fields, FieldKind::Float)?.format())
            } else {
                first_of(&fields, FieldKind::Integer)?.format()
            };
            Some(format!("{} = {value}", key.variable()))
        })
    }

    /// When the enumeration equals `sentinel`, write it alone and drop the companions.
    #[must_use]
    pub fn choice_short_circuit(sentinel: &'static str) -> OverrideRule {
        OverrideRule::new("choice_short_circuit", move |section, key| {
            let fields = section.group(key);
            let choice = first_of(&fields, FieldKind::Choice)?;
            (choice.choice()? == sentinel).then(|| format!("{} = {sentinel}", key.variable()))
        })
    }

    /// Enumeration with a "type your own" option: when it equals `sentinel` the companion
    /// value is written, otherwise the selected option itself.
    #[must_use]
    pub fn choice_or_value(sentinel: &'static str) -> OverrideRule {
        OverrideRule::new("choice_or_value", move |section, key| {
            let fields = section.group(key);
            let choice = first_of(&fields, FieldKind::Choice)?;
            let value = if choice.choice()? == sentinel {
                first_not(&fields, FieldKind::Choice)?.format()
            } else {
                choice.format()
            };
            Some(format!("{} = {value}", key.variable()))
        })
    }

    /// Writes only the enumeration unless it equals `sentinel`, in which case the default
    /// composition (enumeration plus its numeric companion) applies.
    #[must_use]
    pub fn choice_unless(sentinel: &'static str) -> OverrideRule {
        OverrideRule::new("choice_unless", move |section, key| {
            let fields = section.group(key);
            let choice = first_of(&fields, FieldKind::Choice)?;
            (choice.choice()? != sentinel).then(|| format!("{} = {}", key.variable(), choice.format()))
        })
    }

    /// Boolean-backed variables written as `YES`/`NO` instead of `ON`/`OFF`.
    #[must_use]
    pub fn yes_no() -> OverrideRule {
        OverrideRule::new("yes_no", |section, key| {
            let fields = section.group(key);
            let first = fields.first().filter(|f| f.spec().kind() == FieldKind::Boolean)?;
            Some(format!("{} = {}", key.variable(), if first.is_true() { "YES" } else { "NO" }))
        })
    }
}
