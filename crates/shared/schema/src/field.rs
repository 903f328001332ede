//! Field descriptors, typed values and the per-field display rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Emitted in place of a missing (non-boolean) value.
pub const NO_DATA: &str = "no data";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declared type of a field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    String,
    Float,
    Integer,
    Date,
    Boolean,
    /// One literal out of a fixed, ordered choice list.
    Choice,
}

/// A typed field value.
///
/// `Display` yields the namelist literal: floats keep a fractional part (`24.0`), dates
/// are ISO formatted and booleans print as `ON`/`OFF`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    String(String),
    Float(f64),
    Integer(i64),
    Date(NaiveDate),
    Boolean(bool),
    Choice(String),
}

impl FieldValue {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::String(_) => FieldKind::String,
            Self::Float(_) => FieldKind::Float,
            Self::Integer(_) => FieldKind::Integer,
            Self::Date(_) => FieldKind::Date,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Choice(_) => FieldKind::Choice,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The text of a string or choice value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Editor-facing text: what a form input would be pre-filled with.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Boolean(b) => b.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Choice(s) => f.write_str(s),
            // Debug keeps the trailing `.0` on integral floats.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::Boolean(b) => f.write_str(if *b { "ON" } else { "OFF" }),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// Position of a field in its section's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub(crate) usize);

impl FieldId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Static metadata of one field: identity, output name, grouping and default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    key: Cow<'static, str>,
    variable: Cow<'static, str>,
    label: Option<Cow<'static, str>>,
    block: Option<Cow<'static, str>>,
    kind: FieldKind,
    default: Option<FieldValue>,
    choices: Vec<Cow<'static, str>>,
}

impl FieldSpec {
    fn new(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        kind: FieldKind,
        default: Option<FieldValue>,
    ) -> Self {
        Self {
            key: key.into(),
            variable: variable.into(),
            label: None,
            block: None,
            kind,
            default,
            choices: Vec::new(),
        }
    }

    pub fn string(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: impl Into<String>,
    ) -> Self {
        Self::new(key, variable, FieldKind::String, Some(FieldValue::String(default.into())))
    }

    pub fn float(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: f64,
    ) -> Self {
        Self::new(key, variable, FieldKind::Float, Some(FieldValue::Float(default)))
    }

    pub fn integer(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: i64,
    ) -> Self {
        Self::new(key, variable, FieldKind::Integer, Some(FieldValue::Integer(default)))
    }

    /// Date field; `None` declares it without a default.
    pub fn date(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: Option<NaiveDate>,
    ) -> Self {
        Self::new(key, variable, FieldKind::Date, default.map(FieldValue::Date))
    }

    pub fn boolean(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: bool,
    ) -> Self {
        Self::new(key, variable, FieldKind::Boolean, Some(FieldValue::Boolean(default)))
    }

    /// Enumeration field. The default must be one of `choices`; the schema builder
    /// rejects it otherwise.
    pub fn choice<I, C>(
        key: impl Into<Cow<'static, str>>,
        variable: impl Into<Cow<'static, str>>,
        default: impl Into<String>,
        choices: I,
    ) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        let mut spec =
            Self::new(key, variable, FieldKind::Choice, Some(FieldValue::Choice(default.into())));
        spec.choices = choices.into_iter().map(Into::into).collect();
        spec
    }

    /// Prefix written before the value (`MASS_FRACTION_(%) 2.0`). Empty labels are ignored.
    #[must_use]
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    /// Places the field inside a named block of its section.
    #[must_use]
    pub fn block(mut self, block: impl Into<Cow<'static, str>>) -> Self {
        self.block = Some(block.into());
        self
    }

    #[must_use]
    pub fn without_default(mut self) -> Self {
        self.default = None;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn block_name(&self) -> Option<&str> {
        self.block.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    pub fn choices(&self) -> impl ExactSizeIterator<Item = &str> {
        self.choices.iter().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn allows(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }

    pub(crate) fn raw_key(&self) -> &Cow<'static, str> {
        &self.key
    }

    pub(crate) fn raw_variable(&self) -> &Cow<'static, str> {
        &self.variable
    }

    pub(crate) fn raw_block(&self) -> Option<&Cow<'static, str>> {
        self.block.as_ref()
    }
}

/// A field of a live section: its descriptor plus the current value.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    pub(crate) id: FieldId,
    pub(crate) spec: &'a FieldSpec,
    pub(crate) value: Option<&'a FieldValue>,
}

impl<'a> FieldRef<'a> {
    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub const fn spec(&self) -> &'a FieldSpec {
        self.spec
    }

    #[must_use]
    pub const fn value(&self) -> Option<&'a FieldValue> {
        self.value
    }

    /// Namelist text of this field.
    ///
    /// `"{label} {value}"` when a label is declared, the bare value otherwise. A missing
    /// value prints [`NO_DATA`], except booleans which print nothing.
    #[must_use]
    pub fn format(&self) -> String {
        let body = match (self.spec.kind, self.value) {
            (_, Some(value)) => value.to_string(),
            (FieldKind::Boolean, None) => String::new(),
            (_, None) => NO_DATA.to_owned(),
        };
        match self.spec.label_text() {
            Some(label) => format!("{label} {body}"),
            None => body,
        }
    }

    /// Editor-facing text, empty when the value is missing.
    #[must_use]
    pub fn display(&self) -> String {
        self.value.map(FieldValue::display).unwrap_or_default()
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.value.and_then(FieldValue::as_bool).unwrap_or(false)
    }

    #[must_use]
    pub fn choice(&self) -> Option<&'a str> {
        match self.value {
            Some(FieldValue::Choice(c)) => Some(c),
            _ => None,
        }
    }
}

/// Per-field row handed to a form layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormEntry {
    pub key: String,
    pub variable: String,
    pub label: Option<String>,
    pub block: Option<String>,
    pub kind: FieldKind,
    pub display: String,
    pub choices: Vec<String>,
}

impl From<FieldRef<'_>> for FormEntry {
    fn from(field: FieldRef<'_>) -> Self {
        let spec = field.spec;
        Self {
            key: spec.key().to_owned(),
            variable: spec.variable().to_owned(),
            label: spec.label_text().map(str::to_owned),
            block: spec.block_name().map(str::to_owned),
            kind: spec.kind(),
            display: field.display(),
            choices: spec.choices().map(str::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(spec: &FieldSpec) -> FieldRef<'_> {
        FieldRef { id: FieldId(0), spec, value: spec.default_value() }
    }

    #[test]
    fn floats_keep_their_fractional_part() {
        assert_eq!(FieldValue::Float(24.0).to_string(), "24.0");
        assert_eq!(FieldValue::Float(1.0e7).to_string(), "10000000.0");
        assert_eq!(FieldValue::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn label_prefixes_the_value() {
        let spec = FieldSpec::float("f4", "H2O", 2.0).label("MASS_FRACTION_(%)");
        assert_eq!(view(&spec).format(), "MASS_FRACTION_(%) 2.0");
    }

    #[test]
    fn booleans_print_on_off_and_nothing_when_missing() {
        let on = FieldSpec::boolean("f1", "TEPHRA", true);
        let off = FieldSpec::boolean("f8", "NX", false).label("RESOLUTION");
        let unset = FieldSpec::boolean("f2", "DUST", false).without_default();

        assert_eq!(view(&on).format(), "ON");
        assert_eq!(view(&off).format(), "RESOLUTION OFF");
        assert_eq!(view(&unset).format(), "");
    }

    #[test]
    fn missing_values_print_the_sentinel() {
        let spec = FieldSpec::date("f1", "DATE", None);
        assert_eq!(view(&spec).format(), NO_DATA);
        assert_eq!(view(&spec).display(), "");
    }

    #[test]
    fn empty_label_is_no_label() {
        let spec = FieldSpec::float("f9", "MASS_FLOW_RATE_(KGS)", 1.0e7).label("");
        assert_eq!(spec.label_text(), None);
    }

    #[test]
    fn form_entry_carries_choices_and_editor_text() {
        let spec = FieldSpec::choice("f4", "INITIAL_CONDITION", "NONE", ["NONE", "RESTART"]);
        let entry = FormEntry::from(view(&spec));
        assert_eq!(entry.kind, FieldKind::Choice);
        assert_eq!(entry.display, "NONE");
        assert_eq!(entry.choices, vec!["NONE".to_owned(), "RESTART".to_owned()]);

        let toggle = FieldSpec::boolean("f8", "NX", false);
        assert_eq!(FormEntry::from(view(&toggle)).display, "false");
    }

    #[test]
    fn values_serialize_with_their_kind() {
        let json = serde_json::to_value(FieldValue::Integer(50)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "integer", "value": 50 }));
    }
}
