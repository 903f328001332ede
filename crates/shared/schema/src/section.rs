//! Section instances: one value per declared field, typed access and form input.

use crate::error::{SchemaError, SchemaErrorExt};
use crate::field::{FieldId, FieldKind, FieldRef, FieldSpec, FieldValue, FormEntry};
use crate::grouping::GroupKey;
use crate::overrides::OverrideTable;
use crate::render;
use crate::schema::SectionSchema;
use chrono::NaiveDate;
use std::sync::Arc;

/// A live instance of a [`SectionSchema`]: one value slot per declared field.
///
/// Schema and override table are shared with every other instance of the same section
/// kind; only the value slots are owned.
#[derive(Debug, Clone)]
pub struct Section {
    schema: Arc<SectionSchema>,
    overrides: Arc<OverrideTable>,
    values: Vec<Option<FieldValue>>,
}

impl Section {
    /// Instantiates the section with every field at its declared default.
    #[must_use]
    pub fn new(schema: Arc<SectionSchema>, overrides: Arc<OverrideTable>) -> Self {
        let values = defaults(&schema);
        Self { schema, overrides, values }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        self.schema.tag()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.schema.description()
    }

    #[must_use]
    pub fn schema(&self) -> &SectionSchema {
        &self.schema
    }

    #[must_use]
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Fields with their current values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'_>> {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(position, (spec, value))| FieldRef { id: FieldId(position), spec, value: value.as_ref() })
    }

    /// # Panics
    /// Panics if `id` does not belong to this section's schema.
    #[must_use]
    pub fn field(&self, id: FieldId) -> FieldRef<'_> {
        FieldRef { id, spec: self.schema.field(id), value: self.values[id.0].as_ref() }
    }

    /// # Errors
    /// Returns [`SchemaError::UnknownField`] if the key is not declared.
    pub fn field_by_key(&self, key: &str) -> Result<FieldRef<'_>, SchemaError> {
        self.schema.id_of(key).map(|id| self.field(id))
    }

    /// Member fields of one composite variable, in declaration order.
    ///
    /// # Panics
    /// Panics when `key` has no fields in this section.
    #[must_use]
    pub fn group(&self, key: &GroupKey) -> Vec<FieldRef<'_>> {
        self.schema.index().members(key).iter().map(|&id| self.field(id)).collect()
    }

    /// Serializes the section body into namelist lines.
    #[must_use]
    pub fn render(&self) -> String {
        render::render_section(self)
    }

    pub fn form_entries(&self) -> impl Iterator<Item = FormEntry> + '_ {
        self.fields().map(FormEntry::from)
    }

    // --- Typed getters ---

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-string field.
    pub fn string(&self, key: &str) -> Result<Option<&str>, SchemaError> {
        self.typed(key, FieldKind::String, |v| match v {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-float field.
    pub fn float(&self, key: &str) -> Result<Option<f64>, SchemaError> {
        self.typed(key, FieldKind::Float, |v| match v {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        })
    }

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-integer field.
    pub fn integer(&self, key: &str) -> Result<Option<i64>, SchemaError> {
        self.typed(key, FieldKind::Integer, |v| match v {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        })
    }

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-date field.
    pub fn date(&self, key: &str) -> Result<Option<NaiveDate>, SchemaError> {
        self.typed(key, FieldKind::Date, |v| match v {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        })
    }

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-boolean field.
    pub fn boolean(&self, key: &str) -> Result<Option<bool>, SchemaError> {
        self.typed(key, FieldKind::Boolean, FieldValue::as_bool)
    }

    /// # Errors
    /// [`SchemaError::UnknownField`] or [`SchemaError::TypeMismatch`] for a non-enumeration field.
    pub fn choice(&self, key: &str) -> Result<Option<&str>, SchemaError> {
        self.typed(key, FieldKind::Choice, |v| match v {
            FieldValue::Choice(c) => Some(c.as_str()),
            _ => None,
        })
    }

    fn typed<'s, T>(
        &'s self,
        key: &str,
        kind: FieldKind,
        extract: impl FnOnce(&'s FieldValue) -> Option<T>,
    ) -> Result<Option<T>, SchemaError> {
        let id = self.schema.id_of(key)?;
        let spec = self.schema.field(id);
        if spec.kind() != kind {
            return Err(self.mismatch(spec, kind));
        }
        Ok(self.values[id.0].as_ref().and_then(extract))
    }

    // --- Mutation ---

    /// Assigns a typed value.
    ///
    /// A [`FieldValue::String`] given to an enumeration field is taken as the choice
    /// literal, so `section.set("f8", "value")` reads naturally.
    ///
    /// # Errors
    /// - [`SchemaError::UnknownField`] if the key is not declared.
    /// - [`SchemaError::TypeMismatch`] if the value type differs from the field type.
    /// - [`SchemaError::InvalidChoice`] for an enumeration literal outside the choices.
    /// - [`SchemaError::InvalidValue`] for a non-finite float.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<(), SchemaError> {
        let id = self.schema.id_of(key)?;
        let spec = self.schema.field(id);
        let value = match (spec.kind(), value.into()) {
            (FieldKind::Choice, FieldValue::String(s)) => FieldValue::Choice(s),
            (_, value) => value,
        };

        if value.kind() != spec.kind() {
            return Err(self.mismatch(spec, value.kind()));
        }
        match &value {
            FieldValue::Choice(choice) if !spec.allows(choice) => {
                return Err(SchemaError::InvalidChoice {
                    message: format!(
                        "`{choice}` is not one of {} for `{}`",
                        spec.choices().collect::<Vec<_>>().join("|"),
                        spec.key()
                    )
                    .into(),
                    context: Some(self.schema.tag_cow().clone()),
                });
            },
            FieldValue::Float(v) if !v.is_finite() => {
                return Err(self.invalid(spec, format!("`{v}` is not a finite number")));
            },
            _ => {},
        }

        self.values[id.0] = Some(value);
        Ok(())
    }

    /// Parses textual form input according to the field type and assigns it.
    ///
    /// Empty (or blank) input clears every non-string field; string fields store it as is.
    ///
    /// # Errors
    /// Same as [`set`](Self::set), plus [`SchemaError::InvalidValue`] for unparsable text.
    pub fn set_from_str(&mut self, key: &str, text: &str) -> Result<(), SchemaError> {
        let id = self.schema.id_of(key)?;
        let spec = self.schema.field(id);
        let trimmed = text.trim();

        if spec.kind() != FieldKind::String && trimmed.is_empty() {
            self.values[id.0] = None;
            return Ok(());
        }

        let value = match spec.kind() {
            FieldKind::String => FieldValue::String(text.to_owned()),
            FieldKind::Choice => FieldValue::Choice(trimmed.to_owned()),
            FieldKind::Float => trimmed
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|e| self.invalid(spec, format!("`{trimmed}`: {e}")))?,
            FieldKind::Integer => trimmed
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| self.invalid(spec, format!("`{trimmed}`: {e}")))?,
            FieldKind::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|e| self.invalid(spec, format!("`{trimmed}` is not YYYY-MM-DD: {e}")))?,
            FieldKind::Boolean => parse_bool(trimmed)
                .map(FieldValue::Boolean)
                .ok_or_else(|| self.invalid(spec, format!("`{trimmed}` is not a boolean")))?,
        };

        self.set(key, value)
    }

    /// Marks the field as absent.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownField`] if the key is not declared.
    pub fn clear(&mut self, key: &str) -> Result<(), SchemaError> {
        let id = self.schema.id_of(key)?;
        self.values[id.0] = None;
        Ok(())
    }

    /// Restores every field to its declared default.
    pub fn reset(&mut self) {
        self.values = defaults(&self.schema);
    }

    /// Applies textual updates in order, stopping at the first failure. Updates applied
    /// before the failing one are kept.
    ///
    /// # Errors
    /// The first error returned by [`set_from_str`](Self::set_from_str), with the
    /// offending key as context.
    pub fn update_from<'k, I>(&mut self, updates: I) -> Result<(), SchemaError>
    where
        I: IntoIterator<Item = (&'k str, &'k str)>,
    {
        for (key, text) in updates {
            self.set_from_str(key, text).context(format!("{}.{key}", self.tag()))?;
        }
        Ok(())
    }

    fn mismatch(&self, spec: &FieldSpec, got: FieldKind) -> SchemaError {
        SchemaError::TypeMismatch {
            message: format!("`{}` is {}, not {got}", spec.key(), spec.kind()).into(),
            context: Some(self.schema.tag_cow().clone()),
        }
    }

    fn invalid(&self, spec: &FieldSpec, message: String) -> SchemaError {
        SchemaError::InvalidValue {
            message: format!("{} ({}): {message}", spec.key(), spec.variable()).into(),
            context: Some(self.schema.tag_cow().clone()),
        }
    }
}

fn defaults(schema: &SectionSchema) -> Vec<Option<FieldValue>> {
    schema.fields().iter().map(|spec| spec.default_value().cloned()).collect()
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "y" | "1" => Some(true),
        "false" | "no" | "off" | "n" | "0" => Some(false),
        _ => None,
    }
}
