//! Section schemas: ordered field declarations with their grouping index.

use crate::error::SchemaError;
use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::grouping::GroupingIndex;
use fxhash::FxHashMap;
use std::borrow::Cow;

/// Ordered field declarations of one configuration topic.
///
/// Fields live in an arena indexed by [`FieldId`] (their declaration position). The
/// grouping index is derived once in [`SectionSchemaBuilder::build`] and rebuilt by
/// [`SectionSchema::extend`], the only way the field set can change.
#[derive(Debug, Clone)]
pub struct SectionSchema {
    tag: Cow<'static, str>,
    description: Cow<'static, str>,
    fields: Vec<FieldSpec>,
    positions: FxHashMap<Cow<'static, str>, FieldId>,
    index: GroupingIndex,
}

impl SectionSchema {
    pub fn builder(
        tag: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> SectionSchemaBuilder {
        SectionSchemaBuilder { tag: tag.into(), description: description.into(), fields: Vec::new() }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub const fn index(&self) -> &GroupingIndex {
        &self.index
    }

    /// # Panics
    /// Panics if `id` does not belong to this schema.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &FieldSpec {
        &self.fields[id.0]
    }

    /// Looks up a field by its stable key.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownField`] if the key is not declared.
    pub fn id_of(&self, key: &str) -> Result<FieldId, SchemaError> {
        self.positions.get(key).copied().ok_or_else(|| SchemaError::UnknownField {
            message: key.to_owned().into(),
            context: Some(self.tag.clone()),
        })
    }

    /// Appends fields after the declared ones and rebuilds the grouping index.
    ///
    /// # Errors
    /// Same validation as [`SectionSchemaBuilder::build`].
    pub fn extend(self, extra: impl IntoIterator<Item = FieldSpec>) -> Result<Self, SchemaError> {
        let mut builder =
            SectionSchemaBuilder { tag: self.tag, description: self.description, fields: self.fields };
        builder.fields.extend(extra);
        builder.build()
    }

    pub(crate) fn tag_cow(&self) -> &Cow<'static, str> {
        &self.tag
    }
}

#[derive(Debug, Clone)]
pub struct SectionSchemaBuilder {
    tag: Cow<'static, str>,
    description: Cow<'static, str>,
    fields: Vec<FieldSpec>,
}

impl SectionSchemaBuilder {
    /// Declares the next field; declaration order is output order.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    #[must_use]
    pub fn fields(mut self, specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(specs);
        self
    }

    /// Validates the declarations and derives the grouping index.
    ///
    /// # Errors
    /// Returns [`SchemaError::InvalidSchema`] for an empty tag, an empty key or variable,
    /// a duplicated key, a default whose type differs from the field type, or an
    /// enumeration without choices or with a default outside them.
    pub fn build(self) -> Result<SectionSchema, SchemaError> {
        let tag = self.tag;
        let invalid = |message: String| SchemaError::InvalidSchema {
            message: message.into(),
            context: Some(tag.clone()),
        };

        if tag.trim().is_empty() {
            return Err(invalid("section tag cannot be empty".to_owned()));
        }

        let mut positions = FxHashMap::default();
        for (position, spec) in self.fields.iter().enumerate() {
            if spec.key().is_empty() || spec.variable().is_empty() {
                return Err(invalid(format!("field #{position} needs a key and a variable")));
            }
            if positions.insert(spec.raw_key().clone(), FieldId(position)).is_some() {
                return Err(invalid(format!("field key `{}` is declared twice", spec.key())));
            }
            check_default(spec).map_err(invalid)?;
        }

        let index = GroupingIndex::build(&self.fields);

        Ok(SectionSchema { tag, description: self.description, fields: self.fields, positions, index })
    }
}

fn check_default(spec: &FieldSpec) -> Result<(), String> {
    if spec.kind() == FieldKind::Choice && spec.choices().next().is_none() {
        return Err(format!("enumeration `{}` declares no choices", spec.key()));
    }
    let Some(default) = spec.default_value() else {
        return Ok(());
    };
    if default.kind() != spec.kind() {
        return Err(format!(
            "default of `{}` is {} but the field is {}",
            spec.key(),
            default.kind(),
            spec.kind()
        ));
    }
    match default {
        FieldValue::Choice(choice) if !spec.allows(choice) => {
            Err(format!("default `{choice}` of `{}` is not one of its choices", spec.key()))
        },
        FieldValue::Float(v) if !v.is_finite() => {
            Err(format!("default of `{}` must be finite", spec.key()))
        },
        _ => Ok(()),
    }
}
