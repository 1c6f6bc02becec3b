//! Recursive record walker.
//!
//! Visits candidate fields in declaration order. Records are descended
//! into, terminal fields are resolved through the token registry and
//! coerced. Records the caller already set are always walked, since owned
//! data cannot loop. A record allocated by the walk itself is not descended
//! into when its type is already on the current path, so an empty
//! self-referential `Option<Box<Self>>` field gets one fresh level and the
//! walk stops there.

#[cfg(test)]
mod tests;

use crate::{
    Defaults, DefaultsError, DefaultsResult, FieldDescriptor, FieldMut, ScalarField,
    TokenRegistry, coerce,
};

/// When a terminal field is assigned from its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Assign only fields that hold their kind's zero value. Pre-set fields
    /// opt out, and repeated walks leave the record unchanged.
    #[default]
    ZeroOnly,
    /// Always assign, replacing whatever the field holds.
    Overwrite,
}

pub(crate) struct Walker<'e> {
    tokens: &'e TokenRegistry,
    policy: Policy,
    path: Vec<&'static str>,
}

impl<'e> Walker<'e> {
    pub(crate) const fn new(tokens: &'e TokenRegistry, policy: Policy) -> Self {
        Self {
            tokens,
            policy,
            path: Vec::new(),
        }
    }

    pub(crate) fn walk(&mut self, record: &mut dyn Defaults) -> DefaultsResult<()> {
        let name = record.record_name();
        tracing::trace!(record = name, depth = self.path.len(), "walking record");
        self.path.push(name);
        let outcome = self.walk_fields(record, name);
        self.path.pop();
        outcome
    }

    fn walk_fields(&mut self, record: &mut dyn Defaults, name: &'static str) -> DefaultsResult<()> {
        for (index, field) in record.descriptors().iter().enumerate() {
            if !field.is_candidate() {
                continue;
            }
            let slot = record
                .field_mut(index)
                .ok_or(DefaultsError::FieldNotSettable {
                    record: name,
                    field: field.name,
                })?;
            match slot {
                FieldMut::Record(nested) => self.descend(field, nested)?,
                FieldMut::Allocated(nested) => {
                    if self.path.contains(&nested.record_name()) {
                        tracing::trace!(field = field.name, "self-referential record not followed");
                    } else {
                        self.descend(field, nested)?;
                    }
                }
                FieldMut::Scalar(scalar) => self.assign(field, scalar)?,
                FieldMut::Unsupported { kind } => {
                    return Err(DefaultsError::UnsupportedKind {
                        field: field.name,
                        kind,
                    });
                }
            }
        }
        Ok(())
    }

    fn descend(&mut self, field: &FieldDescriptor, nested: &mut dyn Defaults) -> DefaultsResult<()> {
        self.walk(nested)
            .map_err(|err| DefaultsError::in_field(field.name, err))
    }

    fn assign(&self, field: &FieldDescriptor, slot: &mut dyn ScalarField) -> DefaultsResult<()> {
        if field.structural || field.embedded {
            return Err(DefaultsError::InvalidTarget { ty: field.ty });
        }
        if self.policy == Policy::ZeroOnly && !slot.is_zero() {
            tracing::trace!(field = field.name, "kept pre-set value");
            return Ok(());
        }
        let kind = slot.kind();
        let text = self.tokens.resolve(field.default);
        let value = coerce(kind, &text).map_err(|err| DefaultsError::in_field(field.name, err))?;
        slot.assign(value).map_err(|found| {
            DefaultsError::in_field(
                field.name,
                DefaultsError::InvalidDefaultValue {
                    kind,
                    text: text.into_owned(),
                    message: format!("coerced to `{found}`"),
                },
            )
        })?;
        tracing::trace!(field = field.name, %kind, "assigned default");
        Ok(())
    }
}
