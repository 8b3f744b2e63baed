//! Interface description generator.
//!
//! Descriptor format:
//!
//! ```text
//! T:<TYPE>|O:<ORG>[|E:<EQUIP>][|I:<IF>][|S:<SERVICE>][|ID:<INTERNAL_ID>][|B:<BANDWIDTH>][|C:<COMMENT>]
//! ```
//!
//! `T:` and `O:` are always present; the rest appear only when non-empty,
//! in that order.

use std::fmt;

use super::{Generator, GeneratorConfig, GeneratorOutput, render};
use crate::fields::{FieldId, FieldMap};
use crate::normalize::normalize_token;
use crate::vendor::{Category, TemplateVars, VendorProfile};

/// Raw interface description inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceInput {
    pub local_if: String,
    pub if_type: String,
    pub remote_org: String,
    pub remote_equip: String,
    pub remote_if: String,
    pub service: String,
    pub internal_id: String,
    pub bandwidth: String,
    pub comment: String,
}

/// Ordered descriptor segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    segments: Vec<(&'static str, String)>,
}

impl InterfaceDescriptor {
    pub fn new(input: &InterfaceInput) -> Self {
        let mut segments = vec![
            ("T", input.if_type.trim().to_string()),
            ("O", normalize_token(&input.remote_org)),
        ];

        let optional = [
            ("E", &input.remote_equip),
            ("I", &input.remote_if),
            ("S", &input.service),
            ("ID", &input.internal_id),
            ("B", &input.bandwidth),
            ("C", &input.comment),
        ];
        segments.extend(
            optional
                .into_iter()
                .map(|(prefix, raw)| (prefix, normalize_token(raw)))
                .filter(|(_, value)| !value.is_empty()),
        );

        Self { segments }
    }

    /// Segment prefixes in emitted order.
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().map(|(prefix, _)| *prefix)
    }
}

impl fmt::Display for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prefix, value)) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}:{}", prefix, value)?;
        }
        Ok(())
    }
}

/// Generator for `if` sinks.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> InterfaceGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for InterfaceGenerator<'_> {
    const CATEGORY: Category = Category::Interface;
    type Input = InterfaceInput;

    fn read(&self, fields: &dyn FieldMap) -> InterfaceInput {
        InterfaceInput {
            local_if: fields.read(FieldId::IfLocal),
            if_type: fields.read(FieldId::IfType),
            remote_org: fields.read(FieldId::IfRemoteOrg),
            remote_equip: fields.read(FieldId::IfRemoteEquip),
            remote_if: fields.read(FieldId::IfRemoteIf),
            service: fields.read(FieldId::IfService),
            internal_id: fields.read(FieldId::IfInternalId),
            bandwidth: fields.read(FieldId::IfBandwidth),
            comment: fields.read(FieldId::IfComment),
        }
    }

    fn generate(&self, input: &InterfaceInput, profile: Option<&VendorProfile>) -> GeneratorOutput {
        let descriptor = InterfaceDescriptor::new(input).to_string();

        let local_if = input.local_if.trim();
        let local_if = if local_if.is_empty() {
            self.config.local_interface_placeholder.as_str()
        } else {
            local_if
        };

        let vars = TemplateVars::new()
            .descriptor(&descriptor)
            .interface(local_if);
        render(Self::CATEGORY, profile, &descriptor, &vars, self.config)
    }
}
