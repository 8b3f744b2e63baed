//! SNMP location generator.
//!
//! Descriptor format: `O:{ORG}|LT:{LAT}|LG:{LONG}`. Every separator is
//! kept even when a token is empty.

use std::fmt;

use super::{Generator, GeneratorConfig, GeneratorOutput, render};
use crate::fields::{FieldId, FieldMap};
use crate::normalize::{normalize_coord, normalize_token, validate_org};
use crate::vendor::{Category, TemplateVars, VendorProfile};

/// Raw SNMP location inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnmpInput {
    pub org: String,
    pub lat: String,
    pub long: String,
}

/// Normalized SNMP location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpLocation {
    pub org: String,
    pub lat: String,
    pub long: String,
    /// Whether `org` has the `ORG-UNIT` shape (or is empty).
    pub org_valid: bool,
}

impl SnmpLocation {
    pub fn new(input: &SnmpInput) -> Self {
        let org = normalize_token(&input.org);
        let org_valid = validate_org(&org);
        Self {
            org,
            lat: normalize_coord(input.lat.trim()),
            long: normalize_coord(input.long.trim()),
            org_valid,
        }
    }

    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SnmpLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O:{}|LT:{}|LG:{}", self.org, self.lat, self.long)
    }
}

/// Generator for `snmp` sinks.
#[derive(Debug, Clone, Copy)]
pub struct SnmpGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SnmpGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Normalize a snapshot without rendering commands.
    pub fn location(&self, input: &SnmpInput) -> SnmpLocation {
        SnmpLocation::new(input)
    }
}

impl Generator for SnmpGenerator<'_> {
    const CATEGORY: Category = Category::Snmp;
    type Input = SnmpInput;

    fn read(&self, fields: &dyn FieldMap) -> SnmpInput {
        SnmpInput {
            org: fields.read(FieldId::SnmpOrg),
            lat: fields.read(FieldId::SnmpLat),
            long: fields.read(FieldId::SnmpLong),
        }
    }

    fn generate(&self, input: &SnmpInput, profile: Option<&VendorProfile>) -> GeneratorOutput {
        let descriptor = self.location(input).descriptor();
        let vars = TemplateVars::new().descriptor(&descriptor);
        render(Self::CATEGORY, profile, &descriptor, &vars, self.config)
    }
}
