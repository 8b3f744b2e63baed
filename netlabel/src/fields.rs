//! The field contract between generators and the presentation layer.
//!
//! Generators never touch widgets directly. They read input text, write
//! output text and toggle error markers through [`FieldMap`], keyed by the
//! closed [`FieldId`] set.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{Error, FieldError};
use crate::vendor::Category;

macro_rules! field_ids {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Identifier of an input field or output sink.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FieldId {
            $($variant),+
        }

        impl FieldId {
            /// Every field id.
            pub const ALL: &'static [FieldId] = &[$(FieldId::$variant),+];

            /// Presentation-layer id string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(FieldId::$variant => $name),+
                }
            }
        }

        impl FromStr for FieldId {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok(FieldId::$variant),)+
                    _ => Err(FieldError::UnknownField {
                        name: s.to_string(),
                    }
                    .into()),
                }
            }
        }
    };
}

field_ids! {
    VendorSelect => "vendor-select",

    SnmpOrg => "snmp-org",
    SnmpLat => "snmp-lat",
    SnmpLong => "snmp-long",

    VlanFinality => "vlan-finality",
    VlanInst => "vlan-inst",
    VlanService => "vlan-service",
    VlanOper => "vlan-oper",
    VlanId => "vlan-id",

    IfLocal => "if-local",
    IfType => "if-type",
    IfRemoteOrg => "if-remote-org",
    IfRemoteEquip => "if-remote-equip",
    IfRemoteIf => "if-remote-if",
    IfService => "if-service",
    IfInternalId => "if-internal-id",
    IfBandwidth => "if-bandwidth",
    IfComment => "if-comment",

    SnmpOutput => "snmp-output",
    SnmpContext => "snmp-context",
    VlanOutput => "vlan-output",
    VlanContext => "vlan-context",
    IfOutput => "if-output",
    IfContext => "if-context",
}

impl FieldId {
    /// Category whose generator reads this field, if it is a generator input.
    pub fn input_category(&self) -> Option<Category> {
        use FieldId::*;
        match self {
            SnmpOrg | SnmpLat | SnmpLong => Some(Category::Snmp),
            VlanFinality | VlanInst | VlanService | VlanOper | VlanId => Some(Category::Vlan),
            IfLocal | IfType | IfRemoteOrg | IfRemoteEquip | IfRemoteIf | IfService
            | IfInternalId | IfBandwidth | IfComment => Some(Category::Interface),
            _ => None,
        }
    }

    /// Input fields read by a category's generator.
    pub fn inputs(category: Category) -> impl Iterator<Item = FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .filter(move |id| id.input_category() == Some(category))
    }

    /// The `(finalOutput, contextOutput)` sink pair of a category.
    pub fn sinks(category: Category) -> (FieldId, FieldId) {
        match category {
            Category::Snmp => (FieldId::SnmpOutput, FieldId::SnmpContext),
            Category::Vlan => (FieldId::VlanOutput, FieldId::VlanContext),
            Category::Interface => (FieldId::IfOutput, FieldId::IfContext),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access to presentation-owned fields.
///
/// Written text must be kept verbatim, embedded newlines included, so an
/// external copy operation sees exactly what was generated.
pub trait FieldMap {
    /// Current text of a field. Unset fields read as empty.
    fn read(&self, id: FieldId) -> String;

    /// Replace the text of a field.
    fn write(&mut self, id: FieldId, text: &str);

    /// Set or clear the error marker on a field.
    fn mark_error(&mut self, id: FieldId, on: bool);
}

/// In-memory [`FieldMap`], for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFields {
    values: IndexMap<FieldId, String>,
    errors: HashSet<FieldId>,
}

impl MemoryFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style write.
    pub fn with(mut self, id: FieldId, text: impl Into<String>) -> Self {
        self.values.insert(id, text.into());
        self
    }

    /// Whether the error marker is set on a field.
    pub fn has_error(&self, id: FieldId) -> bool {
        self.errors.contains(&id)
    }
}

impl FieldMap for MemoryFields {
    fn read(&self, id: FieldId) -> String {
        self.values.get(&id).cloned().unwrap_or_default()
    }

    fn write(&mut self, id: FieldId, text: &str) {
        self.values.insert(id, text.to_string());
    }

    fn mark_error(&mut self, id: FieldId, on: bool) {
        if on {
            self.errors.insert(id);
        } else {
            self.errors.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_round_trip() {
        for id in FieldId::ALL {
            assert_eq!(id.as_str().parse::<FieldId>().unwrap(), *id);
        }
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            "snmp-altitude".parse::<FieldId>(),
            Err(Error::Field(FieldError::UnknownField { .. }))
        ));
    }

    #[test]
    fn test_inputs_per_category() {
        assert_eq!(FieldId::inputs(Category::Snmp).count(), 3);
        assert_eq!(FieldId::inputs(Category::Vlan).count(), 5);
        assert_eq!(FieldId::inputs(Category::Interface).count(), 9);
        assert_eq!(FieldId::VendorSelect.input_category(), None);
        assert_eq!(FieldId::IfOutput.input_category(), None);
    }

    #[test]
    fn test_sinks() {
        assert_eq!(
            FieldId::sinks(Category::Interface),
            (FieldId::IfOutput, FieldId::IfContext)
        );
    }

    #[test]
    fn test_memory_fields() {
        let mut fields = MemoryFields::new().with(FieldId::SnmpOrg, "corp-un01");
        assert_eq!(fields.read(FieldId::SnmpOrg), "corp-un01");
        assert_eq!(fields.read(FieldId::SnmpLat), "");

        fields.write(FieldId::SnmpContext, "a\nb");
        assert_eq!(fields.read(FieldId::SnmpContext), "a\nb");

        fields.mark_error(FieldId::SnmpOrg, true);
        assert!(fields.has_error(FieldId::SnmpOrg));
        fields.mark_error(FieldId::SnmpOrg, false);
        assert!(!fields.has_error(FieldId::SnmpOrg));
    }
}
