//! VLAN name generator.
//!
//! Tokens are joined with `_` in the order
//! `FINALITY, SERVICE, INST, OPER, ID`; blank tokens are skipped. The ID
//! is clamped to 1..=4094 before it lands in the name or the commands.

use std::fmt;

use log::warn;

use super::{Generator, GeneratorConfig, GeneratorOutput, render};
use crate::fields::{FieldId, FieldMap};
use crate::normalize::{clamp_vlan_id, normalize_token, parse_vlan_id};
use crate::vendor::{Category, TemplateVars, VendorProfile};

/// Raw VLAN inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VlanInput {
    pub finality: String,
    pub inst: String,
    pub service: String,
    pub oper: String,
    /// Numeric ID as typed, before clamping. `None` when blank or not a number.
    pub id: Option<i64>,
}

/// Normalized VLAN name and ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanName {
    name: String,
    id: Option<u16>,
}

impl VlanName {
    pub fn new(input: &VlanInput) -> Self {
        let id = input.id.map(clamp_vlan_id);
        let id_token = id.map(|id| id.to_string()).unwrap_or_default();

        let name = [
            normalize_token(&input.finality),
            normalize_token(&input.service),
            normalize_token(&input.inst),
            normalize_token(&input.oper),
            id_token,
        ]
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("_");

        Self { name, id }
    }

    /// The underscore-joined VLAN name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clamped VLAN ID, if one was given.
    pub fn id(&self) -> Option<u16> {
        self.id
    }
}

impl fmt::Display for VlanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Generator for `vlan` sinks.
#[derive(Debug, Clone, Copy)]
pub struct VlanGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> VlanGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for VlanGenerator<'_> {
    const CATEGORY: Category = Category::Vlan;
    type Input = VlanInput;

    fn read(&self, fields: &dyn FieldMap) -> VlanInput {
        let raw_id = fields.read(FieldId::VlanId);
        let id = parse_vlan_id(&raw_id);
        if id.is_none() && !raw_id.trim().is_empty() {
            warn!("Ignoring non-numeric VLAN ID '{}'", raw_id.trim());
        }

        VlanInput {
            finality: fields.read(FieldId::VlanFinality),
            inst: fields.read(FieldId::VlanInst),
            service: fields.read(FieldId::VlanService),
            oper: fields.read(FieldId::VlanOper),
            id,
        }
    }

    fn generate(&self, input: &VlanInput, profile: Option<&VendorProfile>) -> GeneratorOutput {
        let vlan = VlanName::new(input);
        let placeholder = self.config.vlan_id_placeholder.as_str();
        let id = vlan.id().map(|id| id.to_string());
        let vars = TemplateVars::new()
            .name(vlan.name())
            .id(id.as_deref().unwrap_or(placeholder));
        render(Self::CATEGORY, profile, vlan.name(), &vars, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::MemoryFields;
    use crate::generator::UNSET_VENDOR_MESSAGE;
    use crate::vendor::{TemplateRegistry, Vendor};

    fn input(finality: &str, service: &str, inst: &str, oper: &str, id: Option<i64>) -> VlanInput {
        VlanInput {
            finality: finality.to_string(),
            inst: inst.to_string(),
            service: service.to_string(),
            oper: oper.to_string(),
            id,
        }
    }

    fn generate(vendor: Option<Vendor>, input: &VlanInput) -> GeneratorOutput {
        let config = GeneratorConfig::default();
        let registry = TemplateRegistry::builtin();
        let profile = vendor.and_then(|v| registry.get(v));
        VlanGenerator::new(&config).generate(input, profile)
    }

    #[test]
    fn test_juniper_clamps_id() {
        let snapshot = input("DATA", "VOIP", "BLD1", "ACME", Some(5000));
        assert_eq!(VlanName::new(&snapshot).name(), "DATA_VOIP_BLD1_ACME_4094");

        let output = generate(Some(Vendor::Juniper), &snapshot);
        assert_eq!(
            output.final_output,
            "set vlans DATA_VOIP_BLD1_ACME_4094 vlan-id 4094"
        );
        assert_eq!(
            output.context_output,
            "configure\nset vlans DATA_VOIP_BLD1_ACME_4094 vlan-id 4094\ncommit\nexit"
        );
    }

    #[test]
    fn test_extreme_missing_id_uses_placeholder() {
        let snapshot = input("MGMT", "", "", "", None);
        assert_eq!(VlanName::new(&snapshot).name(), "MGMT");

        let output = generate(Some(Vendor::Extreme), &snapshot);
        assert_eq!(
            output.final_output,
            "create vlan MGMT\nconfigure vlan MGMT tag <ID>"
        );
        assert_eq!(
            output.context_output,
            "create vlan MGMT\nconfigure vlan MGMT tag <ID>\nsave"
        );
    }

    #[test]
    fn test_huawei_and_cisco_missing_id_use_placeholder() {
        let snapshot = input("MGMT", "", "", "", None);
        assert_eq!(
            generate(Some(Vendor::Huawei), &snapshot).final_output,
            "vlan <ID>\n name MGMT\n description MGMT"
        );
        assert_eq!(
            generate(Some(Vendor::Cisco), &snapshot).final_output,
            "vlan <ID>\n name MGMT"
        );
    }

    #[test]
    fn test_huawei_wraps_multiline_block() {
        let output = generate(Some(Vendor::Huawei), &input("data", "", "", "", Some(10)));
        assert_eq!(
            output.context_output,
            "system-view\nvlan 10\n name DATA_10\n description DATA_10\nreturn\nsave"
        );
    }

    #[test]
    fn test_tokens_normalized_and_blank_skipped() {
        let snapshot = input(" data ", "  ", "bld1", " acme", Some(0));
        let vlan = VlanName::new(&snapshot);
        assert_eq!(vlan.name(), "DATA_BLD1_ACME_1");
        assert_eq!(vlan.id(), Some(1));
    }

    #[test]
    fn test_blank_finality_is_skipped() {
        let vlan = VlanName::new(&input("", "VOIP", "", "", Some(20)));
        assert_eq!(vlan.name(), "VOIP_20");
    }

    #[test]
    fn test_unset_vendor() {
        let output = generate(None, &input("DATA", "VOIP", "", "", Some(30)));
        assert_eq!(output.final_output, "DATA_VOIP_30");
        assert_eq!(output.context_output, UNSET_VENDOR_MESSAGE);
    }

    #[test]
    fn test_read_parses_id() {
        let config = GeneratorConfig::default();
        let generator = VlanGenerator::new(&config);

        let fields = MemoryFields::new()
            .with(FieldId::VlanFinality, "DATA")
            .with(FieldId::VlanId, "5000");
        assert_eq!(generator.read(&fields).id, Some(5000));

        let fields = MemoryFields::new().with(FieldId::VlanId, "abc");
        assert_eq!(generator.read(&fields).id, None);
    }

    #[test]
    fn test_id_always_in_range() {
        for raw in [-100, 0, 1, 2, 4093, 4094, 4095, 70000] {
            let vlan = VlanName::new(&input("X", "", "", "", Some(raw)));
            let id = vlan.id().unwrap();
            assert!((1..=4094).contains(&id), "{raw} -> {id}");
        }
    }
}
