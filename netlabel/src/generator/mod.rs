//! Descriptor generators, one per category.
//!
//! Each generator reads its inputs through a [`FieldMap`], builds a
//! canonical descriptor, and renders it with the selected vendor's
//! template. No vendor (or a profile without a template for the category)
//! yields the bare descriptor and the configured no-vendor message.

mod config;
mod interface;
mod output;
mod snmp;
mod vlan;

pub use config::{
    GeneratorConfig, LOCAL_INTERFACE_PLACEHOLDER, UNSET_VENDOR_MESSAGE, VLAN_ID_PLACEHOLDER,
};
pub use interface::{InterfaceDescriptor, InterfaceGenerator, InterfaceInput};
pub use output::GeneratorOutput;
pub use snmp::{SnmpGenerator, SnmpInput, SnmpLocation};
pub use vlan::{VlanGenerator, VlanInput, VlanName};

use log::debug;

use crate::fields::FieldMap;
use crate::vendor::{Category, TemplateVars, VendorProfile};

/// A category generator.
pub trait Generator {
    /// Category this generator writes.
    const CATEGORY: Category;

    /// Snapshot of the inputs read from the fields.
    type Input;

    /// Read the current input snapshot.
    fn read(&self, fields: &dyn FieldMap) -> Self::Input;

    /// Produce the output pair for a snapshot.
    fn generate(&self, input: &Self::Input, profile: Option<&VendorProfile>) -> GeneratorOutput;

    /// Read, generate and write both sinks.
    fn run(&self, fields: &mut dyn FieldMap, profile: Option<&VendorProfile>) -> GeneratorOutput {
        let input = self.read(&*fields);
        let output = self.generate(&input, profile);
        let (final_sink, context_sink) = crate::fields::FieldId::sinks(Self::CATEGORY);
        fields.write(final_sink, &output.final_output);
        fields.write(context_sink, &output.context_output);
        output
    }
}

/// Render a descriptor through a vendor template, or fall back to the bare form.
fn render(
    category: Category,
    profile: Option<&VendorProfile>,
    bare: &str,
    vars: &TemplateVars<'_>,
    config: &GeneratorConfig,
) -> GeneratorOutput {
    match profile.and_then(|p| p.template(category).map(|t| (p.vendor, t))) {
        Some((vendor, template)) => {
            debug!("Rendering {} commands for {}", category, vendor);
            let command = template.apply_prefix(vars);
            let context = template.session_wrap(&command, vars);
            GeneratorOutput::new(command, context)
        }
        None => {
            debug!("Rendering bare {} descriptor", category);
            GeneratorOutput::new(bare, config.unset_vendor_message.clone())
        }
    }
}
