//! Event-driven generation engine.
//!
//! The engine owns the template registry, the generator configuration and
//! the subscription list. The presentation layer owns the fields; every
//! call reads a fresh snapshot through [`FieldMap`], so nothing is cached
//! between runs.
//!
//! # Example
//!
//! ```rust
//! use netlabel::{Engine, Event, FieldId, FieldMap, MemoryFields};
//!
//! let engine = Engine::new();
//! let mut fields = MemoryFields::new()
//!     .with(FieldId::VendorSelect, "juniper")
//!     .with(FieldId::VlanFinality, "data")
//!     .with(FieldId::VlanId, "5000");
//!
//! engine.handle(&mut fields, Event::input(FieldId::VlanId));
//!
//! assert_eq!(fields.read(FieldId::VlanId), "4094");
//! assert_eq!(fields.read(FieldId::VlanOutput), "set vlans DATA_4094 vlan-id 4094");
//! ```

mod builder;
mod events;

pub use builder::EngineBuilder;
pub use events::{Action, Event, EventKind, Subscriptions, default_subscriptions};

use log::trace;

use crate::fields::{FieldId, FieldMap};
use crate::generator::{
    Generator, GeneratorConfig, GeneratorOutput, InterfaceGenerator, SnmpGenerator, VlanGenerator,
};
use crate::normalize::{
    clamp_vlan_id, normalize_coord, normalize_token, parse_coordinate, parse_vlan_id, validate_org,
};
use crate::vendor::{Category, TemplateRegistry, Vendor, VendorProfile};

/// Generation engine.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: TemplateRegistry,
    config: GeneratorConfig,
    subscriptions: Subscriptions,
}

impl Engine {
    /// Engine with built-in templates, default configuration and wiring.
    pub fn new() -> Self {
        Self {
            registry: TemplateRegistry::builtin(),
            config: GeneratorConfig::default(),
            subscriptions: default_subscriptions(),
        }
    }

    /// Start a builder.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Vendor currently selected in the fields.
    pub fn selected_vendor(&self, fields: &dyn FieldMap) -> Option<Vendor> {
        Vendor::from_selection(&fields.read(FieldId::VendorSelect))
    }

    fn profile(&self, vendor: Option<Vendor>) -> Option<&VendorProfile> {
        vendor.and_then(|v| self.registry.get(v))
    }

    /// Compute a category's output from the fields without writing sinks.
    pub fn preview(&self, category: Category, fields: &dyn FieldMap) -> GeneratorOutput {
        let profile = self.profile(self.selected_vendor(fields));
        match category {
            Category::Snmp => {
                let generator = SnmpGenerator::new(&self.config);
                generator.generate(&generator.read(fields), profile)
            }
            Category::Vlan => {
                let generator = VlanGenerator::new(&self.config);
                generator.generate(&generator.read(fields), profile)
            }
            Category::Interface => {
                let generator = InterfaceGenerator::new(&self.config);
                generator.generate(&generator.read(fields), profile)
            }
        }
    }

    /// Run a category's generator and write both of its sinks.
    pub fn generate(&self, category: Category, fields: &mut dyn FieldMap) -> GeneratorOutput {
        let profile = self.profile(self.selected_vendor(&*fields));
        match category {
            Category::Snmp => SnmpGenerator::new(&self.config).run(fields, profile),
            Category::Vlan => VlanGenerator::new(&self.config).run(fields, profile),
            Category::Interface => InterfaceGenerator::new(&self.config).run(fields, profile),
        }
    }

    /// Run every generator in order: SNMP, VLAN, interface.
    pub fn generate_all(&self, fields: &mut dyn FieldMap) -> Vec<(Category, GeneratorOutput)> {
        let mut outputs = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            outputs.push((category, self.generate(category, fields)));
        }
        outputs
    }

    /// Populate every sink once, before any event has fired.
    pub fn initialize(&self, fields: &mut dyn FieldMap) -> Vec<(Category, GeneratorOutput)> {
        self.generate_all(fields)
    }

    /// Dispatch an event to its subscribed actions.
    ///
    /// Returns the outputs of every generator run triggered, in run order.
    pub fn handle(
        &self,
        fields: &mut dyn FieldMap,
        event: Event,
    ) -> Vec<(Category, GeneratorOutput)> {
        trace!("Handling {:?} on {}", event.kind, event.field);

        let mut outputs = Vec::new();
        for action in self.subscriptions.actions_for(&event) {
            self.apply(fields, action, &mut outputs);
        }
        outputs
    }

    fn apply(
        &self,
        fields: &mut dyn FieldMap,
        action: Action,
        outputs: &mut Vec<(Category, GeneratorOutput)>,
    ) {
        trace!("Applying {:?}", action);
        match action {
            Action::Regenerate(category) => {
                outputs.push((category, self.generate(category, fields)));
            }
            Action::RegenerateAll => outputs.extend(self.generate_all(fields)),
            Action::ClearError(field) => fields.mark_error(field, false),
            Action::ValidateOrg => {
                let org = normalize_token(&fields.read(FieldId::SnmpOrg));
                fields.mark_error(FieldId::SnmpOrg, !validate_org(&org));
            }
            Action::FormatCoordinate(field) => {
                let raw = fields.read(field);
                if parse_coordinate(&raw).is_some() {
                    let formatted = normalize_coord(&raw);
                    fields.write(field, &formatted);
                }
            }
            Action::ClampVlanId => {
                let raw = fields.read(FieldId::VlanId);
                if let Some(id) = parse_vlan_id(&raw) {
                    let clamped = clamp_vlan_id(id);
                    if i64::from(clamped) != id {
                        fields.write(FieldId::VlanId, &clamped.to_string());
                    }
                }
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
