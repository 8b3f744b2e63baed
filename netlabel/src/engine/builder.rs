//! Builder for creating engines.

use super::Engine;
use super::events::{Subscriptions, default_subscriptions};
use crate::error::Result;
use crate::generator::GeneratorConfig;
use crate::vendor::TemplateRegistry;

/// Builder for constructing an [`Engine`].
///
/// # Example
///
/// ```rust
/// use netlabel::{EngineBuilder, GeneratorConfig};
///
/// # fn example() -> Result<(), netlabel::Error> {
/// let engine = EngineBuilder::new()
///     .config(GeneratorConfig {
///         unset_vendor_message: "Select a vendor to see the commands.".to_string(),
///         ..GeneratorConfig::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    registry: Option<TemplateRegistry>,
    subscriptions: Option<Subscriptions>,
    config: GeneratorConfig,
}

impl EngineBuilder {
    /// Create a builder with the built-in templates and wiring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom template registry.
    pub fn registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a custom subscription list.
    pub fn subscriptions(mut self, subscriptions: Subscriptions) -> Self {
        self.subscriptions = Some(subscriptions);
        self
    }

    /// Replace the generator configuration.
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine.
    ///
    /// Fails if the registry lacks a profile for any vendor.
    pub fn build(self) -> Result<Engine> {
        let registry = self.registry.unwrap_or_else(TemplateRegistry::builtin);
        registry.ensure_complete()?;

        Ok(Engine {
            registry,
            config: self.config,
            subscriptions: self.subscriptions.unwrap_or_else(default_subscriptions),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, VendorError};
    use crate::vendor::{Category, TemplateVars, Vendor, vendors};

    #[test]
    fn test_defaults() {
        let engine = EngineBuilder::new().build().unwrap();
        assert_eq!(engine.config(), &GeneratorConfig::default());
        assert!(engine.registry().ensure_complete().is_ok());
    }

    #[test]
    fn test_config_override() {
        let engine = EngineBuilder::new()
            .config(GeneratorConfig {
                unset_vendor_message: "Pick a vendor".to_string(),
                vlan_id_placeholder: "<VID>".to_string(),
                ..GeneratorConfig::default()
            })
            .build()
            .unwrap();
        let config = engine.config();
        assert_eq!(config.unset_vendor_message, "Pick a vendor");
        assert_eq!(config.vlan_id_placeholder, "<VID>");
        assert_eq!(config.local_interface_placeholder, "<INTERFACE_LOCAL>");
    }

    #[test]
    fn test_rejects_incomplete_registry() {
        let mut registry = TemplateRegistry::new();
        registry.register(vendors::cisco::profile()).unwrap();
        let result = EngineBuilder::new().registry(registry).build();
        assert!(matches!(
            result,
            Err(Error::Vendor(VendorError::MissingProfile { .. }))
        ));
    }

    #[test]
    fn test_custom_registry_is_used() {
        let mut registry = TemplateRegistry::new();
        registry.register(vendors::huawei::profile()).unwrap();
        registry.register(vendors::extreme::profile()).unwrap();
        registry.register(vendors::juniper::profile()).unwrap();
        let cisco = vendors::cisco::profile()
            .with_command(Category::Snmp, "snmp-server location \"{descriptor}\"");
        registry.register(cisco).unwrap();
        let engine = EngineBuilder::new().registry(registry).build().unwrap();
        let profile = engine.registry().get(Vendor::Cisco).unwrap();
        let template = profile.template(Category::Snmp).unwrap();
        let vars = TemplateVars::new().descriptor("O:|LT:|LG:");
        assert_eq!(
            template.apply_prefix(&vars),
            "snmp-server location \"O:|LT:|LG:\""
        );
    }
}
