//! Generator configuration.

/// Message shown in place of a session block when no vendor is selected.
pub const UNSET_VENDOR_MESSAGE: &str = "Selecione um fabricante para ver os comandos.";

/// Stand-in for a missing VLAN ID inside commands.
pub const VLAN_ID_PLACEHOLDER: &str = "<ID>";

/// Stand-in for a missing local interface inside commands.
pub const LOCAL_INTERFACE_PLACEHOLDER: &str = "<INTERFACE_LOCAL>";

/// User-facing constants shared by all generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Context text when no vendor is selected.
    pub unset_vendor_message: String,

    /// Substituted for `{id}` when the VLAN ID is blank.
    pub vlan_id_placeholder: String,

    /// Substituted for `{interface}` when the local interface is blank.
    pub local_interface_placeholder: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            unset_vendor_message: UNSET_VENDOR_MESSAGE.to_string(),
            vlan_id_placeholder: VLAN_ID_PLACEHOLDER.to_string(),
            local_interface_placeholder: LOCAL_INTERFACE_PLACEHOLDER.to_string(),
        }
    }
}
