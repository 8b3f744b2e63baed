//! # Netlabel
//!
//! Canonical descriptor and vendor command generator for network operators.
//!
//! Netlabel turns structured inputs (organization codes, coordinates, VLAN
//! tokens, interface endpoints) into standardized labels, then renders the
//! commands that apply those labels on a device, wrapped in the vendor's
//! enter-config / commit / save session.
//!
//! ## Features
//!
//! - SNMP location descriptors (`O:ORG-UNIT|LT:lat|LG:long`)
//! - VLAN names (`FINALITY_SERVICE_INST_OPER_ID`) with ID clamping
//! - Interface descriptions (`T:type|O:org|E:equip|I:if|...`)
//! - Multi-vendor templates (Huawei, Extreme, Juniper, Cisco) as plain data
//! - Event-driven engine over an abstract field map
//!
//! ## Quick Start
//!
//! ```rust
//! use netlabel::{Engine, Event, FieldId, FieldMap, MemoryFields};
//!
//! let engine = Engine::new();
//! let mut fields = MemoryFields::new()
//!     .with(FieldId::VendorSelect, "cisco")
//!     .with(FieldId::SnmpOrg, "CORP-UN01")
//!     .with(FieldId::SnmpLat, "-23.5")
//!     .with(FieldId::SnmpLong, "-46.633");
//!
//! engine.initialize(&mut fields);
//!
//! assert_eq!(
//!     fields.read(FieldId::SnmpOutput),
//!     "snmp-server location O:CORP-UN01|LT:-23.50000|LG:-46.63300"
//! );
//! ```

pub mod engine;
pub mod error;
pub mod fields;
pub mod generator;
pub mod normalize;
pub mod vendor;

// Re-export main types for convenience
pub use engine::{Action, Engine, EngineBuilder, Event, EventKind, Subscriptions};
pub use error::Error;
pub use fields::{FieldId, FieldMap, MemoryFields};
pub use generator::{Generator, GeneratorConfig, GeneratorOutput};
pub use vendor::{Category, TemplateRegistry, Vendor, VendorProfile};
