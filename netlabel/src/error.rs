//! Error types for netlabel.
//!
//! Generation never fails. These errors only surface at the edges of the
//! API: parsing vendor names or field ids, and assembling registries and
//! engines.

use thiserror::Error;

/// Main error type for netlabel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Vendor and template errors
    #[error("Vendor error: {0}")]
    Vendor(#[from] VendorError),

    /// Field identifier errors
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

/// Vendor lookup and template registry errors.
#[derive(Error, Debug)]
pub enum VendorError {
    /// Vendor name not recognized
    #[error("Unknown vendor: '{name}'")]
    UnknownVendor { name: String },

    /// Vendor already has a registered profile
    #[error("Vendor '{vendor}' is already registered")]
    AlreadyRegistered { vendor: String },

    /// No profile registered for a vendor
    #[error("No template profile registered for vendor '{vendor}'")]
    MissingProfile { vendor: String },
}

/// Field identifier errors.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Field id not part of the presentation contract
    #[error("Unknown field: '{name}'")]
    UnknownField { name: String },

    /// Category name not recognized
    #[error("Unknown category: '{name}'")]
    UnknownCategory { name: String },
}

/// Result type alias using netlabel's Error.
pub type Result<T> = std::result::Result<T, Error>;
