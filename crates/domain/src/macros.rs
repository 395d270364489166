//! Macro for implementing Display and FromStr for status enums
//!
//! Used by the pipeline mode and pipeline state enums so the CLI, the config
//! loader and log fields all agree on one spelling per variant.
//!
//! # Example
//!
//! ```rust
//! use planshot_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum UploadStatus {
//!     Waiting,
//!     Sent,
//! }
//!
//! impl_domain_status_conversions!(UploadStatus {
//!     Waiting => "waiting",
//!     Sent => "sent",
//! });
//!
//! assert_eq!(UploadStatus::Sent.to_string(), "sent");
//! assert_eq!("WAITING".parse::<UploadStatus>(), Ok(UploadStatus::Waiting));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// The string for each variant must be written in lowercase.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
