//! DBSCAN definition checking for trigger activity (TA) clusters.
//!
//! This crate provides tools for:
//! - Projecting trigger primitive records into 2-D (scaled time, channel) hits
//! - Counting eps-neighborhoods with a single symmetric pairwise pass
//! - Verifying that a candidate cluster satisfies the DBSCAN definition
//!   (every point is core, or density-reachable from a core point)
//! - Batch validation of a whole run's activities (parallelized)
//!
//! The crate is a clustering-result verifier, not a clustering algorithm:
//! it answers whether a cluster *could* have been produced by DBSCAN with
//! the given `eps` and `min_pts`, and reports diagnostics when it could not.
//!
//! # Example
//!
//! ```
//! use ta_compliance::{Activity, TriggerPrimitive, ValidationConfig, validate_activity};
//!
//! let activity = Activity::new(vec![
//!     TriggerPrimitive::new(1000, 120),
//!     TriggerPrimitive::new(1050, 121),
//!     TriggerPrimitive::new(1100, 122),
//! ]);
//!
//! let config = ValidationConfig::default();
//! let verdict = validate_activity(&activity, &config).unwrap();
//! assert!(verdict.compliant);
//! ```

pub mod config;
pub mod core;
pub mod validator;

pub use config::ValidationConfig;
pub use core::records::{Activity, TriggerPrimitive};
pub use validator::{
    validate_activity, validate_run, ClusterStatus, Result, RunReport, ValidationError, Verdict,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
