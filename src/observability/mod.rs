//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields: network_id, lighthouse, account
//! - Private keys never reach a log line
//! - No recorder is installed here; metric calls are no-ops without one

pub mod logging;
pub mod metrics;
