//! Smoke probe for a local RabbitMQ management console.
//!
//! Four sequential GET checks (homepage, `/api/overview` with guest login,
//! `/js/main.js`, `/css/main.css`), each printed as a status line. Failures
//! are reported and never stop the run.

#![allow(missing_docs)]

mod check;
mod client;
mod error;
mod report;
mod runner;
mod target;

pub use check::CheckKind;
pub use client::{Auth, ConsoleClient, ConsoleResponse};
pub use error::ProbeError;
pub use report::{BANNER, LineStatus, ProbeReport, ReportLine};
pub use runner::{ProbeRunner, overview_version};
pub use target::{
    DEFAULT_BASE_URL, DEFAULT_PASSWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE_MARKER,
    DEFAULT_USERNAME, ProbeTarget,
};
