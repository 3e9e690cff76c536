//! Two-hop best-price conversion planning.
//!
//! A conversion from fiat A to fiat B is routed through the stable
//! asset with three sequential marketplace queries: a full request for
//! the currency whose amount is known, a one-row probe for the other
//! currency to estimate its amount, and a full request for the other
//! currency at that estimate. The final rate is derived from the two
//! full requests only.

pub mod error;
pub mod planner;
pub mod quote;
pub mod request;

pub use error::{PlanError, PlanResult};
pub use planner::{ConversionPlanner, PlannerConfig};
pub use quote::ConversionQuote;
pub use request::{ConversionRequest, FilledSide};
