//! CLI command implementations
//!
//! - `quote`: price a single package
//! - `rates`: print the rate card
//! - `schema`: JSON schema of the output types
//! - `util`: shared argument and output helpers

pub mod quote;
pub mod rates;
pub mod schema;
pub mod util;

pub use quote::cmd_quote;
pub use rates::cmd_rates;
pub use schema::cmd_schema;
