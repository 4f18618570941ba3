//! Core decision logic for the data chat assistant: a keyword-rule intent
//! classifier that maps business questions to SQL plus an explanation, and a
//! result-shape analyzer that turns an arbitrary row set into a chart
//! recommendation with an optional one-line insight.
//!
//! Both entry points ([`intent::classify`] and [`viz::analyze`]) are pure
//! functions; the executor boundary in [`exec`] is where a real backend
//! would do I/O.

pub mod exec;
pub mod intent;
pub mod record;
pub mod schema;
pub mod session;
pub mod viz;
