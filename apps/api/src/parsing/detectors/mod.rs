//! Stateless signal detectors. Each is a pure function over normalized text
//! returning a small structured finding plus a confidence in [0, 1], so the
//! parser can weigh or skip weak signals.

pub mod employment;
pub mod experience;
pub mod hiring_flow;
pub mod location;
pub mod salary;
