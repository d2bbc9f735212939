//! Application layer containing the flow orchestration.
//!
//! This module defines the `DonationFlow` which acts as the primary entry
//! point for the two-step top-up flow. It owns the step state and the two
//! input fields and reaches the outside world only through the domain ports.

pub mod flow;
