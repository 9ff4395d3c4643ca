//! Campus placement portal data layer.
//!
//! Students browse companies and positions, apply, and track application
//! status. The domain lives in [`domain`]; storage adapters live in
//! [`outbound`]; [`bootstrap`] wires them together from [`settings`].

pub mod bootstrap;
pub mod domain;
pub mod outbound;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
