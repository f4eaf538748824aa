// ABOUTME: Client library that forwards rendered visuals to a wcat display server
// ABOUTME: One blocking HTTP POST per visual, with adapters for images, charts, and pages

pub mod chart;
pub mod constants;
pub mod error;
pub mod page;
pub mod raster;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::error::WcatError;
pub use crate::transport::{default_client, ContentType, Payload, Transport, WcatClient};
