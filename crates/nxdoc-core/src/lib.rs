//! NXDoc Core Types and Definitions
//!
//! This crate provides the foundational types shared by the NXDL reader and
//! the reStructuredText renderer. It includes:
//!
//! - **Spans**: Byte ranges into the XML source ([`span::Span`])
//! - **Elements**: The owned, read-only XML element tree ([`element::Element`])
//! - **Schema**: Borrowed, typed views over an NXDL definition ([`schema`] module)
//! - **Categories**: The three classification buckets of a definition ([`category::Category`])
//! - **Naming**: The `NX` / `NX_` naming conventions ([`naming`] module)

pub mod category;
pub mod element;
pub mod naming;
pub mod schema;
pub mod span;

pub use span::Span;
