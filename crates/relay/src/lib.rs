//! Contact lead delivery for the bob2build site.
//!
//! - [`client`]: HTTP relay client and the [`LeadSink`] seam.
//! - [`form`]: client-side contact form state machine with timed status reset.

pub mod client;
pub mod form;

pub use client::{FormRelay, LeadSink, RelayError};
pub use form::{ContactForm, FormError};
