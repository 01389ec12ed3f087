//! # cipherlist
//!
//! Choosing which TLS cipher suites to offer, and in what order.
//!
//! Suites are configured in two independent parts, as in OpenSSL-style
//! libraries:
//!
//! - TLS1.3 ciphersuites are named one by one in a colon-separated
//!   list, such as `TLS_AES_256_GCM_SHA384:TLS_AES_128_GCM_SHA256`.  See
//!   [`parse_ciphersuites`].
//! - Suites for TLS1.2 and earlier are chosen with a rule string, such as
//!   `ECDHE+AESGCM:!aNULL`.  See the [`rules`] module.
//!
//! A [`Context`] holds shared configuration.  Each [`Connection`] made
//! from it may override either part.  The suites a connection offers are
//! its TLS1.3 ciphersuites followed by its pre-1.3 suites.
//!
//! ```
//! use cipherlist::Context;
//!
//! let mut ctx = Context::new();
//! ctx.set_cipher_list("TLSv1.2+ECDHE+AEAD+AES").unwrap();
//!
//! let names: Vec<&str> = ctx
//!     .new_connection()
//!     .ciphers()
//!     .iter()
//!     .map(|suite| suite.name())
//!     .collect();
//! assert_eq!(
//!     names,
//!     [
//!         "AEAD-AES256-GCM-SHA384",
//!         "AEAD-CHACHA20-POLY1305-SHA256",
//!         "AEAD-AES128-GCM-SHA256",
//!         "ECDHE-RSA-AES256-GCM-SHA384",
//!         "ECDHE-ECDSA-AES256-GCM-SHA384",
//!         "ECDHE-RSA-AES128-GCM-SHA256",
//!         "ECDHE-ECDSA-AES128-GCM-SHA256",
//!     ]
//! );
//! ```
//!
//! Every suite is a static [`SupportedCipherSuite`] from
//! [`ALL_CIPHER_SUITES`], and can be looked up by legacy id, wire value or
//! name.  Suites and suite lists are encoded as they appear in a
//! ClientHello with [`SupportedCipherSuite::encode`] and
//! [`encode_cipher_list`].
//!
//! ## Crate features
//!
//! - `logging` (enabled by default): logs configuration changes and rejected
//!   configuration through the `log` crate.

#![no_std]
#![forbid(unsafe_code, unused_must_use)]
#![deny(
    clippy::use_self,
    trivial_casts,
    trivial_numeric_casts,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates,
    unused_qualifications
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// Tests use std.
#[cfg(test)]
extern crate std;

// log for logging (optional).
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! _warn    ( ($($tt:tt)*) => {{}} );
    pub(crate) use {_warn as warn, debug, trace};
}

#[macro_use]
mod msgs;
mod config;
mod enums;
mod error;
mod registry;
pub mod rules;
mod suites;
mod tls13;

pub use crate::config::{Connection, Context};
pub use crate::enums::{CipherSuite, ProtocolVersion};
pub use crate::error::{Error, InvalidMessage, RuleError};
pub use crate::msgs::{encode_cipher_list, read_cipher_list, Codec, Reader};
pub use crate::registry::{
    by_id, by_name, by_value, default_list, is_known_unsupported, ALL_CIPHER_SUITES,
};
pub use crate::rules::{CipherRule, DEFAULT_RULE};
pub use crate::suites::{
    Authentication, BulkAlgorithm, Era, KeyExchange, MacAlgorithm, Strength,
    SupportedCipherSuite, CIPHER_SUITE_WIRE_LEN, LEGACY_ID_PREFIX,
};
pub use crate::tls13::{parse_ciphersuites, DEFAULT_TLS13_CIPHER_SUITES};
