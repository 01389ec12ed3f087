//! TLS1.3 ciphersuite name lists.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::enums::CipherSuite;
use crate::error::Error;
use crate::log::trace;
use crate::registry;
use crate::suites::{Era, SupportedCipherSuite};

/// The TLS1.3 ciphersuites offered when none are configured, most
/// preferred first.
pub static DEFAULT_TLS13_CIPHER_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS13_AES_256_GCM_SHA384,
    CipherSuite::TLS13_CHACHA20_POLY1305_SHA256,
    CipherSuite::TLS13_AES_128_GCM_SHA256,
];

pub(crate) fn default_ciphersuites() -> Vec<&'static SupportedCipherSuite> {
    DEFAULT_TLS13_CIPHER_SUITES
        .iter()
        .filter_map(|cs| registry::find(*cs))
        .collect()
}

/// Parse a colon-separated list of TLS1.3 ciphersuite names.
///
/// Either naming convention is accepted, e.g. `TLS_AES_128_GCM_SHA256`
/// or `AEAD-AES128-GCM-SHA256`.  The empty string gives an empty list.
/// Names that are recognised but not supported are skipped, as are
/// repeats and empty entries.  Any other name, including the name of a
/// pre-1.3 suite, fails the whole list.
pub fn parse_ciphersuites(list: &str) -> Result<Vec<&'static SupportedCipherSuite>, Error> {
    let mut suites: Vec<&'static SupportedCipherSuite> = Vec::new();

    for name in list.split(':') {
        if name.is_empty() {
            continue;
        }

        match registry::by_name(name) {
            Some(suite) if suite.era() == Era::Tls13 => {
                if !suites.contains(&suite) {
                    suites.push(suite);
                }
            }
            None if registry::is_known_unsupported(name) => {
                trace!("skipping unsupported ciphersuite {name:?}");
            }
            _ => return Err(Error::UnknownCipherSuiteName(name.to_string())),
        }
    }

    Ok(suites)
}
