//! Cipher rule strings: the `ECDHE+AESGCM:!aNULL` mini-language that
//! selects and orders pre-1.3 cipher suites.
//!
//! A rule string is a list of clauses separated by `:` (or, for
//! compatibility, `,`, `;` or a space).  Each clause is an optional
//! operator followed by one or more keywords joined with `+`; a suite
//! matches the clause only if it matches every keyword.
//!
//! | operator | effect |
//! |---|---|
//! | none | select matching suites not already selected, appending them |
//! | `+` | keep only the selected suites that match, in their current order |
//! | `-` | deselect matching suites; a later clause may select them again |
//! | `!` | remove matching suites; no later clause can select them |
//!
//! `@STRENGTH` sorts the selected suites by key strength, strongest first,
//! and `DEFAULT` (only as the first clause) stands for [`DEFAULT_RULE`].
//! Suites are considered in a fixed preference order: forward-secret key
//! exchange first, then ChaCha20 and AES ahead of other ciphers, with
//! MD5, anonymous, RSA key transport and RC4 suites pushed back.
//!
//! Suites that `+` or `-` deselect are not gone: a later clause may
//! select them again, and they are then appended ahead of suites that
//! were never selected.
//!
//! Keywords are case sensitive.  Anything not recognised is an error;
//! nothing is ever silently ignored.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::error::RuleError;
use crate::log::trace;
use crate::suites::{Authentication, BulkAlgorithm, SupportedCipherSuite};

mod eval;
mod filter;
mod parse;

use eval::Selection;
use parse::Clause;

/// The rule used for pre-1.3 suites when nothing else is configured.
pub const DEFAULT_RULE: &str = "ALL:!aNULL:!eNULL";

/// A parsed cipher rule string.
#[derive(Clone, Debug, PartialEq)]
pub struct CipherRule {
    clauses: Vec<Clause>,
}

impl CipherRule {
    /// Parse `rule` without evaluating it.
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        let clauses = parse::parse(rule)?;
        trace!("parsed {} clauses from {rule:?}", clauses.len());
        Ok(Self { clauses })
    }

    /// The suites this rule selects, most preferred first.
    ///
    /// The result never contains a TLS1.3 suite or a duplicate, and may
    /// be empty.
    pub fn evaluate(&self) -> Vec<&'static SupportedCipherSuite> {
        let mut sel = Selection::preference_order();
        sel.run(&self.clauses);
        let selected = sel.selected();
        trace!("rule selected {} suites", selected.len());
        selected
    }
}

impl FromStr for CipherRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Every pre-1.3 suite in the order rules consider them.
pub fn preference_order() -> Vec<&'static SupportedCipherSuite> {
    Selection::preference_order().candidates().collect()
}

/// The suites [`DEFAULT_RULE`] selects.
pub(crate) fn default_cipher_list() -> Vec<&'static SupportedCipherSuite> {
    preference_order()
        .into_iter()
        .filter(|suite| {
            suite.auth != Authentication::Anonymous && suite.bulk != BulkAlgorithm::Null
        })
        .collect()
}
