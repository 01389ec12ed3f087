use alloc::vec::Vec;

use crate::error::Error;
use crate::log::{debug, warn};
use crate::registry;
use crate::rules::CipherRule;
use crate::suites::{Era, SupportedCipherSuite};
use crate::tls13::parse_ciphersuites;

/// The lists one scope has been configured with, per era.
///
/// `None` means "not configured here"; `Some(vec![])` is an explicit
/// choice of no suites for that era.
#[derive(Clone, Debug, Default, PartialEq)]
struct EraLists {
    tls13: Option<Vec<&'static SupportedCipherSuite>>,
    tls12: Option<Vec<&'static SupportedCipherSuite>>,
}

impl EraLists {
    fn get(&self, era: Era) -> Option<&[&'static SupportedCipherSuite]> {
        match era {
            Era::Tls13 => self.tls13.as_deref(),
            Era::Tls12 => self.tls12.as_deref(),
        }
    }

    fn set(&mut self, era: Era, list: Vec<&'static SupportedCipherSuite>) {
        match era {
            Era::Tls13 => self.tls13 = Some(list),
            Era::Tls12 => self.tls12 = Some(list),
        }
    }

    /// This scope's list for `era`, else `parent`'s, else the default.
    fn resolve(&self, parent: &Self, era: Era) -> Vec<&'static SupportedCipherSuite> {
        match self.get(era).or_else(|| parent.get(era)) {
            Some(list) => list.to_vec(),
            None => registry::default_list(Some(era)),
        }
    }

    fn effective(&self, parent: &Self) -> Vec<&'static SupportedCipherSuite> {
        merge(
            self.resolve(parent, Era::Tls13),
            self.resolve(parent, Era::Tls12),
        )
    }
}

/// TLS1.3 suites first, then the rest, each suite once.
fn merge(
    tls13: Vec<&'static SupportedCipherSuite>,
    tls12: Vec<&'static SupportedCipherSuite>,
) -> Vec<&'static SupportedCipherSuite> {
    let mut merged = Vec::with_capacity(tls13.len() + tls12.len());
    for suite in tls13.into_iter().chain(tls12) {
        if !merged.contains(&suite) {
            merged.push(suite);
        }
    }
    merged
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn eval_rule(scope: &str, rule: &str) -> Result<Vec<&'static SupportedCipherSuite>, Error> {
    match CipherRule::parse(rule) {
        Ok(rule) => Ok(rule.evaluate()),
        Err(err) => {
            warn!("{scope}: rejected cipher rule {rule:?}: {err}");
            Err(err.into())
        }
    }
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn eval_names(scope: &str, list: &str) -> Result<Vec<&'static SupportedCipherSuite>, Error> {
    parse_ciphersuites(list).inspect_err(|err| {
        warn!("{scope}: rejected ciphersuite list {list:?}: {err}");
    })
}

/// Shared cipher configuration, from which [`Connection`]s are made.
///
/// Until configured, a `Context` offers the default TLS1.3 ciphersuites
/// followed by the suites chosen by [`crate::DEFAULT_RULE`].
#[derive(Clone, Debug, Default)]
pub struct Context {
    lists: EraLists,
}

impl Context {
    /// Make a new, unconfigured context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose pre-1.3 suites with a cipher rule string.
    ///
    /// On error nothing changes.  The empty string selects no pre-1.3
    /// suites at all.
    pub fn set_cipher_list(&mut self, rule: &str) -> Result<(), Error> {
        let list = eval_rule("context", rule)?;
        debug!("context: cipher list now has {} suites", list.len());
        self.lists.set(Era::Tls12, list);
        Ok(())
    }

    /// Choose TLS1.3 ciphersuites with a colon-separated name list.
    ///
    /// On error nothing changes.  The empty string selects no TLS1.3
    /// ciphersuites at all.
    pub fn set_ciphersuites(&mut self, list: &str) -> Result<(), Error> {
        let list = eval_names("context", list)?;
        debug!("context: ciphersuites now has {} suites", list.len());
        self.lists.set(Era::Tls13, list);
        Ok(())
    }

    /// The suites this context offers, most preferred first.
    pub fn ciphers(&self) -> Vec<&'static SupportedCipherSuite> {
        self.lists.effective(&EraLists::default())
    }

    /// Make a connection that starts from this context's configuration.
    pub fn new_connection(&self) -> Connection {
        Connection::new(self)
    }
}

/// Cipher configuration for one connection.
///
/// A connection copies its context's configuration when it is created.
/// Changing the context later does not affect it.  Each era configured
/// on the connection replaces what the context had for that era; each
/// era not configured here keeps the context's.
#[derive(Clone, Debug)]
pub struct Connection {
    inherited: EraLists,
    lists: EraLists,
}

impl Connection {
    /// Make a connection from `ctx`.
    pub fn new(ctx: &Context) -> Self {
        Self {
            inherited: ctx.lists.clone(),
            lists: EraLists::default(),
        }
    }

    /// Choose pre-1.3 suites for this connection only.  See
    /// [`Context::set_cipher_list`].
    pub fn set_cipher_list(&mut self, rule: &str) -> Result<(), Error> {
        let list = eval_rule("connection", rule)?;
        debug!("connection: cipher list now has {} suites", list.len());
        self.lists.set(Era::Tls12, list);
        Ok(())
    }

    /// Choose TLS1.3 ciphersuites for this connection only.  See
    /// [`Context::set_ciphersuites`].
    pub fn set_ciphersuites(&mut self, list: &str) -> Result<(), Error> {
        let list = eval_names("connection", list)?;
        debug!("connection: ciphersuites now has {} suites", list.len());
        self.lists.set(Era::Tls13, list);
        Ok(())
    }

    /// The suites this connection offers: TLS1.3 ciphersuites first, then
    /// pre-1.3 suites.
    pub fn ciphers(&self) -> Vec<&'static SupportedCipherSuite> {
        self.lists.effective(&self.inherited)
    }

    /// The TLS1.3 part of [`Connection::ciphers`].
    pub fn cipher_list_tls13(&self) -> Vec<&'static SupportedCipherSuite> {
        self.lists.resolve(&self.inherited, Era::Tls13)
    }

    /// The pre-1.3 part of [`Connection::ciphers`].
    pub fn cipher_list_tls12(&self) -> Vec<&'static SupportedCipherSuite> {
        self.lists.resolve(&self.inherited, Era::Tls12)
    }
}
