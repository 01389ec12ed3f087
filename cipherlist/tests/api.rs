//! Assorted public API tests.

use cipherlist::{
    by_id, by_name, by_value, default_list, encode_cipher_list, parse_ciphersuites,
    read_cipher_list, CipherRule, CipherSuite, Connection, Context, Era, Error, InvalidMessage,
    Reader, RuleError, SupportedCipherSuite, ALL_CIPHER_SUITES, DEFAULT_RULE,
};

mod common;
use common::*;

#[test]
fn wire_round_trip_for_every_default() {
    for era in [None, Some(Era::Tls12), Some(Era::Tls13)] {
        for suite in default_list(era) {
            let mut bytes = vec![];
            suite.encode(&mut bytes);
            assert_eq!(bytes.len(), 2);
            assert_eq!(bytes, suite.to_array());

            let decoded = SupportedCipherSuite::from_wire(suite.to_array()).unwrap();
            assert_eq!(decoded, suite);
            assert_eq!(decoded.id(), suite.id());
        }
    }
}

#[test]
fn lookup_by_id_and_value() {
    for suite in default_list(None) {
        assert_eq!(by_id(suite.id()), Some(suite));
        assert_eq!(by_value(suite.value()), Some(suite));
    }

    let suite = by_id(TLS13_AES_256_GCM_SHA384).unwrap();
    assert_eq!(suite.name(), "AEAD-AES256-GCM-SHA384");
    assert_eq!(suite.standard_name(), "TLS_AES_256_GCM_SHA384");
    assert_eq!(suite.suite(), CipherSuite::TLS13_AES_256_GCM_SHA384);

    assert!(by_id(0x0300_0000).is_none());
    assert!(by_value(0x5600).is_none());
}

#[test]
fn lookup_by_either_name() {
    for suite in ALL_CIPHER_SUITES {
        assert_eq!(by_name(suite.name()), Some(suite));
        assert_eq!(by_name(suite.standard_name()), Some(suite));
    }
    assert!(by_name("TLS_NOT_A_CIPHERSUITE").is_none());
}

#[test]
fn ciphersuites_parse() {
    let want = suites(&[
        TLS13_AES_256_GCM_SHA384,
        TLS13_CHACHA20_POLY1305_SHA256,
        TLS13_AES_128_GCM_SHA256,
    ]);

    for list in [
        "TLS_AES_256_GCM_SHA384:TLS_CHACHA20_POLY1305_SHA256:TLS_AES_128_GCM_SHA256",
        "AEAD-AES256-GCM-SHA384:AEAD-CHACHA20-POLY1305-SHA256:AEAD-AES128-GCM-SHA256",
    ] {
        assert_eq!(parse_ciphersuites(list).unwrap(), want, "{list}");
    }

    assert_eq!(
        ids(&parse_ciphersuites(
            "TLS_AES_128_GCM_SHA256:TLS_CHACHA20_POLY1305_SHA256:TLS_AES_256_GCM_SHA384"
        )
        .unwrap()),
        vec![
            TLS13_AES_128_GCM_SHA256,
            TLS13_CHACHA20_POLY1305_SHA256,
            TLS13_AES_256_GCM_SHA384
        ]
    );

    assert_eq!(
        ids(&parse_ciphersuites(
            "TLS_AES_128_CCM_SHA256:TLS_AES_128_CCM_8_SHA256:TLS_AES_256_GCM_SHA384"
        )
        .unwrap()),
        vec![TLS13_AES_256_GCM_SHA384]
    );

    assert_eq!(
        ids(&parse_ciphersuites(
            "AEAD-AES256-GCM-SHA384:AEAD-AES128-CCM-SHA256:AEAD-AES128-CCM-8-SHA256"
        )
        .unwrap()),
        vec![TLS13_AES_256_GCM_SHA384]
    );

    assert_eq!(parse_ciphersuites(""), Ok(vec![]));

    assert!(matches!(
        parse_ciphersuites("TLS_AES_256_GCM_SHA384:TLS_NOT_A_CIPHERSUITE"),
        Err(Error::UnknownCipherSuiteName(name)) if name == "TLS_NOT_A_CIPHERSUITE"
    ));
    assert!(parse_ciphersuites("TLS_AES_256_GCM_SHA384,TLS_AES_128_GCM_SHA256").is_err());
}

#[test]
fn rule_evaluation() {
    let list = CipherRule::parse(ECDHE_AEAD_AES_RULE).unwrap().evaluate();
    assert_eq!(
        ids(&list),
        vec![
            ECDHE_RSA_WITH_AES_256_GCM_SHA384,
            ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
            ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        ]
    );
    assert!(list.iter().all(|s| s.era() == Era::Tls12));

    assert!(CipherRule::parse("").unwrap().evaluate().is_empty());
    assert_eq!(
        CipherRule::parse(DEFAULT_RULE).unwrap().evaluate(),
        default_list(Some(Era::Tls12))
    );
    assert_eq!(
        CipherRule::parse("TLSv1.2+ECDHE+BOGUS"),
        Err(RuleError::UnknownKeyword("BOGUS".into()))
    );
}

#[test]
fn order_operator_narrows_selection() {
    let list = CipherRule::parse("ECDHE+AESGCM:+AES128").unwrap().evaluate();
    let names: Vec<&str> = list.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        ["ECDHE-RSA-AES128-GCM-SHA256", "ECDHE-ECDSA-AES128-GCM-SHA256"]
    );

    // `+` never selects anything new
    let list = CipherRule::parse("ECDHE+AES256+AEAD:+AES128").unwrap().evaluate();
    assert!(list.is_empty());
}

/// The configuration calls shared by both scopes.
trait Scope {
    fn ciphersuites(&mut self, list: &str) -> Result<(), Error>;
    fn cipher_list(&mut self, rule: &str) -> Result<(), Error>;

    /// Apply whichever of `ciphersuites` and `rule` are given, in the
    /// requested order.
    fn configure(
        &mut self,
        ciphersuites_first: bool,
        ciphersuites: Option<&str>,
        rule: Option<&str>,
    ) {
        if ciphersuites_first {
            if let Some(list) = ciphersuites {
                self.ciphersuites(list).unwrap();
            }
        }
        if let Some(rule) = rule {
            self.cipher_list(rule).unwrap();
        }
        if !ciphersuites_first {
            if let Some(list) = ciphersuites {
                self.ciphersuites(list).unwrap();
            }
        }
    }
}

impl Scope for Context {
    fn ciphersuites(&mut self, list: &str) -> Result<(), Error> {
        self.set_ciphersuites(list)
    }

    fn cipher_list(&mut self, rule: &str) -> Result<(), Error> {
        self.set_cipher_list(rule)
    }
}

impl Scope for Connection {
    fn ciphersuites(&mut self, list: &str) -> Result<(), Error> {
        self.set_ciphersuites(list)
    }

    fn cipher_list(&mut self, rule: &str) -> Result<(), Error> {
        self.set_cipher_list(rule)
    }
}

/// One row: configuration applied to a context, then to a connection
/// made from it.
#[derive(Default)]
struct CipherSetTest {
    ctx_ciphersuites_first: bool,
    ctx_ciphersuites: Option<&'static str>,
    ctx_rule: Option<&'static str>,
    conn_ciphersuites_first: bool,
    conn_ciphersuites: Option<&'static str>,
    conn_rule: Option<&'static str>,
}

impl CipherSetTest {
    fn run(&self) -> (Context, Connection) {
        let mut ctx = Context::new();
        ctx.configure(
            self.ctx_ciphersuites_first,
            self.ctx_ciphersuites,
            self.ctx_rule,
        );

        let mut conn = ctx.new_connection();
        conn.configure(
            self.conn_ciphersuites_first,
            self.conn_ciphersuites,
            self.conn_rule,
        );
        (ctx, conn)
    }
}

const AES256_CHACHA: &str = "AEAD-AES256-GCM-SHA384:AEAD-CHACHA20-POLY1305-SHA256";

const ECDHE_AEAD_AES: &[u32] = &[
    ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
];

fn with_tls13(tls13: &[u32]) -> Vec<u32> {
    let mut want = tls13.to_vec();
    want.extend_from_slice(ECDHE_AEAD_AES);
    want
}

#[test]
fn cipher_set() {
    init_logging();

    let default_tls13 = [
        TLS13_AES_256_GCM_SHA384,
        TLS13_CHACHA20_POLY1305_SHA256,
        TLS13_AES_128_GCM_SHA256,
    ];
    let configured_tls13 = [TLS13_AES_256_GCM_SHA384, TLS13_CHACHA20_POLY1305_SHA256];

    let tests = [
        (
            CipherSetTest {
                ctx_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&default_tls13),
        ),
        (
            CipherSetTest {
                conn_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&default_tls13),
        ),
        (
            CipherSetTest {
                ctx_ciphersuites_first: true,
                ctx_ciphersuites: Some(AES256_CHACHA),
                ctx_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
        (
            CipherSetTest {
                conn_ciphersuites_first: true,
                conn_ciphersuites: Some(AES256_CHACHA),
                conn_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
        (
            CipherSetTest {
                ctx_ciphersuites: Some(AES256_CHACHA),
                ctx_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
        (
            CipherSetTest {
                conn_ciphersuites: Some(AES256_CHACHA),
                conn_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
        (
            CipherSetTest {
                ctx_ciphersuites: Some(AES256_CHACHA),
                conn_rule: Some(ECDHE_AEAD_AES_RULE),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
        (
            CipherSetTest {
                ctx_rule: Some(ECDHE_AEAD_AES_RULE),
                conn_ciphersuites: Some(AES256_CHACHA),
                ..Default::default()
            },
            with_tls13(&configured_tls13),
        ),
    ];

    for (i, (test, want)) in tests.iter().enumerate() {
        let (ctx, conn) = test.run();
        assert_eq!(ids(&conn.ciphers()), *want, "test {i}");
        assert_eq!(
            conn.ciphers(),
            [conn.cipher_list_tls13(), conn.cipher_list_tls12()].concat(),
            "test {i}"
        );

        // a context configured on its own offers the same as its connections
        if test.conn_ciphersuites.is_none() && test.conn_rule.is_none() {
            assert_eq!(ctx.ciphers(), conn.ciphers(), "test {i}");
        }
    }
}

#[test]
fn unconfigured_scopes_offer_defaults() {
    let ctx = Context::default();
    assert_eq!(ctx.ciphers(), default_list(None));

    let conn = Connection::new(&ctx);
    assert_eq!(conn.ciphers(), default_list(None));
    assert_eq!(conn.cipher_list_tls13(), default_list(Some(Era::Tls13)));
    assert_eq!(conn.cipher_list_tls12(), default_list(Some(Era::Tls12)));
}

#[test]
fn empty_ciphersuites_differ_from_unset() {
    let mut ctx = Context::new();
    ctx.set_cipher_list(ECDHE_AEAD_AES_RULE).unwrap();
    ctx.set_ciphersuites("").unwrap();
    assert_eq!(ids(&ctx.ciphers()), ECDHE_AEAD_AES);

    // the connection inherits the explicit empty list
    let mut conn = ctx.new_connection();
    assert!(conn.cipher_list_tls13().is_empty());

    conn.set_ciphersuites("TLS_AES_128_GCM_SHA256").unwrap();
    assert_eq!(
        ids(&conn.ciphers()),
        with_tls13(&[TLS13_AES_128_GCM_SHA256])
    );
}

#[test]
fn rejected_configuration_changes_nothing() {
    let mut ctx = Context::new();
    ctx.set_ciphersuites(AES256_CHACHA).unwrap();
    ctx.set_cipher_list(ECDHE_AEAD_AES_RULE).unwrap();
    let before = ctx.ciphers();

    assert!(matches!(
        ctx.set_cipher_list("ECDHE:@NOPE"),
        Err(Error::InvalidRule(RuleError::UnknownCommand(_)))
    ));
    assert!(matches!(
        ctx.set_ciphersuites("TLS_AES_256_GCM_SHA384,TLS_AES_128_GCM_SHA256"),
        Err(Error::UnknownCipherSuiteName(_))
    ));
    assert_eq!(ctx.ciphers(), before);

    let mut conn = ctx.new_connection();
    assert!(conn.set_cipher_list("!").is_err());
    assert!(conn.set_ciphersuites("TLS_NOT_A_CIPHERSUITE").is_err());
    assert_eq!(conn.ciphers(), before);
}

#[test]
fn connections_do_not_follow_context_changes() {
    let mut ctx = Context::new();
    ctx.set_cipher_list(ECDHE_AEAD_AES_RULE).unwrap();
    let conn = ctx.new_connection();

    ctx.set_cipher_list("CHACHA20").unwrap();
    ctx.set_ciphersuites("TLS_AES_128_GCM_SHA256").unwrap();

    assert_eq!(
        ids(&conn.ciphers()),
        with_tls13(&[
            TLS13_AES_256_GCM_SHA384,
            TLS13_CHACHA20_POLY1305_SHA256,
            TLS13_AES_128_GCM_SHA256,
        ])
    );
    assert_eq!(ctx.ciphers().len(), 4);
}

#[test]
fn offered_list_on_the_wire() {
    let mut ctx = Context::new();
    ctx.set_ciphersuites(AES256_CHACHA).unwrap();
    ctx.set_cipher_list(ECDHE_AEAD_AES_RULE).unwrap();
    let offered = ctx.new_connection().ciphers();

    let mut bytes = vec![];
    encode_cipher_list(&offered, &mut bytes);
    assert_eq!(
        bytes,
        [
            0x00, 0x0c, 0x13, 0x02, 0x13, 0x03, 0xc0, 0x30, 0xc0, 0x2c, 0xc0, 0x2f, 0xc0, 0x2b,
        ]
    );

    let mut r = Reader::init(&bytes);
    assert_eq!(read_cipher_list(&mut r), Ok(offered));
    assert!(!r.any_left());

    assert_eq!(
        read_cipher_list(&mut Reader::init(&[0x00, 0x01, 0x13])),
        Err(InvalidMessage::OddCipherSuiteListLength)
    );
}
