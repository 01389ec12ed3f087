use crate::enums::{CipherSuite, ProtocolVersion};
use crate::suites::{
    Authentication, BulkAlgorithm, KeyExchange, MacAlgorithm, Strength, SupportedCipherSuite,
};
use BulkAlgorithm::*;

/// One attribute test.  A clause matches a suite when every one of its
/// filters does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Filter {
    /// The suite was introduced with exactly this protocol version.
    Version(ProtocolVersion),
    Kx(KeyExchange),
    Auth(Authentication),
    /// Any authentication except anonymous.
    Authenticated,
    Bulk(&'static [BulkAlgorithm]),
    /// Any bulk algorithm except `Null`.
    Encrypted,
    Mac(MacAlgorithm),
    Strength(Strength),
    /// Exactly one suite, named in the rule.
    Suite(CipherSuite),
}

impl Filter {
    pub(crate) fn matches(&self, suite: &SupportedCipherSuite) -> bool {
        match *self {
            Self::Version(v) => suite.version == v,
            Self::Kx(kx) => suite.kx == kx,
            Self::Auth(auth) => suite.auth == auth,
            Self::Authenticated => suite.auth != Authentication::Anonymous,
            Self::Bulk(algs) => algs.contains(&suite.bulk),
            Self::Encrypted => suite.bulk != Null,
            Self::Mac(mac) => suite.mac == mac,
            Self::Strength(strength) => suite.strength == strength,
            Self::Suite(cs) => suite.suite == cs,
        }
    }
}

const AES: &[BulkAlgorithm] = &[Aes128, Aes256, Aes128Gcm, Aes256Gcm];
const AES128: &[BulkAlgorithm] = &[Aes128, Aes128Gcm];
const AES256: &[BulkAlgorithm] = &[Aes256, Aes256Gcm];
const AESGCM: &[BulkAlgorithm] = &[Aes128Gcm, Aes256Gcm];
const CAMELLIA: &[BulkAlgorithm] = &[Camellia128, Camellia256];

/// Rule keywords and the filters they stand for.  Lookup is case
/// sensitive.
static KEYWORDS: &[(&str, &[Filter])] = &[
    // groups
    ("ALL", &[Filter::Encrypted]),
    ("COMPLEMENTOFALL", &[Filter::Bulk(&[Null])]),
    (
        "COMPLEMENTOFDEFAULT",
        &[Filter::Auth(Authentication::Anonymous), Filter::Encrypted],
    ),
    // protocol
    ("SSLv3", &[Filter::Version(ProtocolVersion::SSLv3)]),
    ("TLSv1", &[Filter::Version(ProtocolVersion::SSLv3)]),
    ("TLSv1.2", &[Filter::Version(ProtocolVersion::TLSv1_2)]),
    ("TLSv1.3", &[Filter::Version(ProtocolVersion::TLSv1_3)]),
    // key exchange
    ("kRSA", &[Filter::Kx(KeyExchange::Rsa)]),
    ("RSA", &[Filter::Kx(KeyExchange::Rsa)]),
    ("kDHE", &[Filter::Kx(KeyExchange::Dhe)]),
    ("kEDH", &[Filter::Kx(KeyExchange::Dhe)]),
    ("DH", &[Filter::Kx(KeyExchange::Dhe)]),
    (
        "DHE",
        &[Filter::Kx(KeyExchange::Dhe), Filter::Authenticated],
    ),
    (
        "EDH",
        &[Filter::Kx(KeyExchange::Dhe), Filter::Authenticated],
    ),
    ("kECDHE", &[Filter::Kx(KeyExchange::Ecdhe)]),
    ("kEECDH", &[Filter::Kx(KeyExchange::Ecdhe)]),
    (
        "ECDHE",
        &[Filter::Kx(KeyExchange::Ecdhe), Filter::Authenticated],
    ),
    (
        "EECDH",
        &[Filter::Kx(KeyExchange::Ecdhe), Filter::Authenticated],
    ),
    (
        "ADH",
        &[
            Filter::Kx(KeyExchange::Dhe),
            Filter::Auth(Authentication::Anonymous),
        ],
    ),
    (
        "AECDH",
        &[
            Filter::Kx(KeyExchange::Ecdhe),
            Filter::Auth(Authentication::Anonymous),
        ],
    ),
    // authentication
    ("aRSA", &[Filter::Auth(Authentication::Rsa)]),
    ("aECDSA", &[Filter::Auth(Authentication::Ecdsa)]),
    ("ECDSA", &[Filter::Auth(Authentication::Ecdsa)]),
    ("aNULL", &[Filter::Auth(Authentication::Anonymous)]),
    // encryption
    ("eNULL", &[Filter::Bulk(&[Null])]),
    ("NULL", &[Filter::Bulk(&[Null])]),
    ("RC4", &[Filter::Bulk(&[Rc4])]),
    ("3DES", &[Filter::Bulk(&[TripleDes])]),
    ("AES", &[Filter::Bulk(AES)]),
    ("AES128", &[Filter::Bulk(AES128)]),
    ("AES256", &[Filter::Bulk(AES256)]),
    ("AESGCM", &[Filter::Bulk(AESGCM)]),
    ("CAMELLIA", &[Filter::Bulk(CAMELLIA)]),
    ("CAMELLIA128", &[Filter::Bulk(&[Camellia128])]),
    ("CAMELLIA256", &[Filter::Bulk(&[Camellia256])]),
    ("CHACHA20", &[Filter::Bulk(&[Chacha20Poly1305])]),
    // mac
    ("MD5", &[Filter::Mac(MacAlgorithm::Md5)]),
    ("SHA1", &[Filter::Mac(MacAlgorithm::Sha1)]),
    ("SHA", &[Filter::Mac(MacAlgorithm::Sha1)]),
    ("SHA256", &[Filter::Mac(MacAlgorithm::Sha256)]),
    ("SHA384", &[Filter::Mac(MacAlgorithm::Sha384)]),
    ("AEAD", &[Filter::Mac(MacAlgorithm::Aead)]),
    // strength
    ("HIGH", &[Filter::Strength(Strength::High)]),
    ("MEDIUM", &[Filter::Strength(Strength::Medium)]),
    ("LOW", &[Filter::Strength(Strength::Low)]),
    ("EXPORT", &[Filter::Strength(Strength::Export)]),
    ("EXPORT40", &[Filter::Strength(Strength::Export)]),
    ("EXPORT56", &[Filter::Strength(Strength::Export)]),
];

/// The filters a keyword stands for.
pub(crate) fn alias(word: &str) -> Option<&'static [Filter]> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, filters)| *filters)
}
