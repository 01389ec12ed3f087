//! The static table of every cipher suite this library knows.

use alloc::vec::Vec;

use crate::enums::{CipherSuite, ProtocolVersion};
use crate::suites::{
    Authentication as Au, BulkAlgorithm as Enc, Era, KeyExchange as Kx, MacAlgorithm as Mac,
    SupportedCipherSuite, LEGACY_ID_PREFIX,
};

const fn legacy(
    suite: CipherSuite,
    name: &'static str,
    standard_name: &'static str,
    kx: Kx,
    auth: Au,
    bulk: Enc,
    mac: Mac,
) -> SupportedCipherSuite {
    SupportedCipherSuite::new(
        suite,
        name,
        standard_name,
        ProtocolVersion::SSLv3,
        kx,
        auth,
        bulk,
        mac,
    )
}

const fn tls12(
    suite: CipherSuite,
    name: &'static str,
    standard_name: &'static str,
    kx: Kx,
    auth: Au,
    bulk: Enc,
    mac: Mac,
) -> SupportedCipherSuite {
    SupportedCipherSuite::new(
        suite,
        name,
        standard_name,
        ProtocolVersion::TLSv1_2,
        kx,
        auth,
        bulk,
        mac,
    )
}

const fn tls13(
    suite: CipherSuite,
    name: &'static str,
    standard_name: &'static str,
    bulk: Enc,
) -> SupportedCipherSuite {
    SupportedCipherSuite::new(
        suite,
        name,
        standard_name,
        ProtocolVersion::TLSv1_3,
        Kx::Any,
        Au::Any,
        bulk,
        Mac::Aead,
    )
}

/// Every cipher suite this library can select, sorted by wire value.
pub static ALL_CIPHER_SUITES: &[SupportedCipherSuite] = &[
    legacy(
        CipherSuite::TLS_RSA_WITH_NULL_MD5,
        "NULL-MD5",
        "TLS_RSA_WITH_NULL_MD5",
        Kx::Rsa,
        Au::Rsa,
        Enc::Null,
        Mac::Md5,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_NULL_SHA,
        "NULL-SHA",
        "TLS_RSA_WITH_NULL_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Null,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_RC4_128_MD5,
        "RC4-MD5",
        "TLS_RSA_WITH_RC4_128_MD5",
        Kx::Rsa,
        Au::Rsa,
        Enc::Rc4,
        Mac::Md5,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_RC4_128_SHA,
        "RC4-SHA",
        "TLS_RSA_WITH_RC4_128_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Rc4,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_3DES_EDE_CBC_SHA,
        "DES-CBC3-SHA",
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA,
        "EDH-RSA-DES-CBC3-SHA",
        "TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA",
        Kx::Dhe,
        Au::Rsa,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_RC4_128_MD5,
        "ADH-RC4-MD5",
        "TLS_DH_anon_WITH_RC4_128_MD5",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Rc4,
        Mac::Md5,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_3DES_EDE_CBC_SHA,
        "ADH-DES-CBC3-SHA",
        "TLS_DH_anon_WITH_3DES_EDE_CBC_SHA",
        Kx::Dhe,
        Au::Anonymous,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA,
        "AES128-SHA",
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DHE_RSA_WITH_AES_128_CBC_SHA,
        "DHE-RSA-AES128-SHA",
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_AES_128_CBC_SHA,
        "ADH-AES128-SHA",
        "TLS_DH_anon_WITH_AES_128_CBC_SHA",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_AES_256_CBC_SHA,
        "AES256-SHA",
        "TLS_RSA_WITH_AES_256_CBC_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DHE_RSA_WITH_AES_256_CBC_SHA,
        "DHE-RSA-AES256-SHA",
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_AES_256_CBC_SHA,
        "ADH-AES256-SHA",
        "TLS_DH_anon_WITH_AES_256_CBC_SHA",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes256,
        Mac::Sha1,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_NULL_SHA256,
        "NULL-SHA256",
        "TLS_RSA_WITH_NULL_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Null,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA256,
        "AES128-SHA256",
        "TLS_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_AES_256_CBC_SHA256,
        "AES256-SHA256",
        "TLS_RSA_WITH_AES_256_CBC_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha256,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_CAMELLIA_128_CBC_SHA,
        "CAMELLIA128-SHA",
        "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Camellia128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA,
        "DHE-RSA-CAMELLIA128-SHA",
        "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA",
        Kx::Dhe,
        Au::Rsa,
        Enc::Camellia128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA,
        "ADH-CAMELLIA128-SHA",
        "TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Camellia128,
        Mac::Sha1,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_AES_128_CBC_SHA256,
        "DHE-RSA-AES128-SHA256",
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_AES_256_CBC_SHA256,
        "DHE-RSA-AES256-SHA256",
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_DH_anon_WITH_AES_128_CBC_SHA256,
        "ADH-AES128-SHA256",
        "TLS_DH_anon_WITH_AES_128_CBC_SHA256",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_DH_anon_WITH_AES_256_CBC_SHA256,
        "ADH-AES256-SHA256",
        "TLS_DH_anon_WITH_AES_256_CBC_SHA256",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes256,
        Mac::Sha256,
    ),
    legacy(
        CipherSuite::TLS_RSA_WITH_CAMELLIA_256_CBC_SHA,
        "CAMELLIA256-SHA",
        "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA",
        Kx::Rsa,
        Au::Rsa,
        Enc::Camellia256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA,
        "DHE-RSA-CAMELLIA256-SHA",
        "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA",
        Kx::Dhe,
        Au::Rsa,
        Enc::Camellia256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA,
        "ADH-CAMELLIA256-SHA",
        "TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Camellia256,
        Mac::Sha1,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_AES_128_GCM_SHA256,
        "AES128-GCM-SHA256",
        "TLS_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes128Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_AES_256_GCM_SHA384,
        "AES256-GCM-SHA384",
        "TLS_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Rsa,
        Au::Rsa,
        Enc::Aes256Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
        "DHE-RSA-AES128-GCM-SHA256",
        "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes128Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_AES_256_GCM_SHA384,
        "DHE-RSA-AES256-GCM-SHA384",
        "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Dhe,
        Au::Rsa,
        Enc::Aes256Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_DH_anon_WITH_AES_128_GCM_SHA256,
        "ADH-AES128-GCM-SHA256",
        "TLS_DH_anon_WITH_AES_128_GCM_SHA256",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes128Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_DH_anon_WITH_AES_256_GCM_SHA384,
        "ADH-AES256-GCM-SHA384",
        "TLS_DH_anon_WITH_AES_256_GCM_SHA384",
        Kx::Dhe,
        Au::Anonymous,
        Enc::Aes256Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256,
        "CAMELLIA128-SHA256",
        "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Camellia128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256,
        "DHE-RSA-CAMELLIA128-SHA256",
        "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Camellia128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256,
        "CAMELLIA256-SHA256",
        "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        Kx::Rsa,
        Au::Rsa,
        Enc::Camellia256,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256,
        "DHE-RSA-CAMELLIA256-SHA256",
        "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Camellia256,
        Mac::Sha256,
    ),
    tls13(CipherSuite::TLS13_AES_128_GCM_SHA256, "AEAD-AES128-GCM-SHA256", "TLS_AES_128_GCM_SHA256", Enc::Aes128Gcm),
    tls13(CipherSuite::TLS13_AES_256_GCM_SHA384, "AEAD-AES256-GCM-SHA384", "TLS_AES_256_GCM_SHA384", Enc::Aes256Gcm),
    tls13(CipherSuite::TLS13_CHACHA20_POLY1305_SHA256, "AEAD-CHACHA20-POLY1305-SHA256", "TLS_CHACHA20_POLY1305_SHA256", Enc::Chacha20Poly1305),
    legacy(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_NULL_SHA,
        "ECDHE-ECDSA-NULL-SHA",
        "TLS_ECDHE_ECDSA_WITH_NULL_SHA",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Null,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_RC4_128_SHA,
        "ECDHE-ECDSA-RC4-SHA",
        "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Rc4,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA,
        "ECDHE-ECDSA-DES-CBC3-SHA",
        "TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
        "ECDHE-ECDSA-AES128-SHA",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
        "ECDHE-ECDSA-AES256-SHA",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_RSA_WITH_NULL_SHA,
        "ECDHE-RSA-NULL-SHA",
        "TLS_ECDHE_RSA_WITH_NULL_SHA",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Null,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_RSA_WITH_RC4_128_SHA,
        "ECDHE-RSA-RC4-SHA",
        "TLS_ECDHE_RSA_WITH_RC4_128_SHA",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Rc4,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA,
        "ECDHE-RSA-DES-CBC3-SHA",
        "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
        "ECDHE-RSA-AES128-SHA",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
        "ECDHE-RSA-AES256-SHA",
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDH_anon_WITH_NULL_SHA,
        "AECDH-NULL-SHA",
        "TLS_ECDH_anon_WITH_NULL_SHA",
        Kx::Ecdhe,
        Au::Anonymous,
        Enc::Null,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDH_anon_WITH_RC4_128_SHA,
        "AECDH-RC4-SHA",
        "TLS_ECDH_anon_WITH_RC4_128_SHA",
        Kx::Ecdhe,
        Au::Anonymous,
        Enc::Rc4,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA,
        "AECDH-DES-CBC3-SHA",
        "TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA",
        Kx::Ecdhe,
        Au::Anonymous,
        Enc::TripleDes,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDH_anon_WITH_AES_128_CBC_SHA,
        "AECDH-AES128-SHA",
        "TLS_ECDH_anon_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe,
        Au::Anonymous,
        Enc::Aes128,
        Mac::Sha1,
    ),
    legacy(
        CipherSuite::TLS_ECDH_anon_WITH_AES_256_CBC_SHA,
        "AECDH-AES256-SHA",
        "TLS_ECDH_anon_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe,
        Au::Anonymous,
        Enc::Aes256,
        Mac::Sha1,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256,
        "ECDHE-ECDSA-AES128-SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384,
        "ECDHE-ECDSA-AES256-SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes256,
        Mac::Sha384,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256,
        "ECDHE-RSA-AES128-SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes128,
        Mac::Sha256,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384,
        "ECDHE-RSA-AES256-SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes256,
        Mac::Sha384,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        "ECDHE-ECDSA-AES128-GCM-SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes128Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        "ECDHE-ECDSA-AES256-GCM-SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Aes256Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        "ECDHE-RSA-AES128-GCM-SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes128Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        "ECDHE-RSA-AES256-GCM-SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Aes256Gcm,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        "ECDHE-RSA-CHACHA20-POLY1305",
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe,
        Au::Rsa,
        Enc::Chacha20Poly1305,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
        "ECDHE-ECDSA-CHACHA20-POLY1305",
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe,
        Au::Ecdsa,
        Enc::Chacha20Poly1305,
        Mac::Aead,
    ),
    tls12(
        CipherSuite::TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        "DHE-RSA-CHACHA20-POLY1305",
        "TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Dhe,
        Au::Rsa,
        Enc::Chacha20Poly1305,
        Mac::Aead,
    ),
];

/// TLS1.3 ciphersuites that are recognised by name but not implemented.
///
/// A ciphersuite list naming one of these is not in error; the name is
/// skipped.
static KNOWN_UNSUPPORTED: &[(&str, &str)] = &[
    ("AEAD-AES128-CCM-SHA256", "TLS_AES_128_CCM_SHA256"),
    ("AEAD-AES128-CCM-8-SHA256", "TLS_AES_128_CCM_8_SHA256"),
];

/// Find a suite by its 32-bit legacy id.
///
/// Ids without the [`LEGACY_ID_PREFIX`] never match.
pub fn by_id(id: u32) -> Option<&'static SupportedCipherSuite> {
    if id & 0xffff_0000 != LEGACY_ID_PREFIX {
        return None;
    }
    by_value(id as u16)
}

/// Find a suite by its 16-bit wire value.
pub fn by_value(value: u16) -> Option<&'static SupportedCipherSuite> {
    ALL_CIPHER_SUITES
        .binary_search_by_key(&value, |suite| suite.value())
        .ok()
        .map(|idx| &ALL_CIPHER_SUITES[idx])
}

/// Find a suite by either of its names.  Names are case sensitive.
pub fn by_name(name: &str) -> Option<&'static SupportedCipherSuite> {
    ALL_CIPHER_SUITES
        .iter()
        .find(|suite| suite.name == name || suite.standard_name == name)
}

/// Find the suite for a wire enumeration, if this library supports it.
pub(crate) fn find(suite: CipherSuite) -> Option<&'static SupportedCipherSuite> {
    by_value(u16::from(suite))
}

/// Whether `name` is a TLS1.3 ciphersuite that is recognised but not
/// supported.
pub fn is_known_unsupported(name: &str) -> bool {
    KNOWN_UNSUPPORTED
        .iter()
        .any(|(short, standard)| *short == name || *standard == name)
}

/// The suites governed by cipher rule strings, in table order.
pub(crate) fn legacy_suites() -> impl Iterator<Item = &'static SupportedCipherSuite> {
    ALL_CIPHER_SUITES
        .iter()
        .filter(|suite| suite.era() == Era::Tls12)
}

/// The implementation default list, in preference order.
///
/// `Some(era)` restricts the list to one era.  `None` gives the TLS1.3
/// defaults followed by the pre-1.3 defaults, which is what a
/// [`crate::Context`] offers before it is configured.
pub fn default_list(era: Option<Era>) -> Vec<&'static SupportedCipherSuite> {
    match era {
        Some(Era::Tls13) => crate::tls13::default_ciphersuites(),
        Some(Era::Tls12) => crate::rules::default_cipher_list(),
        None => {
            let mut list = crate::tls13::default_ciphersuites();
            list.extend(crate::rules::default_cipher_list());
            list
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in ALL_CIPHER_SUITES.windows(2) {
            assert!(pair[0].value() < pair[1].value(), "{:?}", pair[1]);
        }

        let mut names = HashSet::new();
        for suite in ALL_CIPHER_SUITES {
            assert!(names.insert(suite.name()), "{}", suite.name());
            assert!(names.insert(suite.standard_name()), "{}", suite.standard_name());
        }
    }

    #[test]
    fn no_signalling_or_unknown_values() {
        for suite in ALL_CIPHER_SUITES {
            assert!(!suite.suite().is_signalling());
            assert!(suite.suite().as_str().is_some());
        }
    }

    #[test]
    fn lookups_agree() {
        for suite in ALL_CIPHER_SUITES {
            assert_eq!(by_id(suite.id()), Some(suite));
            assert_eq!(by_value(suite.value()), Some(suite));
            assert_eq!(by_name(suite.name()), Some(suite));
            assert_eq!(by_name(suite.standard_name()), Some(suite));
            assert_eq!(find(suite.suite()), Some(suite));
        }
    }

    #[test]
    fn lookups_cover_every_default() {
        for era in [None, Some(Era::Tls12), Some(Era::Tls13)] {
            for suite in default_list(era) {
                assert_eq!(by_id(suite.id()), Some(suite));
                assert_eq!(by_value(suite.value()), Some(suite));
            }
        }
    }

    #[test]
    fn misses_are_none() {
        assert_eq!(by_id(0x0300_0a0a), None);
        assert_eq!(by_id(0x0200_c02f), None);
        assert_eq!(by_id(0x0000_c02f), None);
        assert_eq!(by_value(0x0000), None);
        assert_eq!(by_value(0xffff), None);
        assert_eq!(by_name("ecdhe-rsa-aes128-gcm-sha256"), None);
        assert_eq!(by_name(""), None);
        assert_eq!(find(CipherSuite::TLS_FALLBACK_SCSV), None);
    }

    #[test]
    fn both_naming_conventions() {
        let a = by_name("AEAD-AES256-GCM-SHA384").unwrap();
        let b = by_name("TLS_AES_256_GCM_SHA384").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), 0x1302);
        assert_eq!(a.id(), 0x0300_1302);

        let c = by_name("ECDHE-ECDSA-CHACHA20-POLY1305").unwrap();
        assert_eq!(
            c.standard_name(),
            "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"
        );
    }

    #[test]
    fn unsupported_names() {
        assert!(is_known_unsupported("TLS_AES_128_CCM_SHA256"));
        assert!(is_known_unsupported("AEAD-AES128-CCM-8-SHA256"));
        assert!(!is_known_unsupported("TLS_AES_128_GCM_SHA256"));
        assert!(!is_known_unsupported("TLS_NOT_A_CIPHERSUITE"));
        assert_eq!(by_name("TLS_AES_128_CCM_SHA256"), None);
    }

    #[test]
    fn eras() {
        assert_eq!(legacy_suites().count(), ALL_CIPHER_SUITES.len() - 3);
        assert!(legacy_suites().all(|s| s.version() != ProtocolVersion::TLSv1_3));

        let tls13 = default_list(Some(Era::Tls13));
        let tls12 = default_list(Some(Era::Tls12));
        let all = default_list(None);
        assert_eq!(all.len(), tls13.len() + tls12.len());
        assert_eq!(&all[..3], &tls13[..]);
        assert_eq!(&all[3..], &tls12[..]);
    }
}
