#![allow(dead_code)]

use cipherlist::{by_id, SupportedCipherSuite};

pub const TLS13_AES_128_GCM_SHA256: u32 = 0x0300_1301;
pub const TLS13_AES_256_GCM_SHA384: u32 = 0x0300_1302;
pub const TLS13_CHACHA20_POLY1305_SHA256: u32 = 0x0300_1303;

pub const ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u32 = 0x0300_c02b;
pub const ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u32 = 0x0300_c02c;
pub const ECDHE_RSA_WITH_AES_128_GCM_SHA256: u32 = 0x0300_c02f;
pub const ECDHE_RSA_WITH_AES_256_GCM_SHA384: u32 = 0x0300_c030;

pub const ECDHE_AEAD_AES_RULE: &str = "TLSv1.2+ECDHE+AEAD+AES";

/// Legacy ids of `list`, in order.
pub fn ids(list: &[&SupportedCipherSuite]) -> Vec<u32> {
    list.iter().map(|suite| suite.id()).collect()
}

/// The suites with the given legacy ids.  Panics on an unknown id.
pub fn suites(ids: &[u32]) -> Vec<&'static SupportedCipherSuite> {
    ids.iter()
        .map(|id| by_id(*id).unwrap_or_else(|| panic!("no suite with id {id:#x}")))
        .collect()
}

/// Send this crate's logs to the test output, honouring `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
