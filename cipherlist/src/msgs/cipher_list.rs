use alloc::vec::Vec;

use super::codec::{put_u16, Codec, Reader};
use crate::enums::CipherSuite;
use crate::error::InvalidMessage;
use crate::log::trace;
use crate::suites::{SupportedCipherSuite, CIPHER_SUITE_WIRE_LEN};

/// Append `suites` to `bytes` as a u16-length-prefixed vector, the way
/// a ClientHello carries its offered cipher suites.
pub fn encode_cipher_list(suites: &[&SupportedCipherSuite], bytes: &mut Vec<u8>) {
    let len_offset = bytes.len();
    bytes.extend_from_slice(&[0, 0]);

    for suite in suites {
        suite.encode(bytes);
    }

    let len = bytes.len() - len_offset - 2;
    debug_assert!(len <= 0xffff);
    put_u16(len as u16, &mut bytes[len_offset..]);
}

/// Read a u16-length-prefixed cipher suite vector.
///
/// Signalling values and suites this library does not know are
/// skipped; the remaining suites keep their on-the-wire order.  A
/// vector whose length is not a multiple of two is rejected.
pub fn read_cipher_list(
    r: &mut Reader<'_>,
) -> Result<Vec<&'static SupportedCipherSuite>, InvalidMessage> {
    let len = usize::from(u16::read(r)?);
    if len % CIPHER_SUITE_WIRE_LEN != 0 {
        return Err(InvalidMessage::OddCipherSuiteListLength);
    }

    let mut sub = r.sub(len)?;
    let mut ret = Vec::with_capacity(len / CIPHER_SUITE_WIRE_LEN);
    while sub.any_left() {
        let suite = CipherSuite::read(&mut sub)?;
        if suite.is_signalling() {
            trace!("skipping signalling cipher suite {suite:?}");
            continue;
        }

        match crate::registry::find(suite) {
            Some(known) => ret.push(known),
            None => trace!("skipping unknown cipher suite {suite:?}"),
        }
    }

    Ok(ret)
}
