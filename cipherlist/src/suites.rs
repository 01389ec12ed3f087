use alloc::vec::Vec;
use core::fmt;

use crate::enums::{CipherSuite, ProtocolVersion};
use crate::msgs::Codec;

/// The fixed prefix of the 32-bit legacy cipher id.  The low 16 bits
/// are the wire value.
pub const LEGACY_ID_PREFIX: u32 = 0x0300_0000;

/// Number of bytes a cipher suite occupies on the wire.
pub const CIPHER_SUITE_WIRE_LEN: usize = 2;

/// How the premaster secret is agreed.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyExchange {
    /// RSA key transport, no forward secrecy.
    Rsa,
    /// Finite-field ephemeral Diffie-Hellman.
    Dhe,
    /// Elliptic-curve ephemeral Diffie-Hellman.
    Ecdhe,
    /// Not fixed by the suite (TLS1.3).
    Any,
}

/// How the server proves its identity.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authentication {
    /// RSA signatures or key transport.
    Rsa,
    /// ECDSA signatures.
    Ecdsa,
    /// No authentication at all.
    Anonymous,
    /// Not fixed by the suite (TLS1.3).
    Any,
}

/// The bulk encryption algorithm.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkAlgorithm {
    /// No encryption.
    Null,
    /// RC4 with a 128-bit key.
    Rc4,
    /// Triple DES in EDE-CBC mode.
    TripleDes,
    /// AES-128 in CBC mode.
    Aes128,
    /// AES-256 in CBC mode.
    Aes256,
    /// AES-128 in GCM mode.
    Aes128Gcm,
    /// AES-256 in GCM mode.
    Aes256Gcm,
    /// Camellia-128 in CBC mode.
    Camellia128,
    /// Camellia-256 in CBC mode.
    Camellia256,
    /// ChaCha20 with Poly1305.
    Chacha20Poly1305,
}

impl BulkAlgorithm {
    /// Bits of security, and bits of key, for this algorithm.
    const fn bits(self) -> (u16, u16) {
        match self {
            Self::Null => (0, 0),
            Self::TripleDes => (112, 168),
            Self::Rc4 | Self::Aes128 | Self::Aes128Gcm | Self::Camellia128 => (128, 128),
            Self::Aes256 | Self::Aes256Gcm | Self::Camellia256 | Self::Chacha20Poly1305 => {
                (256, 256)
            }
        }
    }

    const fn strength(self) -> Strength {
        match self {
            Self::Null => Strength::None,
            Self::Rc4 => Strength::Low,
            Self::TripleDes => Strength::Medium,
            _ => Strength::High,
        }
    }
}

/// The record MAC, or `Aead` where the cipher authenticates itself.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MacAlgorithm {
    /// HMAC-MD5
    Md5,
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// No separate MAC: the bulk algorithm is an AEAD.
    Aead,
}

/// Coarse strength class used by the `HIGH`, `MEDIUM` and `LOW` rule
/// keywords.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    /// No confidentiality.
    None,
    /// Export-grade.  No suite in [`crate::ALL_CIPHER_SUITES`] has this class;
    /// it exists so that rules such as `!EXPORT` keep parsing.
    Export,
    /// Weak ciphers such as RC4.
    Low,
    /// Triple DES.
    Medium,
    /// 128 bits of security or more.
    High,
}

/// Which configuration call governs a suite.
///
/// TLS1.3 suites are chosen with a ciphersuite name list; everything
/// else is chosen with a cipher rule string.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Era {
    /// Suites usable with TLS1.2 and earlier.
    Tls12,
    /// TLS1.3 ciphersuites.
    Tls13,
}

/// A cipher suite known to this library.
///
/// All possible instances of this type are provided by the library in
/// the [`crate::ALL_CIPHER_SUITES`] array.  Values are compared by their
/// wire value.
pub struct SupportedCipherSuite {
    pub(crate) suite: CipherSuite,
    pub(crate) name: &'static str,
    pub(crate) standard_name: &'static str,
    pub(crate) version: ProtocolVersion,
    pub(crate) kx: KeyExchange,
    pub(crate) auth: Authentication,
    pub(crate) bulk: BulkAlgorithm,
    pub(crate) mac: MacAlgorithm,
    pub(crate) strength: Strength,
    pub(crate) strength_bits: u16,
    pub(crate) alg_bits: u16,
}

impl SupportedCipherSuite {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        suite: CipherSuite,
        name: &'static str,
        standard_name: &'static str,
        version: ProtocolVersion,
        kx: KeyExchange,
        auth: Authentication,
        bulk: BulkAlgorithm,
        mac: MacAlgorithm,
    ) -> Self {
        let (strength_bits, alg_bits) = bulk.bits();
        Self {
            suite,
            name,
            standard_name,
            version,
            kx,
            auth,
            bulk,
            mac,
            strength: bulk.strength(),
            strength_bits,
            alg_bits,
        }
    }

    /// The TLS enumeration naming this cipher suite.
    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    /// The 16-bit wire value.
    pub fn value(&self) -> u16 {
        u16::from(self.suite)
    }

    /// The 32-bit legacy id: [`LEGACY_ID_PREFIX`] combined with the wire value.
    pub fn id(&self) -> u32 {
        LEGACY_ID_PREFIX | u32::from(self.value())
    }

    /// The short name, e.g. `ECDHE-RSA-AES128-GCM-SHA256` or
    /// `AEAD-AES256-GCM-SHA384`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The IANA name, e.g. `TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256` or
    /// `TLS_AES_256_GCM_SHA384`.
    pub fn standard_name(&self) -> &'static str {
        self.standard_name
    }

    /// The lowest protocol version this suite may be negotiated with.
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Which configuration call governs this suite.
    pub fn era(&self) -> Era {
        match self.version {
            ProtocolVersion::TLSv1_3 => Era::Tls13,
            _ => Era::Tls12,
        }
    }

    /// Key exchange algorithm.
    pub fn kx(&self) -> KeyExchange {
        self.kx
    }

    /// Authentication algorithm.
    pub fn auth(&self) -> Authentication {
        self.auth
    }

    /// Bulk encryption algorithm.
    pub fn bulk(&self) -> BulkAlgorithm {
        self.bulk
    }

    /// The record MAC, or `None` for AEAD suites.
    pub fn mac(&self) -> Option<MacAlgorithm> {
        match self.mac {
            MacAlgorithm::Aead => None,
            mac => Some(mac),
        }
    }

    /// Whether the bulk algorithm is an AEAD.
    pub fn is_aead(&self) -> bool {
        self.mac == MacAlgorithm::Aead
    }

    /// Strength class.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Bits of security offered by the bulk algorithm.
    pub fn strength_bits(&self) -> u16 {
        self.strength_bits
    }

    /// Key size of the bulk algorithm in bits.
    pub fn alg_bits(&self) -> u16 {
        self.alg_bits
    }

    /// Append the two-byte wire encoding of this suite to `bytes`.
    pub fn encode(&self, bytes: &mut Vec<u8>) {
        self.suite.encode(bytes);
    }

    /// The two-byte, big-endian wire encoding of this suite.
    pub fn to_array(&self) -> [u8; CIPHER_SUITE_WIRE_LEN] {
        self.suite.to_array()
    }

    /// Find the suite with the given wire encoding.
    ///
    /// Unknown values, and values that name no selectable suite, yield `None`.
    pub fn from_wire(bytes: [u8; CIPHER_SUITE_WIRE_LEN]) -> Option<&'static Self> {
        crate::registry::by_value(u16::from_be_bytes(bytes))
    }
}

impl PartialEq for SupportedCipherSuite {
    fn eq(&self, other: &Self) -> bool {
        self.suite == other.suite
    }
}

impl Eq for SupportedCipherSuite {}

impl fmt::Debug for SupportedCipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.suite, f)
    }
}
