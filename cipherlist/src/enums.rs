#![allow(non_camel_case_types)]

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        /// SSL 3.0; also the floor for suites usable with TLS1.0 and TLS1.1.
        SSLv3 => 0x0300,
        /// TLS 1.0
        TLSv1_0 => 0x0301,
        /// TLS 1.1
        TLSv1_1 => 0x0302,
        /// TLS 1.2
        TLSv1_2 => 0x0303,
        /// TLS 1.3
        TLSv1_3 => 0x0304,
    }
}

enum_builder! {
    /// The `CipherSuite` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// Naming a value here does not mean it is selectable: the signalling
    /// values and the TLS1.3 CCM suites have no entry in
    /// [`ALL_CIPHER_SUITES`](crate::ALL_CIPHER_SUITES).
    #[repr(u16)]
    pub enum CipherSuite {
        /// The `TLS_RSA_WITH_NULL_MD5` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_NULL_MD5 => 0x0001,

        /// The `TLS_RSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_NULL_SHA => 0x0002,

        /// The `TLS_RSA_WITH_RC4_128_MD5` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_RC4_128_MD5 => 0x0004,

        /// The `TLS_RSA_WITH_RC4_128_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_RC4_128_SHA => 0x0005,

        /// The `TLS_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_3DES_EDE_CBC_SHA => 0x000a,

        /// The `TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA => 0x0016,

        /// The `TLS_DH_anon_WITH_RC4_128_MD5` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_RC4_128_MD5 => 0x0018,

        /// The `TLS_DH_anon_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_3DES_EDE_CBC_SHA => 0x001b,

        /// The `TLS_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_128_CBC_SHA => 0x002f,

        /// The `TLS_DHE_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA => 0x0033,

        /// The `TLS_DH_anon_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_128_CBC_SHA => 0x0034,

        /// The `TLS_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_256_CBC_SHA => 0x0035,

        /// The `TLS_DHE_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA => 0x0039,

        /// The `TLS_DH_anon_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_256_CBC_SHA => 0x003a,

        /// The `TLS_RSA_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_NULL_SHA256 => 0x003b,

        /// The `TLS_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_128_CBC_SHA256 => 0x003c,

        /// The `TLS_RSA_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_256_CBC_SHA256 => 0x003d,

        /// The `TLS_RSA_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_128_CBC_SHA => 0x0041,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA => 0x0045,

        /// The `TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA => 0x0046,

        /// The `TLS_DHE_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA256 => 0x0067,

        /// The `TLS_DHE_RSA_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA256 => 0x006b,

        /// The `TLS_DH_anon_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_128_CBC_SHA256 => 0x006c,

        /// The `TLS_DH_anon_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_256_CBC_SHA256 => 0x006d,

        /// The `TLS_RSA_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_256_CBC_SHA => 0x0084,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA => 0x0088,

        /// The `TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA => 0x0089,

        /// The `TLS_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_RSA_WITH_AES_128_GCM_SHA256 => 0x009c,

        /// The `TLS_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_RSA_WITH_AES_256_GCM_SHA384 => 0x009d,

        /// The `TLS_DHE_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 => 0x009e,

        /// The `TLS_DHE_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_RSA_WITH_AES_256_GCM_SHA384 => 0x009f,

        /// The `TLS_DH_anon_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_anon_WITH_AES_128_GCM_SHA256 => 0x00a6,

        /// The `TLS_DH_anon_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_anon_WITH_AES_256_GCM_SHA384 => 0x00a7,

        /// The `TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0x00ba,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0x00be,

        /// The `TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c0,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c4,

        /// The `TLS_EMPTY_RENEGOTIATION_INFO_SCSV` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5746>
        TLS_EMPTY_RENEGOTIATION_INFO_SCSV => 0x00ff,

        /// The `TLS_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_GCM_SHA256 => 0x1301,

        /// The `TLS_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_256_GCM_SHA384 => 0x1302,

        /// The `TLS_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_CHACHA20_POLY1305_SHA256 => 0x1303,

        /// The `TLS_AES_128_CCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_CCM_SHA256 => 0x1304,

        /// The `TLS_AES_128_CCM_8_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_CCM_8_SHA256 => 0x1305,

        /// The `TLS_FALLBACK_SCSV` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7507>
        TLS_FALLBACK_SCSV => 0x5600,

        /// The `TLS_ECDHE_ECDSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_NULL_SHA => 0xc006,

        /// The `TLS_ECDHE_ECDSA_WITH_RC4_128_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_RC4_128_SHA => 0xc007,

        /// The `TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA => 0xc008,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA => 0xc009,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA => 0xc00a,

        /// The `TLS_ECDHE_RSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_NULL_SHA => 0xc010,

        /// The `TLS_ECDHE_RSA_WITH_RC4_128_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_RC4_128_SHA => 0xc011,

        /// The `TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA => 0xc012,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA => 0xc013,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA => 0xc014,

        /// The `TLS_ECDH_anon_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_NULL_SHA => 0xc015,

        /// The `TLS_ECDH_anon_WITH_RC4_128_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_RC4_128_SHA => 0xc016,

        /// The `TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA => 0xc017,

        /// The `TLS_ECDH_anon_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_AES_128_CBC_SHA => 0xc018,

        /// The `TLS_ECDH_anon_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_AES_256_CBC_SHA => 0xc019,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256 => 0xc023,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384 => 0xc024,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256 => 0xc027,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384 => 0xc028,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02b,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02c,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => 0xc02f,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => 0xc030,

        /// The `TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 => 0xcca8,

        /// The `TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256 => 0xcca9,

        /// The `TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256 => 0xccaa,
    }
}

impl CipherSuite {
    /// Signalling values carried in a cipher suite vector that do not
    /// name a cipher suite.
    pub fn is_signalling(&self) -> bool {
        matches!(
            self,
            Self::TLS_EMPTY_RENEGOTIATION_INFO_SCSV | Self::TLS_FALLBACK_SCSV
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // These tests are intended to provide coverage and
    // check panic-safety of relatively unused values.

    use std::format;
    use std::prelude::v1::*;

    use super::*;
    use crate::msgs::Codec;

    #[test]
    fn test_enums() {
        test_enum16::<ProtocolVersion>(ProtocolVersion::SSLv3, ProtocolVersion::TLSv1_3);
        test_enum16::<CipherSuite>(
            CipherSuite::TLS_RSA_WITH_NULL_MD5,
            CipherSuite::TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        );
    }

    #[test]
    fn unknown_values_survive() {
        let unknown = CipherSuite::from(0x0a0a);
        assert_eq!(unknown, CipherSuite::Unknown(0x0a0a));
        assert_eq!(unknown.as_str(), None);
        assert_eq!(format!("{unknown:?}"), "CipherSuite(0x0a0a)");
        assert_eq!(unknown.to_array(), [0x0a, 0x0a]);
    }

    #[test]
    fn debug_uses_registry_name() {
        assert_eq!(
            format!("{:?}", CipherSuite::TLS13_AES_256_GCM_SHA384),
            "TLS13_AES_256_GCM_SHA384"
        );
        assert_eq!(format!("{:?}", ProtocolVersion::TLSv1_2), "TLSv1_2");
    }

    #[test]
    fn signalling_values() {
        assert!(CipherSuite::TLS_FALLBACK_SCSV.is_signalling());
        assert!(CipherSuite::TLS_EMPTY_RENEGOTIATION_INFO_SCSV.is_signalling());
        assert!(!CipherSuite::TLS13_AES_128_GCM_SHA256.is_signalling());
    }

    pub(crate) fn test_enum16<T: for<'a> Codec<'a>>(first: T, last: T) {
        let first_v = get16(&first);
        let last_v = get16(&last);

        for val in first_v..last_v + 1 {
            let mut buf = Vec::new();
            val.encode(&mut buf);
            assert_eq!(buf.len(), 2);

            let t = T::read_bytes(&buf).unwrap();
            assert_eq!(val, get16(&t));
        }
    }

    fn get16<T: for<'a> Codec<'a>>(enum_value: &T) -> u16 {
        let enc = enum_value.get_encoding();
        assert_eq!(enc.len(), 2);
        u16::from_be_bytes([enc[0], enc[1]])
    }
}
