//! Wire encoding of cipher suites and cipher suite lists.

#[macro_use]
mod macros;

mod cipher_list;
pub use cipher_list::{encode_cipher_list, read_cipher_list};

mod codec;
pub use codec::{Codec, Reader};
