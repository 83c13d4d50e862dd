pub mod codec;
pub mod error;
pub mod layout;
pub mod locate;
pub mod record;
pub mod session;
mod stream;

pub use codec::{decode, decode_path, encode, encode_path};
pub use error::{ReadError, WriteError};
pub use layout::{ByteRange, Field, HEADER_LEN_REQUIRED};
pub use record::SaveRecord;
pub use session::Session;
