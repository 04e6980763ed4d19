pub mod codec;

pub use codec::TimeCodec;
