// jsonholder-lib: serialization adapter shared by the library API and the CLI

pub mod cli;
pub mod config;
pub mod errors;
pub mod json;
pub mod logger;
pub mod output;

pub use config::HolderConfig;
pub use errors::{JsonHolderError, Result};
pub use json::{Codec, JsonCodec, SerializationAdapter, TypeToken};
