//! Offset recovery for an affine 3x3 cipher
//!
//! Ciphertext vectors are `forward * (c, rand1, rand2) + r` for a plaintext
//! character `c`. Given the public matrix and a few known characters this
//! crate brute-forces `r` and decodes the rest of the message.

pub mod args;
pub mod dataset;
pub mod decrypt;
pub mod linalg;
pub mod logging;
pub mod oracle;
pub mod reporters;
pub mod samples;
pub mod search;

pub use args::parse_args;
pub use decrypt::{decode_message, DecodeMode, GridBounds};
pub use linalg::{LinalgError, Matrix3, Vector3};
pub use search::{SearchConfig, SearchError};
