//! Encoder for the smallest QR code symbol: version 1 (21x21 modules), error
//! correction level M, byte mode, mask pattern 000.
//!
//! ```
//! let matrix = tinyqr::generate(b"PagedOut!").unwrap();
//! assert_eq!(matrix.size(), 21);
//! assert!(matrix.get(0, 0));
//! ```
//!
//! Messages hold 1 to 14 bytes. Anything else is rejected with
//! [`EncodeError::InvalidLength`] before any other work is done.

pub mod charset;
pub mod error;
pub mod generator;
pub mod render;
pub mod scanner;

pub use charset::Charset;
pub use error::{CharsetError, EncodeError, RenderError, ScanError};
pub use generator::{generate, Flag, Generator, MaskScope, SymbolMatrix};
pub use render::Canvas;
pub use scanner::Scanner;
