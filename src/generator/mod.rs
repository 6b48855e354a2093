pub mod bitstream;
pub mod data;
pub mod ecc;
pub mod encoder;
pub mod mask;
pub mod qr;

use tracing::debug;

use crate::error::EncodeError;
use data::TOTAL_CODEWORDS;
use ecc::GENERATOR;
pub use mask::MaskScope;
use mask::Masker;
pub use qr::SymbolMatrix;
use qr::QRCode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag {
    pub mask_scope: MaskScope,
}

impl Flag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mask_scope(mut self, mask_scope: MaskScope) -> Self {
        self.mask_scope = mask_scope;
        self
    }
}

/// Runs a message through encoding, error correction, masking and placement.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    flag: Flag,
}

impl Generator {
    pub fn new(flag: Flag) -> Self {
        Self { flag }
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// Data codewords followed by their ECC codewords.
    pub fn codewords(&self, message: &[u8]) -> Result<[u8; TOTAL_CODEWORDS], EncodeError> {
        let block = encoder::encode(message)?;
        debug!(?block, "encoded codeword block");

        let ecc = ecc::remainder(&block, &GENERATOR);
        debug!(?ecc, "computed ecc block");

        Ok(ecc::full_codeword(&block, &ecc))
    }

    pub fn generate(&self, message: &[u8]) -> Result<SymbolMatrix, EncodeError> {
        let span = tracing::debug_span!("generate", len = message.len());
        let _enter = span.enter();

        let codewords = self.codewords(message)?;
        let masker = Masker::new(self.flag.mask_scope, message.len());
        let matrix = QRCode::new(&codewords, &masker).finish();

        debug!(
            dark = matrix.rows().flatten().filter(|&&m| m).count(),
            "symbol complete"
        );
        Ok(matrix)
    }
}

/// Encodes `message` with the default [`Flag`].
pub fn generate(message: &[u8]) -> Result<SymbolMatrix, EncodeError> {
    Generator::default().generate(message)
}
