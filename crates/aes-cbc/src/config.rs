//! Runtime configuration for the CBC layer.

/// How strictly the trailing padding run is validated on decryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingCheck {
    /// Only require the final byte to lie in `1..=16`.
    #[default]
    LastByte,
    /// Additionally require every padding byte to equal the padding length.
    Strict,
}

/// Configuration for [`crate::Cbc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CbcConfig {
    /// Padding validation applied after decryption.
    pub padding: PaddingCheck,
}

impl CbcConfig {
    /// Configuration with [`PaddingCheck::Strict`].
    pub fn strict() -> Self {
        Self {
            padding: PaddingCheck::Strict,
        }
    }
}
