/// Errors returned by register accesses and unit lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    /// Unit handle is outside the registry.
    BadUnitNumber,
    /// Unit slot exists but has not been initialized.
    NotInitialized,
    /// Range, length or page index rejected before any bus traffic.
    BadParameter,
    /// Bus read transaction failed.
    I2cRead,
    /// Bus write transaction failed.
    I2cWrite,
}

impl core::fmt::Display for TxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TxError::BadUnitNumber => write!(f, "unit number out of range"),
            TxError::NotInitialized => write!(f, "unit not initialized"),
            TxError::BadParameter => write!(f, "bad parameter"),
            TxError::I2cRead => write!(f, "bus read failed"),
            TxError::I2cWrite => write!(f, "bus write failed"),
        }
    }
}
