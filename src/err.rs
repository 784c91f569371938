#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrmError {
    /// Operation invoked on a chip generation this layer does not drive.
    #[error("unsupported chip generation")]
    InvalidChip,
    /// The hardreset line is already deasserted; no register was written.
    #[error("hardreset line already deasserted")]
    AlreadyDeasserted,
    /// Hardware did not acknowledge the operation within its wait budget.
    #[error("timed out waiting for hardware acknowledge")]
    Timeout,
    /// Encoded module offset carried a base selector matching no region.
    #[error("unknown PRCM base region {0:#x}")]
    UnknownBase(u8),
}
