/// Synchronous register bus supplied by the surrounding system.
///
/// Every transaction is all-or-nothing: an `Err` means the transfer did not
/// happen, an `Ok` means every byte was transferred.
pub trait Bus {
    /// Transport-specific failure, only ever logged by this crate.
    type Error: core::fmt::Debug;

    /// Reads `buf.len()` consecutive registers starting at `first_reg`.
    fn read(&mut self, slave: u8, first_reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` to consecutive registers starting at `first_reg`.
    fn write(&mut self, slave: u8, first_reg: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    type Error = B::Error;

    fn read(&mut self, slave: u8, first_reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(slave, first_reg, buf)
    }

    fn write(&mut self, slave: u8, first_reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(slave, first_reg, data)
    }
}
