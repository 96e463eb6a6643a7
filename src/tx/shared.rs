use core::cell::RefCell;

use critical_section::Mutex;

use crate::tx::{TxError, bus::Bus, device::Device, registry::Registry};

/// [`Registry`] that can be shared between thread and interrupt context.
///
/// Every access runs inside a critical section, which serializes register
/// traffic and state events per registry. Closures should stay short: they
/// run with interrupts masked on single-core targets.
pub struct SharedRegistry<B: Bus, const UNITS: usize> {
    inner: Mutex<RefCell<Registry<B, UNITS>>>,
}

impl<B: Bus, const UNITS: usize> core::fmt::Debug for SharedRegistry<B, UNITS> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedRegistry").finish_non_exhaustive()
    }
}

impl<B: Bus, const UNITS: usize> SharedRegistry<B, UNITS> {
    pub fn new(registry: Registry<B, UNITS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(registry)),
        }
    }

    /// Runs `f` against the registry itself, for unit setup and teardown.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut Registry<B, UNITS>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Resolves `unit` and runs `f` against its device.
    ///
    /// # Errors
    /// * [`TxError::BadUnitNumber`] - if `unit` is out of range
    /// * [`TxError::NotInitialized`] - if `unit` is not initialized
    /// * any error returned by `f`
    pub fn with_unit<R>(
        &self,
        unit: usize,
        f: impl FnOnce(&mut Device<B>) -> Result<R, TxError>,
    ) -> Result<R, TxError> {
        self.with_registry(|registry| f(registry.resolve_unit(unit)?))
    }

    pub fn into_inner(self) -> Registry<B, UNITS> {
        self.inner.into_inner().into_inner()
    }
}
