use crate::tx::{TxError, builder::UnitConfig, bus::Bus, device::Device, state::Event};

/// Fixed-capacity set of transmitter units.
///
/// Unit handles are indices `0..UNITS`. A slot is either empty (not
/// initialized) or holds a [`Device`] that owns its bus capability.
///
/// # Const Generics
/// - `UNITS`: Number of unit slots
pub struct Registry<B: Bus, const UNITS: usize> {
    units: [Option<Device<B>>; UNITS],
}

impl<B: Bus, const UNITS: usize> core::fmt::Debug for Registry<B, UNITS> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("units", &self.units)
            .finish()
    }
}

impl<B: Bus, const UNITS: usize> Default for Registry<B, UNITS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus, const UNITS: usize> Registry<B, UNITS> {
    pub fn new() -> Self {
        Self {
            units: core::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        UNITS
    }

    /// Returns true if `unit` is in range and initialized.
    pub fn is_initialized(&self, unit: usize) -> bool {
        matches!(self.units.get(unit), Some(Some(_)))
    }

    /// Initializes `unit` with its bus and settings.
    ///
    /// The unit starts with no page selected, shadow slots holding the
    /// configured defaults, the connection state at
    /// [`State::Uninitialized`](crate::tx::State::Uninitialized) and no
    /// ignored events.
    ///
    /// # Errors
    /// * [`TxError::BadUnitNumber`] - if `unit` is out of range
    /// * [`TxError::BadParameter`] - if `unit` is already initialized
    pub fn init_unit(
        &mut self,
        unit: usize,
        bus: B,
        config: &UnitConfig,
    ) -> Result<&mut Device<B>, TxError> {
        let slot = self.units.get_mut(unit).ok_or(TxError::BadUnitNumber)?;
        if slot.is_some() {
            return Err(TxError::BadParameter);
        }
        log::debug!(
            "unit {} initialized at {:#04x} as {:?}",
            unit,
            config.bus_address(),
            config.variant()
        );
        Ok(slot.insert(Device::new(bus, config)))
    }

    /// Tears down `unit` and hands its bus capability back.
    ///
    /// The connection state goes through [`Event::Deinit`]; the next
    /// [`Registry::init_unit`] starts from scratch.
    ///
    /// # Errors
    /// * [`TxError::BadUnitNumber`] - if `unit` is out of range
    /// * [`TxError::NotInitialized`] - if `unit` is not initialized
    pub fn deinit_unit(&mut self, unit: usize) -> Result<B, TxError> {
        let slot = self.units.get_mut(unit).ok_or(TxError::BadUnitNumber)?;
        let mut device = slot.take().ok_or(TxError::NotInitialized)?;
        device.advance(Event::Deinit);
        log::debug!(
            "unit {} deinitialized after {} ignored events",
            unit,
            device.ignored_events()
        );
        Ok(device.into_bus())
    }

    /// Resolves a unit handle to its device for one operation.
    ///
    /// # Errors
    /// * [`TxError::BadUnitNumber`] - if `unit` is out of range
    /// * [`TxError::NotInitialized`] - if `unit` is not initialized
    pub fn resolve_unit(&mut self, unit: usize) -> Result<&mut Device<B>, TxError> {
        self.units
            .get_mut(unit)
            .ok_or(TxError::BadUnitNumber)?
            .as_mut()
            .ok_or(TxError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{
        regs::{P00_TBG_CNTRL_0, P00_VERSION},
        state::State,
        test_support::{MockBus, test_config},
        variant::Variant,
    };

    type TestRegistry<'a> = Registry<&'a mut MockBus, 2>;

    #[test]
    fn out_of_range_unit_is_bad_unit_number() {
        let mut bus = MockBus::new();
        let mut registry: TestRegistry = Registry::new();
        let config = test_config(Variant::Tda9983);

        assert_eq!(registry.capacity(), 2);
        assert_eq!(registry.resolve_unit(2).unwrap_err(), TxError::BadUnitNumber);
        assert_eq!(registry.resolve_unit(usize::MAX).unwrap_err(), TxError::BadUnitNumber);
        assert_eq!(registry.deinit_unit(2).unwrap_err(), TxError::BadUnitNumber);
        assert_eq!(
            registry.init_unit(2, &mut bus, &config).unwrap_err(),
            TxError::BadUnitNumber
        );
        assert!(!registry.is_initialized(2));
    }

    #[test]
    fn uninitialized_unit_is_not_initialized() {
        let mut registry: TestRegistry = Registry::new();

        assert_eq!(registry.resolve_unit(0).unwrap_err(), TxError::NotInitialized);
        assert_eq!(registry.resolve_unit(1).unwrap_err(), TxError::NotInitialized);
        assert_eq!(registry.deinit_unit(0).unwrap_err(), TxError::NotInitialized);
        assert!(!registry.is_initialized(0));
    }

    #[test]
    fn init_resolve_deinit_cycle() {
        let mut bus = MockBus::new();
        bus.poke(0x00, 0x00, 0x83);
        let mut registry: TestRegistry = Registry::new();
        let config = test_config(Variant::Tda9983);

        registry.init_unit(1, &mut bus, &config).unwrap();
        assert!(registry.is_initialized(1));
        assert!(!registry.is_initialized(0));

        let dev = registry.resolve_unit(1).unwrap();
        assert_eq!(dev.read_register(P00_VERSION), Ok(0x83));
        dev.write_register(P00_TBG_CNTRL_0, 0x42).unwrap();
        dev.advance(Event::PluggedIn);
        dev.advance(Event::HdcpStop);
        assert_eq!(dev.state(), State::AwaitEdid);
        assert_eq!(dev.ignored_events(), 1);

        let bus = registry.deinit_unit(1).unwrap();
        assert_eq!(bus.peek(0x00, 0xCA), 0x42);
        assert_eq!(registry.resolve_unit(1).unwrap_err(), TxError::NotInitialized);

        // Re-initialization starts from a clean instance
        let dev = registry.init_unit(1, bus, &config).unwrap();
        assert_eq!(dev.state(), State::Uninitialized);
        assert_eq!(dev.ignored_events(), 0);
        assert_eq!(dev.current_page(), None);
        assert_eq!(dev.read_register(P00_TBG_CNTRL_0), Ok(0x00));
    }

    #[test]
    fn double_init_is_rejected() {
        let mut first = MockBus::new();
        let mut second = MockBus::new();
        let mut registry: TestRegistry = Registry::new();
        let config = test_config(Variant::Tda9983);

        registry.init_unit(0, &mut first, &config).unwrap();
        assert_eq!(
            registry.init_unit(0, &mut second, &config).unwrap_err(),
            TxError::BadParameter
        );
    }

    #[test]
    fn units_are_independent() {
        let mut bus0 = MockBus::new();
        let mut bus1 = MockBus::new();
        let mut registry: TestRegistry = Registry::new();

        registry
            .init_unit(0, &mut bus0, &test_config(Variant::Tda9983))
            .unwrap();
        registry
            .init_unit(1, &mut bus1, &test_config(Variant::Tda9981 { rx_sense: true }))
            .unwrap();

        registry.resolve_unit(0).unwrap().advance(Event::Unplugged);
        registry.resolve_unit(1).unwrap().advance(Event::PluggedIn);

        assert_eq!(registry.resolve_unit(0).unwrap().state(), State::Disconnected);
        assert_eq!(registry.resolve_unit(1).unwrap().state(), State::AwaitEdid);
        assert!(registry.resolve_unit(1).unwrap().variant().rx_sense());
    }
}
