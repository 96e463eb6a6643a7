use core::marker::PhantomData;

use crate::tx::{
    TxError,
    regs::{SHADOW_COUNT, SHADOW_DEFAULTS},
    types::RegAddr,
    variant::Variant,
};

/// Bus address of the TDA998x HDMI core with its address pins low.
pub const DEFAULT_BUS_ADDRESS: u8 = 0x70;

/// Per-unit settings applied by [`Registry::init_unit`](crate::tx::Registry::init_unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConfig {
    bus_address: u8,
    variant: Variant,
    shadow_defaults: [u8; SHADOW_COUNT],
}

impl UnitConfig {
    pub fn builder() -> UnitConfigBuilder<NeedBusAddress> {
        UnitConfigBuilder {
            variant: Variant::default(),
            shadow_defaults: SHADOW_DEFAULTS,
            bus_address: 0,
            _state: PhantomData,
        }
    }

    pub fn bus_address(&self) -> u8 {
        self.bus_address
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub(crate) fn shadow_defaults(&self) -> [u8; SHADOW_COUNT] {
        self.shadow_defaults
    }
}

// Builder states
pub struct NeedBusAddress;
pub struct Ready;

pub struct UnitConfigBuilder<State> {
    bus_address: u8,
    variant: Variant,
    shadow_defaults: [u8; SHADOW_COUNT],
    _state: PhantomData<State>,
}

impl UnitConfigBuilder<NeedBusAddress> {
    pub fn bus_address(self, bus_address: u8) -> UnitConfigBuilder<Ready> {
        UnitConfigBuilder {
            bus_address,
            variant: self.variant,
            shadow_defaults: self.shadow_defaults,
            _state: PhantomData,
        }
    }

    /// Use [`DEFAULT_BUS_ADDRESS`].
    pub fn default_bus_address(self) -> UnitConfigBuilder<Ready> {
        self.bus_address(DEFAULT_BUS_ADDRESS)
    }
}

impl<State> UnitConfigBuilder<State> {
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Overrides the value loaded into `reg`'s shadow slot at initialization.
    ///
    /// # Errors
    /// * [`TxError::BadParameter`] - if `reg` has no shadow slot
    pub fn shadow_default(mut self, reg: RegAddr, value: u8) -> Result<Self, TxError> {
        let slot = reg.shadow().ok_or(TxError::BadParameter)?;
        let byte = self
            .shadow_defaults
            .get_mut(slot as usize)
            .ok_or(TxError::BadParameter)?;
        *byte = value;
        Ok(self)
    }
}

impl UnitConfigBuilder<Ready> {
    pub fn build(self) -> UnitConfig {
        UnitConfig {
            bus_address: self.bus_address,
            variant: self.variant,
            shadow_defaults: self.shadow_defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::regs::{P00_VERSION, P00_VIP_CNTRL_0, Slot};

    #[test]
    fn builder_defaults() {
        let config = UnitConfig::builder().default_bus_address().build();
        assert_eq!(config.bus_address(), DEFAULT_BUS_ADDRESS);
        assert_eq!(config.variant(), Variant::Tda9983);
        assert_eq!(config.shadow_defaults(), SHADOW_DEFAULTS);
    }

    #[test]
    fn builder_overrides() {
        let config = UnitConfig::builder()
            .variant(Variant::Tda9981 { rx_sense: true })
            .bus_address(0x72)
            .shadow_default(P00_VIP_CNTRL_0, 0x01)
            .unwrap()
            .build();

        assert_eq!(config.bus_address(), 0x72);
        assert!(config.variant().rx_sense());
        assert_eq!(config.shadow_defaults()[Slot::VipCntrl0 as usize], 0x01);
    }

    #[test]
    fn shadow_default_rejects_unshadowed_register() {
        let result = UnitConfig::builder().shadow_default(P00_VERSION, 0x00);
        assert!(matches!(result, Err(TxError::BadParameter)));
    }
}
