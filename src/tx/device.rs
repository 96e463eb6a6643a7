use crate::tx::{
    TxError,
    builder::UnitConfig,
    bus::Bus,
    helpers::{CURPAGE_ADDR, insert_field, page_span, physical_page},
    regs::SHADOW_COUNT,
    state::{Event, State},
    table::ShadowTable,
    types::{FieldEntry, RegAddr},
    variant::Variant,
};

/// One initialized transmitter unit.
///
/// Owns the bus capability, the page-select cache, the shadow table and the
/// connection state. All accesses go through `&mut self`; callers sharing a
/// unit across contexts must serialize them, for example with
/// [`SharedRegistry`](crate::tx::SharedRegistry).
pub struct Device<B: Bus> {
    bus: B,
    bus_address: u8,
    variant: Variant,
    current_page: Option<u8>,
    shadow: ShadowTable<SHADOW_COUNT>,
    state: State,
    ignored_events: u32,
}

impl<B: Bus> core::fmt::Debug for Device<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Device")
            .field("bus_address", &self.bus_address)
            .field("variant", &self.variant)
            .field("current_page", &self.current_page)
            .field("state", &self.state)
            .field("ignored_events", &self.ignored_events)
            .finish_non_exhaustive()
    }
}

impl<B: Bus> Device<B> {
    pub(crate) fn new(bus: B, config: &UnitConfig) -> Self {
        Self {
            bus,
            bus_address: config.bus_address(),
            variant: config.variant(),
            current_page: None,
            shadow: ShadowTable::new(config.shadow_defaults()),
            state: State::Uninitialized,
            ignored_events: 0,
        }
    }

    pub(crate) fn into_bus(self) -> B {
        self.bus
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn bus_address(&self) -> u8 {
        self.bus_address
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Physical page last selected on the bus, `None` before the first access.
    pub fn current_page(&self) -> Option<u8> {
        self.current_page
    }

    /// Forgets the selected page so the next access reselects it.
    ///
    /// Needed after anything that resets the chip behind the driver's back.
    pub fn invalidate_page(&mut self) {
        self.current_page = None;
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of events that did not apply to the state they arrived in.
    pub fn ignored_events(&self) -> u32 {
        self.ignored_events
    }

    /// Returns true if `reg`'s shadow holds a value the bus rejected.
    pub fn is_shadow_stale(&self, reg: RegAddr) -> bool {
        reg.shadow().is_some_and(|slot| self.shadow.is_stale(slot))
    }

    /// Returns true if any shadow slot holds a value the bus rejected.
    pub fn any_shadow_stale(&self) -> bool {
        self.shadow.any_stale()
    }

    /// Visits each stale shadow slot with its cached value.
    pub fn iter_stale_shadow<F>(&self, f: F)
    where
        F: FnMut(u8, u8),
    {
        self.shadow.iter_stale(f)
    }

    /// Feeds one observed event into the connection state machine.
    ///
    /// Events with no transition from the current state leave it unchanged
    /// and bump [`Device::ignored_events`].
    pub fn advance(&mut self, event: Event) -> State {
        match self.variant.advance(self.state, event) {
            Some(next) => {
                log::trace!(
                    "unit {:#04x}: {:?} --{:?}--> {:?}",
                    self.bus_address,
                    self.state,
                    event,
                    next
                );
                self.state = next;
            }
            None => {
                log::debug!(
                    "unit {:#04x}: {:?} ignored in {:?}",
                    self.bus_address,
                    event,
                    self.state
                );
                self.ignored_events = self.ignored_events.saturating_add(1);
            }
        }
        self.state
    }

    /// Reads one register.
    ///
    /// Shadowed registers are answered from the shadow table without bus
    /// traffic, except for the variant's interrupt status registers.
    pub fn read_register(&mut self, reg: RegAddr) -> Result<u8, TxError> {
        let slot = Self::checked_slot(reg)?;
        if let Some(slot) = slot {
            if !self.variant.always_fresh(reg) {
                return self.shadow.get(slot);
            }
        }

        self.select_page(reg)?;
        let mut value = [0u8; 1];
        self.bus_read(reg.addr(), &mut value)?;
        Ok(value[0])
    }

    /// Reads `out.len()` consecutive registers starting at `reg`.
    ///
    /// The first register must not be shadowed; the rest of the range is
    /// assumed to be unshadowed as well.
    pub fn read_registers(&mut self, reg: RegAddr, out: &mut [u8]) -> Result<(), TxError> {
        Self::check_range(reg, out.len())?;
        self.select_page(reg)?;
        self.bus_read(reg.addr(), out)
    }

    /// Writes one register.
    ///
    /// The shadow copy is updated before the bus write, so a failed write
    /// leaves the shadow ahead of the hardware; the slot is then reported by
    /// [`Device::is_shadow_stale`].
    pub fn write_register(&mut self, reg: RegAddr, value: u8) -> Result<(), TxError> {
        let slot = Self::checked_slot(reg)?;
        self.select_page(reg)?;
        self.store(slot, reg.addr(), value)
    }

    /// Writes `data` to consecutive unshadowed registers starting at `reg`.
    pub fn write_registers(&mut self, reg: RegAddr, data: &[u8]) -> Result<(), TxError> {
        Self::check_range(reg, data.len())?;
        self.select_page(reg)?;
        self.bus_write(reg.addr(), data)
    }

    /// Writes a 16-bit register pair, most significant byte first.
    pub fn write_register_msb_lsb(&mut self, reg: RegAddr, word: u16) -> Result<(), TxError> {
        page_span(reg.addr(), 2)?;
        self.select_page(reg)?;
        self.bus_write(reg.addr(), &word.to_be_bytes())
    }

    /// Replaces the bits selected by `mask` with `value`.
    ///
    /// `value` is right-aligned; it is shifted onto the mask's lowest set bit
    /// and clipped to the mask. `mask` must be one contiguous run of bits.
    pub fn write_register_field(
        &mut self,
        reg: RegAddr,
        mask: u8,
        value: u8,
    ) -> Result<(), TxError> {
        let slot = Self::checked_slot(reg)?;
        self.select_page(reg)?;

        let current = match slot {
            Some(slot) => self.shadow.get(slot)?,
            None => {
                let mut byte = [0u8; 1];
                self.bus_read(reg.addr(), &mut byte)?;
                byte[0]
            }
        };

        self.store(slot, reg.addr(), insert_field(current, mask, value))
    }

    /// Applies field updates in order until [`FieldEntry::END`] or the end of
    /// `table`.
    ///
    /// Stops at the first failure; earlier entries stay applied.
    pub fn write_field_table(&mut self, table: &[FieldEntry]) -> Result<(), TxError> {
        for entry in table.iter().take_while(|entry| !entry.reg.is_end()) {
            self.write_register_field(entry.reg, entry.mask, entry.value)?;
        }
        Ok(())
    }

    fn checked_slot(reg: RegAddr) -> Result<Option<u8>, TxError> {
        match reg.shadow() {
            Some(slot) if slot as usize >= SHADOW_COUNT => Err(TxError::BadParameter),
            slot => Ok(slot),
        }
    }

    fn check_range(reg: RegAddr, len: usize) -> Result<(), TxError> {
        page_span(reg.addr(), len)?;
        if reg.shadow_field() != RegAddr::SHADOW_NONE {
            return Err(TxError::BadParameter);
        }
        Ok(())
    }

    fn select_page(&mut self, reg: RegAddr) -> Result<(), TxError> {
        let page = physical_page(reg.page())?;
        if self.current_page == Some(page) {
            return Ok(());
        }

        if let Err(err) = self.bus.write(self.bus_address, CURPAGE_ADDR, &[page]) {
            log::warn!(
                "unit {:#04x}: page select {:#04x} failed: {:?}",
                self.bus_address,
                page,
                err
            );
            return Err(TxError::I2cWrite);
        }
        log::trace!("unit {:#04x}: page {:#04x} selected", self.bus_address, page);
        self.current_page = Some(page);
        Ok(())
    }

    fn store(&mut self, slot: Option<u8>, addr: u8, value: u8) -> Result<(), TxError> {
        if let Some(slot) = slot {
            self.shadow.set(slot, value)?;
        }
        let result = self.bus_write(addr, &[value]);
        if let Some(slot) = slot {
            self.shadow.settle(slot, result.is_ok());
        }
        result
    }

    fn bus_read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), TxError> {
        self.bus.read(self.bus_address, addr, buf).map_err(|err| {
            log::warn!(
                "unit {:#04x}: read {:#04x}+{} failed: {:?}",
                self.bus_address,
                addr,
                buf.len(),
                err
            );
            TxError::I2cRead
        })
    }

    fn bus_write(&mut self, addr: u8, data: &[u8]) -> Result<(), TxError> {
        self.bus.write(self.bus_address, addr, data).map_err(|err| {
            log::warn!(
                "unit {:#04x}: write {:#04x}+{} failed: {:?}",
                self.bus_address,
                addr,
                data.len(),
                err
            );
            TxError::I2cWrite
        })
    }
}
