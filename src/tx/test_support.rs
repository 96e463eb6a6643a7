//! Test support utilities - only compiled in test builds.

use heapless::Vec;

use crate::tx::{
    bus::Bus,
    builder::UnitConfig,
    device::Device,
    helpers::{CURPAGE_ADDR, PAGE_INDEX_TO_PAGE},
    variant::Variant,
};

pub const TEST_ADDRESS: u8 = 0x70;

/// One recorded bus transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Txn {
    Read {
        slave: u8,
        first_reg: u8,
        len: usize,
    },
    Write {
        slave: u8,
        first_reg: u8,
        data: Vec<u8, 8>,
    },
}

impl Txn {
    pub fn is_page_select(&self) -> bool {
        matches!(self, Txn::Write { first_reg, .. } if *first_reg == CURPAGE_ADDR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Chip model behind a recording bus.
///
/// Holds register contents per physical page and follows page-select writes
/// the way the real device does. Failures can be injected per direction.
#[derive(Debug)]
pub struct MockBus {
    pub log: Vec<Txn, 64>,
    pub memory: [[u8; 256]; 6],
    pub page: u8,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_page_select: bool,
    /// Fail data writes whose first register is this address.
    pub fail_write_to: Option<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            memory: [[0; 256]; 6],
            page: 0,
            fail_reads: false,
            fail_writes: false,
            fail_page_select: false,
            fail_write_to: None,
        }
    }

    fn page_index(page: u8) -> usize {
        PAGE_INDEX_TO_PAGE
            .iter()
            .position(|p| *p == page)
            .expect("mock bus selected an unknown page")
    }

    /// Register value on a physical page.
    pub fn peek(&self, page: u8, addr: u8) -> u8 {
        self.memory[Self::page_index(page)][addr as usize]
    }

    pub fn poke(&mut self, page: u8, addr: u8, value: u8) {
        self.memory[Self::page_index(page)][addr as usize] = value;
    }

    pub fn page_selects(&self) -> usize {
        self.log.iter().filter(|t| t.is_page_select()).count()
    }

    pub fn data_txns(&self) -> usize {
        self.log.iter().filter(|t| !t.is_page_select()).count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MockBus {
    type Error = MockBusError;

    fn read(&mut self, slave: u8, first_reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let _ = self.log.push(Txn::Read {
            slave,
            first_reg,
            len: buf.len(),
        });
        if self.fail_reads {
            return Err(MockBusError);
        }
        let page = &self.memory[Self::page_index(self.page)];
        let start = first_reg as usize;
        buf.copy_from_slice(&page[start..start + buf.len()]);
        Ok(())
    }

    fn write(&mut self, slave: u8, first_reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut recorded = Vec::new();
        let _ = recorded.extend_from_slice(&data[..data.len().min(8)]);
        let _ = self.log.push(Txn::Write {
            slave,
            first_reg,
            data: recorded,
        });

        if first_reg == CURPAGE_ADDR {
            if self.fail_page_select || self.fail_writes {
                return Err(MockBusError);
            }
            self.page = data[0];
            return Ok(());
        }

        if self.fail_writes || self.fail_write_to == Some(first_reg) {
            return Err(MockBusError);
        }
        let page = &mut self.memory[Self::page_index(self.page)];
        let start = first_reg as usize;
        page[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }
}

pub fn test_config(variant: Variant) -> UnitConfig {
    UnitConfig::builder()
        .bus_address(TEST_ADDRESS)
        .variant(variant)
        .build()
}

/// Device on a borrowed mock bus so tests can inspect the bus afterwards.
pub fn test_device(bus: &mut MockBus) -> Device<&mut MockBus> {
    Device::new(bus, &test_config(Variant::Tda9983))
}

pub fn write_txn(first_reg: u8, data: &[u8]) -> Txn {
    let mut recorded = Vec::new();
    recorded.extend_from_slice(data).unwrap();
    Txn::Write {
        slave: TEST_ADDRESS,
        first_reg,
        data: recorded,
    }
}

pub fn read_txn(first_reg: u8, len: usize) -> Txn {
    Txn::Read {
        slave: TEST_ADDRESS,
        first_reg,
        len,
    }
}
