//! A `no_std`, no-alloc register and connection-state core for TDA998x HDMI
//! transmitters.
//!
//! The chip exposes several register pages behind one bus address; a page
//! register selects which page the other addresses refer to. Many control
//! registers are write-only, so the driver keeps host-side shadow copies.
//!
//! # Features
//!
//! - **Page-select elision** - the last selected page is cached per unit
//! - **Shadow registers** - reads of shadowed registers never touch the bus
//! - **Bitfield updates** - read-modify-write with mask alignment, plus ordered field tables
//! - **Connection state machine** - hot-plug, EDID and HDCP authentication progress
//! - **Chip variants** - TDA9983 and TDA9981 with optional rx-sense tracking
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐  resolve_unit   ┌──────────────────────────────┐
//! │   Registry     │────────────────▶│  Device                      │
//! │ [Option; N]    │                 │  current_page  shadow table  │
//! └────────────────┘                 │  state         ignored count │
//!                                    └───────┬──────────────────────┘
//!                                            │ page select + data
//!                                            ▼
//!                                    ┌──────────────┐
//!                                    │  impl Bus    │
//!                                    └──────────────┘
//! ```
//!
//! - **Page cache** is updated only after the page-select write succeeds
//! - **Shadow copy** is updated before the data write; a failed write leaves
//!   the slot marked stale
//! - **State events** never touch the bus
//!
//! # Example
//!
//! ```rust,no_run
//! use hdmitx_core::prelude::*;
//! use hdmitx_core::tx::regs::{P00_TBG_CNTRL_1, P00_VERSION, field};
//!
//! struct I2c;
//!
//! impl Bus for I2c {
//!     type Error = ();
//!
//!     fn read(&mut self, _slave: u8, _first_reg: u8, buf: &mut [u8]) -> Result<(), ()> {
//!         buf.fill(0);
//!         Ok(())
//!     }
//!
//!     fn write(&mut self, _slave: u8, _first_reg: u8, _data: &[u8]) -> Result<(), ()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut registry: Registry<I2c, 1> = Registry::new();
//! let config = UnitConfig::builder()
//!     .default_bus_address()
//!     .variant(Variant::Tda9981 { rx_sense: true })
//!     .build();
//!
//! registry.init_unit(0, I2c, &config)?;
//!
//! let tx = registry.resolve_unit(0)?;
//! let _version = tx.read_register(P00_VERSION)?;
//! tx.write_register_field(P00_TBG_CNTRL_1, field::TBG_CNTRL_1_DWIN_DIS, 1)?;
//!
//! tx.advance(Event::PluggedIn);
//! tx.advance(Event::GetBlockData);
//! assert_eq!(tx.state(), State::AwaitRxSense);
//! # Ok::<(), TxError>(())
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod tx;

pub mod prelude {
    pub use crate::tx::prelude::*;
}
