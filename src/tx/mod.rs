pub mod builder;
pub mod bus;
pub mod device;
pub mod error;
pub mod helpers;
pub mod regs;
pub mod registry;
pub mod shared;
pub mod state;
pub(crate) mod table;
pub mod types;
pub mod variant;

#[cfg(test)]
mod test_support;

pub use builder::{DEFAULT_BUS_ADDRESS, UnitConfig, UnitConfigBuilder};
pub use bus::Bus;
pub use device::Device;
pub use error::TxError;
pub use registry::Registry;
pub use shared::SharedRegistry;
pub use state::{Event, State};
pub use types::{FieldEntry, RegAddr};
pub use variant::Variant;

pub mod prelude {
    pub use super::{
        Bus, DEFAULT_BUS_ADDRESS, Device, Event, FieldEntry, RegAddr, Registry, SharedRegistry,
        State, TxError, UnitConfig, UnitConfigBuilder, Variant,
    };
}
