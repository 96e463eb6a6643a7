use crate::tx::{
    regs::{P00_INT_FLAGS_0, P00_INT_FLAGS_1, P00_INT_FLAGS_2},
    state::{self, Event, State},
    types::RegAddr,
};

/// Transmitter flavour, chosen once when a unit is initialized.
///
/// The variant decides which interrupt registers bypass the shadow table on
/// reads and which connection state table applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Tda9983,
    /// Adds an rx-sense interrupt register. With `rx_sense` set, loss of the
    /// sink is tracked through [`State::AwaitRxSense`].
    Tda9981 { rx_sense: bool },
}

impl Variant {
    pub const fn rx_sense(self) -> bool {
        matches!(self, Variant::Tda9981 { rx_sense: true })
    }

    /// Returns true if reads of `reg` must always go to the bus.
    pub fn always_fresh(self, reg: RegAddr) -> bool {
        if reg == P00_INT_FLAGS_0 || reg == P00_INT_FLAGS_1 {
            return true;
        }
        matches!(self, Variant::Tda9981 { .. }) && reg == P00_INT_FLAGS_2
    }

    /// Next state for this variant, or `None` if `event` is ignored.
    pub fn advance(self, state: State, event: Event) -> Option<State> {
        if self.rx_sense() {
            state::advance_rx_sense(state, event)
        } else {
            state::advance(state, event)
        }
    }
}
