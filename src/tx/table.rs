use crate::tx::error::TxError;

/// Host-side copies of shadow-capable registers.
///
/// Alongside the values the table remembers which slots hold a value that
/// the bus never acknowledged: a write updates the slot first and the bus
/// second, so a failed bus write leaves a stale slot behind.
pub(crate) struct ShadowTable<const SN: usize>
where
    bitmaps::BitsImpl<SN>: bitmaps::Bits,
{
    bytes: [u8; SN],
    stale: bitmaps::Bitmap<SN>,
}

impl<const SN: usize> ShadowTable<SN>
where
    bitmaps::BitsImpl<SN>: bitmaps::Bits,
{
    pub(crate) fn new(defaults: [u8; SN]) -> Self {
        Self {
            bytes: defaults,
            stale: bitmaps::Bitmap::new(),
        }
    }

    pub(crate) fn get(&self, slot: u8) -> Result<u8, TxError> {
        self.bytes
            .get(slot as usize)
            .copied()
            .ok_or(TxError::BadParameter)
    }

    pub(crate) fn set(&mut self, slot: u8, value: u8) -> Result<(), TxError> {
        let byte = self
            .bytes
            .get_mut(slot as usize)
            .ok_or(TxError::BadParameter)?;
        *byte = value;
        Ok(())
    }

    /// Records the bus outcome of the last write to `slot`.
    pub(crate) fn settle(&mut self, slot: u8, acknowledged: bool) {
        if (slot as usize) < SN {
            self.stale.set(slot as usize, !acknowledged);
        }
    }

    pub(crate) fn is_stale(&self, slot: u8) -> bool {
        (slot as usize) < SN && self.stale.get(slot as usize)
    }

    pub(crate) fn any_stale(&self) -> bool {
        !self.stale.is_empty()
    }

    pub(crate) fn iter_stale<F>(&self, mut f: F)
    where
        F: FnMut(u8, u8),
    {
        let mut idx = self.stale.first_index();
        while let Some(slot) = idx {
            f(slot as u8, self.bytes[slot]);
            idx = self.stale.next_index(slot);
        }
    }
}
