/// Packed register descriptor: shadow slot, logical page and in-page address.
///
/// ```text
///  15      11 10   8 7             0
/// ┌──────────┬──────┬───────────────┐
/// │  shadow  │ page │    address    │
/// └──────────┴──────┴───────────────┘
/// ```
///
/// A shadow field of [`RegAddr::SHADOW_NONE`] marks a register without a
/// host-side copy. The raw value `0` is reserved as the field-table
/// terminator and never names a real register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegAddr(u16);

impl RegAddr {
    /// Shadow field value for registers that are not shadowed.
    pub const SHADOW_NONE: u8 = 0x1F;

    /// Field-table terminator.
    pub const END: RegAddr = RegAddr(0);

    const SHADOW_SHIFT: u16 = 11;
    const PAGE_SHIFT: u16 = 8;
    const SHADOW_MASK: u16 = 0x1F;
    const PAGE_MASK: u16 = 0x07;

    /// Packs a descriptor. Out-of-range `shadow` or `page` bits are truncated.
    pub const fn new(shadow: u8, page: u8, addr: u8) -> Self {
        Self(
            ((shadow as u16 & Self::SHADOW_MASK) << Self::SHADOW_SHIFT)
                | ((page as u16 & Self::PAGE_MASK) << Self::PAGE_SHIFT)
                | addr as u16,
        )
    }

    /// Packs a descriptor for a register without a shadow copy.
    pub const fn unshadowed(page: u8, addr: u8) -> Self {
        Self::new(Self::SHADOW_NONE, page, addr)
    }

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Raw shadow field, [`RegAddr::SHADOW_NONE`] included.
    pub const fn shadow_field(self) -> u8 {
        ((self.0 >> Self::SHADOW_SHIFT) & Self::SHADOW_MASK) as u8
    }

    /// Shadow slot index, or `None` if the register is not shadowed.
    pub const fn shadow(self) -> Option<u8> {
        match self.shadow_field() {
            Self::SHADOW_NONE => None,
            slot => Some(slot),
        }
    }

    /// Logical page index into the page table.
    pub const fn page(self) -> u8 {
        ((self.0 >> Self::PAGE_SHIFT) & Self::PAGE_MASK) as u8
    }

    /// Address within the page.
    pub const fn addr(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn is_end(self) -> bool {
        self.0 == Self::END.0
    }
}

/// One entry of a batch configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEntry {
    pub reg: RegAddr,
    /// Contiguous run of set bits selecting the field.
    pub mask: u8,
    /// Field value, right-aligned.
    pub value: u8,
}

impl FieldEntry {
    pub const fn new(reg: RegAddr, mask: u8, value: u8) -> Self {
        Self { reg, mask, value }
    }

    /// Terminator entry; iteration stops here even if the slice continues.
    pub const END: FieldEntry = FieldEntry::new(RegAddr::END, 0, 0);
}
