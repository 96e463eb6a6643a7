//! Lookup tables and range checks shared by the register accessor.
//!
//! These are public so that callers building their own field tables can
//! reason about page placement and field alignment the same way the
//! accessor does.

use crate::tx::TxError;

/// Register that selects the active page; present on every page.
pub const CURPAGE_ADDR: u8 = 0xFF;

/// Maps a logical page index to the byte written to [`CURPAGE_ADDR`].
pub const PAGE_INDEX_TO_PAGE: [u8; 6] = [0x00, 0x01, 0x02, 0x10, 0x11, 0x12];

/// Left shift that aligns a right-aligned field value onto each 8-bit mask.
///
/// Masks `0x00` and `0x01` need no shift, `0x02` needs one, `0x0C` needs two.
/// Only meaningful for masks made of one contiguous run of set bits.
pub const MASK_TO_SHIFT: [u8; 256] = mask_to_shift_table();

const fn mask_to_shift_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut mask = 1;
    while mask < 256 {
        table[mask] = (mask as u8).trailing_zeros() as u8;
        mask += 1;
    }
    table
}

/// Resolves a logical page index to its physical page number.
///
/// # Errors
/// * [`TxError::BadParameter`] - if `index` is not in the page table
pub fn physical_page(index: u8) -> Result<u8, TxError> {
    PAGE_INDEX_TO_PAGE
        .get(index as usize)
        .copied()
        .ok_or(TxError::BadParameter)
}

/// Checks that `len` registers starting at `addr` stay on one page.
///
/// The last addressable register before [`CURPAGE_ADDR`] is `0xFE`, so a
/// range may run up to but not including the page-select register.
///
/// # Errors
/// * [`TxError::BadParameter`] - if `len` is 0 or the range overflows the page
///
/// # Example
/// ```
/// use hdmitx_core::tx::helpers::page_span;
///
/// assert!(page_span(0xF0, 0x0F).is_ok());
/// assert!(page_span(0xF0, 0x10).is_err());
/// ```
pub fn page_span(addr: u8, len: usize) -> Result<(), TxError> {
    if len == 0 {
        return Err(TxError::BadParameter);
    }
    if addr as usize + len > CURPAGE_ADDR as usize {
        return Err(TxError::BadParameter);
    }
    Ok(())
}

/// Replaces the bits selected by `mask` in `current` with `value`.
///
/// `value` is shifted onto the mask's lowest set bit and clipped to the mask,
/// so overflow bits are dropped and bits outside the mask are preserved.
///
/// # Example
/// ```
/// use hdmitx_core::tx::helpers::insert_field;
///
/// assert_eq!(insert_field(0xF0, 0x0F, 0x3), 0xF3);
/// assert_eq!(insert_field(0xF0, 0xF0, 0x3), 0x30);
/// ```
pub fn insert_field(current: u8, mask: u8, value: u8) -> u8 {
    let cleared = current & !mask;
    let shifted = value.wrapping_shl(MASK_TO_SHIFT[mask as usize] as u32) & mask;
    cleared | shifted
}

#[test]
fn mask_to_shift_known_rows() {
    assert_eq!(MASK_TO_SHIFT[0x00], 0);
    assert_eq!(MASK_TO_SHIFT[0x01], 0);
    assert_eq!(MASK_TO_SHIFT[0x02], 1);
    assert_eq!(MASK_TO_SHIFT[0x03], 0);
    assert_eq!(MASK_TO_SHIFT[0x04], 2);
    assert_eq!(MASK_TO_SHIFT[0x0C], 2);
    assert_eq!(MASK_TO_SHIFT[0x30], 4);
    assert_eq!(MASK_TO_SHIFT[0x60], 5);
    assert_eq!(MASK_TO_SHIFT[0xC0], 6);
    assert_eq!(MASK_TO_SHIFT[0x80], 7);
    assert_eq!(MASK_TO_SHIFT[0xFF], 0);
}

#[test]
fn page_span_edge_cases() {
    // Zero length
    assert_eq!(page_span(0x00, 0), Err(TxError::BadParameter));

    // Whole page below the page-select register
    assert_eq!(page_span(0x00, 0xFF), Ok(()));

    // Touches the page-select register
    assert_eq!(page_span(0x01, 0xFF), Err(TxError::BadParameter));
    assert_eq!(page_span(0xFE, 2), Err(TxError::BadParameter));

    // Last register
    assert_eq!(page_span(0xFE, 1), Ok(()));
}

#[test]
fn physical_page_lookup() {
    assert_eq!(physical_page(0), Ok(0x00));
    assert_eq!(physical_page(3), Ok(0x10));
    assert_eq!(physical_page(5), Ok(0x12));
    assert_eq!(physical_page(6), Err(TxError::BadParameter));
}

#[test]
fn insert_field_preserves_unmasked_bits() {
    assert_eq!(insert_field(0xF0, 0x0F, 0x3), 0xF3);
    assert_eq!(insert_field(0xF0, 0xF0, 0x3), 0x30);
    assert_eq!(insert_field(0x0F, 0xF0, 0x3), 0x3F);
    assert_eq!(insert_field(0xA5, 0x18, 0x2), 0xB5);

    // Overflow bits beyond the mask are discarded
    assert_eq!(insert_field(0x00, 0x0C, 0xFF), 0x0C);
    assert_eq!(insert_field(0xFF, 0x01, 0x02), 0xFE);
}
