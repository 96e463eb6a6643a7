//! TDA998x register catalog.
//!
//! Every register is a [`RegAddr`] named `P<page>_<NAME>`, where `<page>` is
//! the physical page number. Registers with a host-side copy carry a
//! [`Slot`]; all others are read from or written to the bus directly.

use crate::tx::types::RegAddr;

/// Logical page indices into [`PAGE_INDEX_TO_PAGE`](crate::tx::helpers::PAGE_INDEX_TO_PAGE).
pub mod page {
    pub const P00: u8 = 0;
    pub const P01: u8 = 1;
    pub const P02: u8 = 2;
    pub const P10: u8 = 3;
    pub const P11: u8 = 4;
    pub const P12: u8 = 5;
}

/// Shadow slot assignments.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    IntFlags0,
    IntFlags1,
    IntFlags2,
    MainCntrl0,
    VipCntrl0,
    VipCntrl1,
    VipCntrl2,
    VipCntrl3,
    VipCntrl4,
    VipCntrl5,
    MatContrl,
    TbgCntrl0,
    TbgCntrl1,
    HvfCntrl0,
    HvfCntrl1,
    TimerH,
    DebugProbe,
    AipClksel,
    ScVidformat,
    ScCntrl,
    Tx4,
    Tx33,
}

/// Number of shadow slots.
pub const SHADOW_COUNT: usize = Slot::Tx33 as usize + 1;

/// Power-on values loaded into the shadow table on unit initialization.
pub const SHADOW_DEFAULTS: [u8; SHADOW_COUNT] = {
    let mut defaults = [0u8; SHADOW_COUNT];
    defaults[Slot::VipCntrl0 as usize] = 0x23;
    defaults[Slot::VipCntrl1 as usize] = 0x45;
    defaults[Slot::VipCntrl2 as usize] = 0x01;
    defaults[Slot::MatContrl as usize] = 0x04;
    defaults[Slot::HvfCntrl1 as usize] = 0x02;
    defaults[Slot::Tx33 as usize] = 0x10;
    defaults
};

macro_rules! registers {
    (@desc $page:ident, $addr:literal) => {
        RegAddr::unshadowed(page::$page, $addr)
    };
    (@desc $page:ident, $addr:literal, $slot:ident) => {
        RegAddr::new(Slot::$slot as u8, page::$page, $addr)
    };
    ($( $(#[$doc:meta])* $page:ident $name:ident = $addr:literal $(=> $slot:ident)? ;)*) => {
        paste::paste! {
            $(
                $(#[$doc])*
                pub const [<$page _ $name>]: RegAddr = registers!(@desc $page, $addr $(, $slot)?);
            )*
        }
    };
}

registers! {
    /// Chip version, low byte.
    P00 VERSION = 0x00;
    P00 MAIN_CNTRL0 = 0x01 => MainCntrl0;
    /// Chip version, high byte.
    P00 VERSION_MSB = 0x02;
    P00 SOFTRESET = 0x0A;
    P00 DDC_DISABLE = 0x0B;
    P00 CCLK_ON = 0x0C;
    P00 I2C_MASTER = 0x0D;
    /// Interrupt status; always read from the bus.
    P00 INT_FLAGS_0 = 0x0F => IntFlags0;
    /// Interrupt status; always read from the bus.
    P00 INT_FLAGS_1 = 0x10 => IntFlags1;
    /// Rx-sense interrupt status, TDA9981 only.
    P00 INT_FLAGS_2 = 0x11 => IntFlags2;
    P00 ENA_VP_0 = 0x18;
    P00 ENA_VP_1 = 0x19;
    P00 ENA_VP_2 = 0x1A;
    P00 ENA_AP = 0x1E;
    P00 VIP_CNTRL_0 = 0x20 => VipCntrl0;
    P00 VIP_CNTRL_1 = 0x21 => VipCntrl1;
    P00 VIP_CNTRL_2 = 0x22 => VipCntrl2;
    P00 VIP_CNTRL_3 = 0x23 => VipCntrl3;
    P00 VIP_CNTRL_4 = 0x24 => VipCntrl4;
    P00 VIP_CNTRL_5 = 0x25 => VipCntrl5;
    P00 MAT_CONTRL = 0x80 => MatContrl;
    /// First of the colour matrix coefficient words.
    P00 MAT_OI1_MSB = 0x81;
    P00 VIDFORMAT = 0xA0;
    P00 REFPIX_MSB = 0xA1;
    P00 REFLINE_MSB = 0xA3;
    P00 NPIX_MSB = 0xA5;
    P00 NLINE_MSB = 0xA7;
    P00 TBG_CNTRL_0 = 0xCA => TbgCntrl0;
    P00 TBG_CNTRL_1 = 0xCB => TbgCntrl1;
    P00 ENC_CNTRL = 0xE1;
    P00 HVF_CNTRL_0 = 0xE4 => HvfCntrl0;
    P00 HVF_CNTRL_1 = 0xE5 => HvfCntrl1;
    P00 TIMER_H = 0xE8 => TimerH;
    P00 DEBUG_PROBE = 0xEF => DebugProbe;
    P00 AIP_CLKSEL = 0xFD => AipClksel;

    P01 SC_VIDFORMAT = 0x00 => ScVidformat;
    P01 SC_CNTRL = 0x01 => ScCntrl;

    P02 PLL_SERIAL_1 = 0x00;
    P02 PLL_SERIAL_2 = 0x01;
    P02 PLL_SERIAL_3 = 0x02;
    P02 SERIALIZER = 0x03;
    P02 BUFFER_OUT = 0x04;
    P02 PLL_SCG1 = 0x05;
    P02 PLL_SCG2 = 0x06;
    P02 PLL_SCGN1 = 0x07;
    P02 PLL_SCGN2 = 0x08;
    P02 PLL_SCGR1 = 0x09;
    P02 PLL_SCGR2 = 0x0A;
    P02 AUDIO_DIV = 0x0E;
    P02 SEL_CLK = 0x11;
    P02 ANA_GENERAL = 0x12;

    /// Start of the first infoframe packet buffer.
    P10 IF1_HB0 = 0x20;
    P10 IF2_HB0 = 0x40;
    P10 IF3_HB0 = 0x60;
    P10 IF4_HB0 = 0x80;
    P10 IF5_HB0 = 0xA0;

    P11 AIP_CNTRL_0 = 0x00;
    P11 CA_I2S = 0x01;
    P11 LATENCY_RD = 0x04;
    P11 ACR_CTS_0 = 0x05;
    P11 ENC_CNTRL = 0x0D;
    P11 DIP_FLAGS = 0x0E;
    P11 DIP_IF_FLAGS = 0x0F;

    P12 TX3 = 0x9A;
    P12 TX4 = 0x9B => Tx4;
    P12 TX33 = 0xB8 => Tx33;
}

/// Field masks within catalog registers.
pub mod field {
    /// `P00_MAIN_CNTRL0`
    pub const MAIN_CNTRL0_SR: u8 = 0x01;
    pub const MAIN_CNTRL0_DECS: u8 = 0x02;
    pub const MAIN_CNTRL0_DEHS: u8 = 0x04;
    pub const MAIN_CNTRL0_CECS: u8 = 0x08;
    pub const MAIN_CNTRL0_CEHS: u8 = 0x10;
    pub const MAIN_CNTRL0_SCALER: u8 = 0x80;

    /// `P00_INT_FLAGS_0`
    pub const INT_FLAGS_0_ENCRYPT: u8 = 0x01;
    pub const INT_FLAGS_0_HPD: u8 = 0x02;
    pub const INT_FLAGS_0_T0: u8 = 0x20;
    pub const INT_FLAGS_0_BCAPS: u8 = 0x40;
    pub const INT_FLAGS_0_R0: u8 = 0x80;

    /// `P00_INT_FLAGS_2`
    pub const INT_FLAGS_2_RX_SENSE: u8 = 0x01;

    /// `P00_VIP_CNTRL_0`
    pub const VIP_CNTRL_0_SWAP_A: u8 = 0x70;
    pub const VIP_CNTRL_0_SWAP_B: u8 = 0x07;

    /// `P00_TBG_CNTRL_1`
    pub const TBG_CNTRL_1_H_TGL: u8 = 0x01;
    pub const TBG_CNTRL_1_V_TGL: u8 = 0x02;
    pub const TBG_CNTRL_1_TGL_EN: u8 = 0x04;
    pub const TBG_CNTRL_1_DWIN_DIS: u8 = 0x40;

    /// `P00_HVF_CNTRL_1`
    pub const HVF_CNTRL_1_FOR: u8 = 0x01;
    pub const HVF_CNTRL_1_YUVBLK: u8 = 0x02;
    pub const HVF_CNTRL_1_VQR: u8 = 0x0C;
    pub const HVF_CNTRL_1_PAD: u8 = 0x30;

    /// `P02_SEL_CLK`
    pub const SEL_CLK_SEL_CLK1: u8 = 0x01;
    pub const SEL_CLK_SEL_VRF_CLK: u8 = 0x06;
    pub const SEL_CLK_ENA_SC_CLK: u8 = 0x08;
}
