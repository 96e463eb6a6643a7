//! Cable-connection and HDCP authentication state machine.
//!
//! The machine only tracks protocol progress. Callers detect hot-plug, EDID
//! and HDCP milestones from interrupt flags and feed them in as [`Event`]s;
//! key validation and SHA-1 checks happen elsewhere and arrive here as
//! pass/fail events.
//!
//! Main path, ignoring the shared Deinit/Unplugged/Standby exits:
//!
//! ```text
//! Disconnected ─PluggedIn─▶ AwaitEdid ─GetBlockData─▶ SinkConnected
//!                                                       │      ▲
//!                                                 SetInOut  OutDisable
//!                                                       ▼      │
//!                                                     VideoNoHdcp
//!                                                       │      ▲
//!                                                   HdcpRun  HdcpStop
//!                                                       ▼      │
//! HdcpAuthenticated ◀─BksvNonRepeater─────────────── HdcpWaitRx
//!        ▲                                              │
//!    KsvSecure                                    BksvRepeater
//!        │                                              ▼
//!  HdcpWaitSha1 ◀──────────BstatusGood────────── HdcpWaitBstatus
//! ```

/// Connection lifecycle state of one transmitter unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Uninitialized,
    Disconnected,
    AwaitEdid,
    /// Sink gone but cable present; rx-sense capable chips only.
    AwaitRxSense,
    SinkConnected,
    VideoNoHdcp,
    HdcpWaitRx,
    HdcpWaitBstatus,
    HdcpWaitSha1,
    HdcpAuthenticated,
    Standby,
    Invalid,
}

impl State {
    /// Rest states where nothing happens until the next plug or resume event.
    pub fn is_quiescent(self) -> bool {
        matches!(self, State::Disconnected | State::Standby)
    }

    /// States in which an HDCP handshake is running or complete.
    pub fn is_hdcp(self) -> bool {
        matches!(
            self,
            State::HdcpWaitRx
                | State::HdcpWaitBstatus
                | State::HdcpWaitSha1
                | State::HdcpAuthenticated
        )
    }
}

/// Externally observed condition driving the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Deinit,
    Unplugged,
    PluggedIn,
    Standby,
    ResumeUnplugged,
    ResumePluggedIn,
    /// An EDID block has been read from the sink.
    GetBlockData,
    SinkOn,
    SinkOff,
    /// Input and output video formats have been configured.
    SetInOut,
    OutDisable,
    HdcpRun,
    BksvNonRepeater,
    BksvRepeater,
    BksvNotSecure,
    /// Link integrity check (T0) failed; restart authentication.
    HdcpTimeout0,
    HdcpStop,
    BstatusGood,
    KsvSecure,
}

/// Next state for chips without rx-sense, or `None` if `event` is ignored.
///
/// Sink on/off events are ignored and [`State::AwaitRxSense`] is a dead end.
pub fn advance(state: State, event: Event) -> Option<State> {
    match state {
        State::AwaitRxSense => None,
        _ => transition(state, event, false),
    }
}

/// Next state for rx-sense capable chips, or `None` if `event` is ignored.
///
/// EDID availability waits for the receiver to sense the sink, and losing
/// the sink from any connected state falls back to [`State::AwaitRxSense`].
pub fn advance_rx_sense(state: State, event: Event) -> Option<State> {
    transition(state, event, true)
}

fn transition(state: State, event: Event, rx_sense: bool) -> Option<State> {
    use Event as E;
    use State as S;

    let next = match (state, event) {
        (S::Invalid, _) => return None,

        (S::Uninitialized, E::Unplugged) => S::Disconnected,
        (S::Uninitialized, E::PluggedIn) => S::AwaitEdid,
        (S::Uninitialized, _) => return None,

        (S::Standby, E::Deinit) => S::Uninitialized,
        (S::Standby, E::ResumeUnplugged) => S::Disconnected,
        (S::Standby, E::ResumePluggedIn) => S::AwaitEdid,
        (S::Standby, _) => return None,

        (S::Disconnected, E::Deinit) => S::Uninitialized,
        (S::Disconnected, E::PluggedIn) => S::AwaitEdid,
        (S::Disconnected, E::Standby) => S::Standby,
        (S::Disconnected, _) => return None,

        // Shared exits of every plugged-in state.
        (_, E::Deinit) => S::Uninitialized,
        (_, E::Unplugged) => S::Disconnected,
        (_, E::Standby) => S::Standby,

        (S::AwaitEdid, E::GetBlockData) if rx_sense => S::AwaitRxSense,
        (S::AwaitEdid, E::GetBlockData) => S::SinkConnected,
        (S::AwaitRxSense, E::SinkOn) => S::SinkConnected,

        (S::SinkConnected, E::SetInOut) => S::VideoNoHdcp,
        (S::VideoNoHdcp, E::OutDisable) => S::SinkConnected,
        (S::VideoNoHdcp, E::HdcpRun) => S::HdcpWaitRx,

        (S::HdcpWaitRx, E::BksvNonRepeater) => S::HdcpAuthenticated,
        (S::HdcpWaitRx, E::BksvRepeater) => S::HdcpWaitBstatus,
        (S::HdcpWaitRx, E::BksvNotSecure) => S::HdcpWaitRx,
        (S::HdcpWaitBstatus, E::BstatusGood) => S::HdcpWaitSha1,
        (S::HdcpWaitSha1, E::KsvSecure) => S::HdcpAuthenticated,

        (s, E::HdcpTimeout0) if s.is_hdcp() => S::HdcpWaitRx,
        (s, E::HdcpStop) if s.is_hdcp() => S::VideoNoHdcp,

        (S::SinkConnected | S::VideoNoHdcp, E::SinkOff) if rx_sense => S::AwaitRxSense,
        (s, E::SinkOff) if rx_sense && s.is_hdcp() => S::AwaitRxSense,

        _ => return None,
    };
    Some(next)
}
