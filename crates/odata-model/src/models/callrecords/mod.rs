// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `microsoft.graph.callRecords` namespace.

mod device_info;
mod media_stream;

pub use device_info::DeviceInfo;
pub use media_stream::MediaStream;

use crate::model_enum;

model_enum! {
    pub enum MediaStreamDirection {
        CallerToCallee => "callerToCallee",
        CalleeToCaller => "calleeToCaller",
    }
}

model_enum! {
    pub enum AudioCodec {
        Unknown => "unknown",
        Invalid => "invalid",
        Cn => "cn",
        Pcma => "pcma",
        Pcmu => "pcmu",
        AmrWide => "amrWide",
        G722 => "g722",
        G7221 => "g7221",
        G7221c => "g7221c",
        G729 => "g729",
        MultiChannelAudio => "multiChannelAudio",
        Muchv2 => "muchv2",
        Opus => "opus",
        Satin => "satin",
        SatinFullband => "satinFullband",
        RtAudio8 => "rtAudio8",
        RtAudio16 => "rtAudio16",
        Silk => "silk",
        SilkNarrow => "silkNarrow",
        SilkWide => "silkWide",
        Siren => "siren",
        XmsRta => "xmsRta",
        UnknownFutureValue => "unknownFutureValue",
    }
}
