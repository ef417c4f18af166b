// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{AudioCodec, MediaStreamDirection};
use crate::duration::IsoDuration;
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;
use chrono::{DateTime, FixedOffset};

/// Quality metrics of one direction of one media stream.
///
/// Rates and ratios are `f32` fractions; jitter and round-trip figures are
/// ISO-8601 durations.
#[derive(Debug, Clone)]
pub struct MediaStream {
    store: Box<dyn BackingStore>,
}

impl MediaStream {
    pub fn new() -> Self {
        let mut stream = Self {
            store: new_backing_store(),
        };
        stream.set_additional_data(AdditionalData::new());
        stream
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        audio_codec / set_audio_codec: AudioCodec = "audioCodec";
        average_audio_degradation / set_average_audio_degradation: f32 = "averageAudioDegradation";
        average_audio_network_jitter / set_average_audio_network_jitter: IsoDuration = "averageAudioNetworkJitter";
        /// Bits per second.
        average_bandwidth_estimate / set_average_bandwidth_estimate: i64 = "averageBandwidthEstimate";
        average_freeze_duration / set_average_freeze_duration: IsoDuration = "averageFreezeDuration";
        average_jitter / set_average_jitter: IsoDuration = "averageJitter";
        average_packet_loss_rate / set_average_packet_loss_rate: f32 = "averagePacketLossRate";
        average_ratio_of_concealed_samples / set_average_ratio_of_concealed_samples: f32 = "averageRatioOfConcealedSamples";
        average_received_frame_rate / set_average_received_frame_rate: f32 = "averageReceivedFrameRate";
        average_round_trip_time / set_average_round_trip_time: IsoDuration = "averageRoundTripTime";
        average_video_frame_loss_percentage / set_average_video_frame_loss_percentage: f32 = "averageVideoFrameLossPercentage";
        average_video_frame_rate / set_average_video_frame_rate: f32 = "averageVideoFrameRate";
        average_video_packet_loss_rate / set_average_video_packet_loss_rate: f32 = "averageVideoPacketLossRate";
        end_date_time / set_end_date_time: DateTime<FixedOffset> = "endDateTime";
        is_audio_forward_error_correction_used / set_is_audio_forward_error_correction_used: bool = "isAudioForwardErrorCorrectionUsed";
        low_frame_rate_ratio / set_low_frame_rate_ratio: f32 = "lowFrameRateRatio";
        low_video_processing_capability_ratio / set_low_video_processing_capability_ratio: f32 = "lowVideoProcessingCapabilityRatio";
        max_audio_network_jitter / set_max_audio_network_jitter: IsoDuration = "maxAudioNetworkJitter";
        max_jitter / set_max_jitter: IsoDuration = "maxJitter";
        max_packet_loss_rate / set_max_packet_loss_rate: f32 = "maxPacketLossRate";
        max_ratio_of_concealed_samples / set_max_ratio_of_concealed_samples: f32 = "maxRatioOfConcealedSamples";
        max_round_trip_time / set_max_round_trip_time: IsoDuration = "maxRoundTripTime";
        /// Packets sent or received.
        packet_utilization / set_packet_utilization: i64 = "packetUtilization";
        post_forward_error_correction_packet_loss_rate / set_post_forward_error_correction_packet_loss_rate: f32 = "postForwardErrorCorrectionPacketLossRate";
        rms_freeze_duration / set_rms_freeze_duration: IsoDuration = "rmsFreezeDuration";
        start_date_time / set_start_date_time: DateTime<FixedOffset> = "startDateTime";
        stream_direction / set_stream_direction: MediaStreamDirection = "streamDirection";
        stream_id / set_stream_id: String = "streamId";
        was_media_bypassed / set_was_media_bypassed: bool = "wasMediaBypassed";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .enumeration("audioCodec", Self::set_audio_codec)
            .scalar("averageAudioDegradation", Self::set_average_audio_degradation)
            .scalar("averageAudioNetworkJitter", Self::set_average_audio_network_jitter)
            .scalar("averageBandwidthEstimate", Self::set_average_bandwidth_estimate)
            .scalar("averageFreezeDuration", Self::set_average_freeze_duration)
            .scalar("averageJitter", Self::set_average_jitter)
            .scalar("averagePacketLossRate", Self::set_average_packet_loss_rate)
            .scalar("averageRatioOfConcealedSamples", Self::set_average_ratio_of_concealed_samples)
            .scalar("averageReceivedFrameRate", Self::set_average_received_frame_rate)
            .scalar("averageRoundTripTime", Self::set_average_round_trip_time)
            .scalar("averageVideoFrameLossPercentage", Self::set_average_video_frame_loss_percentage)
            .scalar("averageVideoFrameRate", Self::set_average_video_frame_rate)
            .scalar("averageVideoPacketLossRate", Self::set_average_video_packet_loss_rate)
            .scalar("endDateTime", Self::set_end_date_time)
            .scalar("isAudioForwardErrorCorrectionUsed", Self::set_is_audio_forward_error_correction_used)
            .scalar("lowFrameRateRatio", Self::set_low_frame_rate_ratio)
            .scalar("lowVideoProcessingCapabilityRatio", Self::set_low_video_processing_capability_ratio)
            .scalar("maxAudioNetworkJitter", Self::set_max_audio_network_jitter)
            .scalar("maxJitter", Self::set_max_jitter)
            .scalar("maxPacketLossRate", Self::set_max_packet_loss_rate)
            .scalar("maxRatioOfConcealedSamples", Self::set_max_ratio_of_concealed_samples)
            .scalar("maxRoundTripTime", Self::set_max_round_trip_time)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
            .scalar("packetUtilization", Self::set_packet_utilization)
            .scalar(
                "postForwardErrorCorrectionPacketLossRate",
                Self::set_post_forward_error_correction_packet_loss_rate,
            )
            .scalar("rmsFreezeDuration", Self::set_rms_freeze_duration)
            .scalar("startDateTime", Self::set_start_date_time)
            .enumeration("streamDirection", Self::set_stream_direction)
            .scalar("streamId", Self::set_stream_id)
            .scalar("wasMediaBypassed", Self::set_was_media_bypassed)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_enum_value("audioCodec", self.audio_codec())?;
        writer.write_f32_value("averageAudioDegradation", self.average_audio_degradation())?;
        writer.write_duration_value("averageAudioNetworkJitter", self.average_audio_network_jitter())?;
        writer.write_i64_value("averageBandwidthEstimate", self.average_bandwidth_estimate())?;
        writer.write_duration_value("averageFreezeDuration", self.average_freeze_duration())?;
        writer.write_duration_value("averageJitter", self.average_jitter())?;
        writer.write_f32_value("averagePacketLossRate", self.average_packet_loss_rate())?;
        writer.write_f32_value(
            "averageRatioOfConcealedSamples",
            self.average_ratio_of_concealed_samples(),
        )?;
        writer.write_f32_value("averageReceivedFrameRate", self.average_received_frame_rate())?;
        writer.write_duration_value("averageRoundTripTime", self.average_round_trip_time())?;
        writer.write_f32_value(
            "averageVideoFrameLossPercentage",
            self.average_video_frame_loss_percentage(),
        )?;
        writer.write_f32_value("averageVideoFrameRate", self.average_video_frame_rate())?;
        writer.write_f32_value("averageVideoPacketLossRate", self.average_video_packet_loss_rate())?;
        writer.write_date_time_value("endDateTime", self.end_date_time())?;
        writer.write_bool_value(
            "isAudioForwardErrorCorrectionUsed",
            self.is_audio_forward_error_correction_used(),
        )?;
        writer.write_f32_value("lowFrameRateRatio", self.low_frame_rate_ratio())?;
        writer.write_f32_value(
            "lowVideoProcessingCapabilityRatio",
            self.low_video_processing_capability_ratio(),
        )?;
        writer.write_duration_value("maxAudioNetworkJitter", self.max_audio_network_jitter())?;
        writer.write_duration_value("maxJitter", self.max_jitter())?;
        writer.write_f32_value("maxPacketLossRate", self.max_packet_loss_rate())?;
        writer.write_f32_value("maxRatioOfConcealedSamples", self.max_ratio_of_concealed_samples())?;
        writer.write_duration_value("maxRoundTripTime", self.max_round_trip_time())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())?;
        writer.write_i64_value("packetUtilization", self.packet_utilization())?;
        writer.write_f32_value(
            "postForwardErrorCorrectionPacketLossRate",
            self.post_forward_error_correction_packet_loss_rate(),
        )?;
        writer.write_duration_value("rmsFreezeDuration", self.rms_freeze_duration())?;
        writer.write_date_time_value("startDateTime", self.start_date_time())?;
        writer.write_enum_value("streamDirection", self.stream_direction())?;
        writer.write_string_value("streamId", self.stream_id().as_deref())?;
        writer.write_bool_value("wasMediaBypassed", self.was_media_bypassed())
    }
}

crate::impl_model!(MediaStream, store);
