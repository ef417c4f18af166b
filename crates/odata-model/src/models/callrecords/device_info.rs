// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model, ODATA_TYPE_KEY};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::store::{new_backing_store, BackingStore};
use crate::value::AdditionalData;

/// Audio device health for one call endpoint.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    store: Box<dyn BackingStore>,
}

impl DeviceInfo {
    pub fn new() -> Self {
        let mut info = Self {
            store: new_backing_store(),
        };
        info.set_additional_data(AdditionalData::new());
        info
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        capture_device_driver / set_capture_device_driver: String = "captureDeviceDriver";
        capture_device_name / set_capture_device_name: String = "captureDeviceName";
        capture_not_functioning_event_ratio / set_capture_not_functioning_event_ratio: f32 = "captureNotFunctioningEventRatio";
        // Misspelled on the service side.
        cpu_insufficent_event_ratio / set_cpu_insufficent_event_ratio: f32 = "cpuInsufficentEventRatio";
        device_clipping_event_ratio / set_device_clipping_event_ratio: f32 = "deviceClippingEventRatio";
        device_glitch_event_ratio / set_device_glitch_event_ratio: f32 = "deviceGlitchEventRatio";
        howling_event_count / set_howling_event_count: i32 = "howlingEventCount";
        initial_signal_level_root_mean_square / set_initial_signal_level_root_mean_square: f32 = "initialSignalLevelRootMeanSquare";
        low_speech_level_event_ratio / set_low_speech_level_event_ratio: f32 = "lowSpeechLevelEventRatio";
        low_speech_to_noise_event_ratio / set_low_speech_to_noise_event_ratio: f32 = "lowSpeechToNoiseEventRatio";
        /// Glitches per 5 minutes.
        mic_glitch_rate / set_mic_glitch_rate: f32 = "micGlitchRate";
        /// dB.
        received_noise_level / set_received_noise_level: i32 = "receivedNoiseLevel";
        received_signal_level / set_received_signal_level: i32 = "receivedSignalLevel";
        render_device_driver / set_render_device_driver: String = "renderDeviceDriver";
        render_device_name / set_render_device_name: String = "renderDeviceName";
        render_mute_event_ratio / set_render_mute_event_ratio: f32 = "renderMuteEventRatio";
        render_not_functioning_event_ratio / set_render_not_functioning_event_ratio: f32 = "renderNotFunctioningEventRatio";
        render_zero_volume_event_ratio / set_render_zero_volume_event_ratio: f32 = "renderZeroVolumeEventRatio";
        sent_noise_level / set_sent_noise_level: i32 = "sentNoiseLevel";
        sent_signal_level / set_sent_signal_level: i32 = "sentSignalLevel";
        speaker_glitch_rate / set_speaker_glitch_rate: f32 = "speakerGlitchRate";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::new()
            .scalar("captureDeviceDriver", Self::set_capture_device_driver)
            .scalar("captureDeviceName", Self::set_capture_device_name)
            .scalar("captureNotFunctioningEventRatio", Self::set_capture_not_functioning_event_ratio)
            .scalar("cpuInsufficentEventRatio", Self::set_cpu_insufficent_event_ratio)
            .scalar("deviceClippingEventRatio", Self::set_device_clipping_event_ratio)
            .scalar("deviceGlitchEventRatio", Self::set_device_glitch_event_ratio)
            .scalar("howlingEventCount", Self::set_howling_event_count)
            .scalar("initialSignalLevelRootMeanSquare", Self::set_initial_signal_level_root_mean_square)
            .scalar("lowSpeechLevelEventRatio", Self::set_low_speech_level_event_ratio)
            .scalar("lowSpeechToNoiseEventRatio", Self::set_low_speech_to_noise_event_ratio)
            .scalar("micGlitchRate", Self::set_mic_glitch_rate)
            .scalar(ODATA_TYPE_KEY, Self::set_odata_type)
            .scalar("receivedNoiseLevel", Self::set_received_noise_level)
            .scalar("receivedSignalLevel", Self::set_received_signal_level)
            .scalar("renderDeviceDriver", Self::set_render_device_driver)
            .scalar("renderDeviceName", Self::set_render_device_name)
            .scalar("renderMuteEventRatio", Self::set_render_mute_event_ratio)
            .scalar("renderNotFunctioningEventRatio", Self::set_render_not_functioning_event_ratio)
            .scalar("renderZeroVolumeEventRatio", Self::set_render_zero_volume_event_ratio)
            .scalar("sentNoiseLevel", Self::set_sent_noise_level)
            .scalar("sentSignalLevel", Self::set_sent_signal_level)
            .scalar("speakerGlitchRate", Self::set_speaker_glitch_rate)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        writer.write_string_value("captureDeviceDriver", self.capture_device_driver().as_deref())?;
        writer.write_string_value("captureDeviceName", self.capture_device_name().as_deref())?;
        writer.write_f32_value(
            "captureNotFunctioningEventRatio",
            self.capture_not_functioning_event_ratio(),
        )?;
        writer.write_f32_value("cpuInsufficentEventRatio", self.cpu_insufficent_event_ratio())?;
        writer.write_f32_value("deviceClippingEventRatio", self.device_clipping_event_ratio())?;
        writer.write_f32_value("deviceGlitchEventRatio", self.device_glitch_event_ratio())?;
        writer.write_i32_value("howlingEventCount", self.howling_event_count())?;
        writer.write_f32_value(
            "initialSignalLevelRootMeanSquare",
            self.initial_signal_level_root_mean_square(),
        )?;
        writer.write_f32_value("lowSpeechLevelEventRatio", self.low_speech_level_event_ratio())?;
        writer.write_f32_value("lowSpeechToNoiseEventRatio", self.low_speech_to_noise_event_ratio())?;
        writer.write_f32_value("micGlitchRate", self.mic_glitch_rate())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type().as_deref())?;
        writer.write_i32_value("receivedNoiseLevel", self.received_noise_level())?;
        writer.write_i32_value("receivedSignalLevel", self.received_signal_level())?;
        writer.write_string_value("renderDeviceDriver", self.render_device_driver().as_deref())?;
        writer.write_string_value("renderDeviceName", self.render_device_name().as_deref())?;
        writer.write_f32_value("renderMuteEventRatio", self.render_mute_event_ratio())?;
        writer.write_f32_value(
            "renderNotFunctioningEventRatio",
            self.render_not_functioning_event_ratio(),
        )?;
        writer.write_f32_value("renderZeroVolumeEventRatio", self.render_zero_volume_event_ratio())?;
        writer.write_i32_value("sentNoiseLevel", self.sent_noise_level())?;
        writer.write_i32_value("sentSignalLevel", self.sent_signal_level())?;
        writer.write_f32_value("speakerGlitchRate", self.speaker_glitch_rate())
    }
}

crate::impl_model!(DeviceInfo, store);
