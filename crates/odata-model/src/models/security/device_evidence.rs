// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{AlertEvidence, DefenderAvStatus, DeviceHealthStatus, DeviceRiskScore, OnboardingStatus};
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};

/// A device seen in an alert, as reported by Defender for Endpoint.
#[derive(Debug, Clone)]
pub struct DeviceEvidence {
    base: AlertEvidence,
}

impl DeviceEvidence {
    pub fn new() -> Self {
        let mut evidence = Self {
            base: AlertEvidence::new(),
        };
        evidence.set_odata_type(Some("#microsoft.graph.security.deviceEvidence".into()));
        evidence
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        azure_ad_device_id / set_azure_ad_device_id: String = "azureAdDeviceId";
        defender_av_status / set_defender_av_status: DefenderAvStatus = "defenderAvStatus";
        device_dns_name / set_device_dns_name: String = "deviceDnsName";
        dns_domain / set_dns_domain: String = "dnsDomain";
        first_seen_date_time / set_first_seen_date_time: DateTime<FixedOffset> = "firstSeenDateTime";
        health_status / set_health_status: DeviceHealthStatus = "healthStatus";
        host_name / set_host_name: String = "hostName";
        ip_interfaces / set_ip_interfaces: Vec<String> = "ipInterfaces";
        last_external_ip_address / set_last_external_ip_address: String = "lastExternalIpAddress";
        last_ip_address / set_last_ip_address: String = "lastIpAddress";
        mde_device_id / set_mde_device_id: String = "mdeDeviceId";
        nt_domain / set_nt_domain: String = "ntDomain";
        onboarding_status / set_onboarding_status: OnboardingStatus = "onboardingStatus";
        os_build / set_os_build: i64 = "osBuild";
        os_platform / set_os_platform: String = "osPlatform";
        rbac_group_id / set_rbac_group_id: i64 = "rbacGroupId";
        rbac_group_name / set_rbac_group_name: String = "rbacGroupName";
        risk_score / set_risk_score: DeviceRiskScore = "riskScore";
        version / set_version: String = "version";
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(AlertEvidence::field_deserializers(), |m| &mut m.base)
            .scalar("azureAdDeviceId", Self::set_azure_ad_device_id)
            .enumeration("defenderAvStatus", Self::set_defender_av_status)
            .scalar("deviceDnsName", Self::set_device_dns_name)
            .scalar("dnsDomain", Self::set_dns_domain)
            .scalar("firstSeenDateTime", Self::set_first_seen_date_time)
            .enumeration("healthStatus", Self::set_health_status)
            .scalar("hostName", Self::set_host_name)
            .primitives("ipInterfaces", Self::set_ip_interfaces)
            .scalar("lastExternalIpAddress", Self::set_last_external_ip_address)
            .scalar("lastIpAddress", Self::set_last_ip_address)
            .scalar("mdeDeviceId", Self::set_mde_device_id)
            .scalar("ntDomain", Self::set_nt_domain)
            .enumeration("onboardingStatus", Self::set_onboarding_status)
            .scalar("osBuild", Self::set_os_build)
            .scalar("osPlatform", Self::set_os_platform)
            .scalar("rbacGroupId", Self::set_rbac_group_id)
            .scalar("rbacGroupName", Self::set_rbac_group_name)
            .enumeration("riskScore", Self::set_risk_score)
            .scalar("version", Self::set_version)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("azureAdDeviceId", self.azure_ad_device_id().as_deref())?;
        writer.write_enum_value("defenderAvStatus", self.defender_av_status())?;
        writer.write_string_value("deviceDnsName", self.device_dns_name().as_deref())?;
        writer.write_string_value("dnsDomain", self.dns_domain().as_deref())?;
        writer.write_date_time_value("firstSeenDateTime", self.first_seen_date_time())?;
        writer.write_enum_value("healthStatus", self.health_status())?;
        writer.write_string_value("hostName", self.host_name().as_deref())?;
        writer.write_collection_of_string_values("ipInterfaces", self.ip_interfaces().as_deref())?;
        writer.write_string_value("lastExternalIpAddress", self.last_external_ip_address().as_deref())?;
        writer.write_string_value("lastIpAddress", self.last_ip_address().as_deref())?;
        writer.write_string_value("mdeDeviceId", self.mde_device_id().as_deref())?;
        writer.write_string_value("ntDomain", self.nt_domain().as_deref())?;
        writer.write_enum_value("onboardingStatus", self.onboarding_status())?;
        writer.write_i64_value("osBuild", self.os_build())?;
        writer.write_string_value("osPlatform", self.os_platform().as_deref())?;
        writer.write_i64_value("rbacGroupId", self.rbac_group_id())?;
        writer.write_string_value("rbacGroupName", self.rbac_group_name().as_deref())?;
        writer.write_enum_value("riskScore", self.risk_score())?;
        writer.write_string_value("version", self.version().as_deref())
    }
}

crate::impl_model!(DeviceEvidence, base = base: AlertEvidence);
