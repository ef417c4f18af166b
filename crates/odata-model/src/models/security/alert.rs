// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{
    AlertClassification, AlertComment, AlertDetermination, AlertEvidence, AlertSeverity,
    AlertStatus, DetectionSource,
};
use crate::error::WriteError;
use crate::model::{construct, FieldDeserializers, Model};
use crate::models::Entity;
use crate::serialization::{ParseNode, SerializationWriter};
use chrono::{DateTime, FixedOffset};

/// Potential security issue raised by a Microsoft 365 Defender product.
#[derive(Debug, Clone)]
pub struct Alert {
    base: Entity,
}

impl Alert {
    pub fn new() -> Self {
        let mut alert = Self { base: Entity::new() };
        alert.set_odata_type(Some("#microsoft.graph.security.alert".into()));
        alert
    }

    pub fn create_from_discriminator_value(_node: Option<&dyn ParseNode>) -> Box<dyn Model> {
        construct::<Self>()
    }

    properties! {
        actor_display_name / set_actor_display_name: String = "actorDisplayName";
        alert_policy_id / set_alert_policy_id: String = "alertPolicyId";
        alert_web_url / set_alert_web_url: String = "alertWebUrl";
        /// Owner of the incident, or absent when unassigned.
        assigned_to / set_assigned_to: String = "assignedTo";
        category / set_category: String = "category";
        classification / set_classification: AlertClassification = "classification";
        created_date_time / set_created_date_time: DateTime<FixedOffset> = "createdDateTime";
        description / set_description: String = "description";
        detection_source / set_detection_source: DetectionSource = "detectionSource";
        detector_id / set_detector_id: String = "detectorId";
        determination / set_determination: AlertDetermination = "determination";
        first_activity_date_time / set_first_activity_date_time: DateTime<FixedOffset> = "firstActivityDateTime";
        incident_id / set_incident_id: String = "incidentId";
        incident_web_url / set_incident_web_url: String = "incidentWebUrl";
        last_activity_date_time / set_last_activity_date_time: DateTime<FixedOffset> = "lastActivityDateTime";
        last_update_date_time / set_last_update_date_time: DateTime<FixedOffset> = "lastUpdateDateTime";
        /// MITRE ATT&CK technique ids, e.g. `"T1059.001"`.
        mitre_techniques / set_mitre_techniques: Vec<String> = "mitreTechniques";
        product_name / set_product_name: String = "productName";
        provider_alert_id / set_provider_alert_id: String = "providerAlertId";
        recommended_actions / set_recommended_actions: String = "recommendedActions";
        resolved_date_time / set_resolved_date_time: DateTime<FixedOffset> = "resolvedDateTime";
        severity / set_severity: AlertSeverity = "severity";
        status / set_status: AlertStatus = "status";
        system_tags / set_system_tags: Vec<String> = "systemTags";
        tenant_id / set_tenant_id: String = "tenantId";
        threat_display_name / set_threat_display_name: String = "threatDisplayName";
        threat_family_name / set_threat_family_name: String = "threatFamilyName";
        title / set_title: String = "title";
    }

    /// Analyst comments, in posting order.
    pub fn comments(&self) -> Option<Vec<&AlertComment>> {
        self.backing_store().objects("comments")
    }

    pub fn set_comments(&mut self, value: Option<Vec<AlertComment>>) {
        let boxed = value.map(|comments| {
            comments
                .into_iter()
                .map(|c| Box::new(c) as Box<dyn Model>)
                .collect::<Vec<_>>()
        });
        self.backing_store_mut().put("comments", boxed);
    }

    /// Evidence viewed through the common base type.
    pub fn evidence(&self) -> Option<Vec<&AlertEvidence>> {
        self.backing_store().objects("evidence")
    }

    /// Evidence as stored, for downcasting to the concrete kinds.
    pub fn evidence_models(&self) -> Option<&[Box<dyn Model>]> {
        self.backing_store().models("evidence")
    }

    /// Elements may be any `AlertEvidence` subtype.
    pub fn set_evidence(&mut self, value: Option<Vec<Box<dyn Model>>>) {
        self.backing_store_mut().put("evidence", value);
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::<Self>::extend(Entity::field_deserializers(), |m| &mut m.base)
            .scalar("actorDisplayName", Self::set_actor_display_name)
            .scalar("alertPolicyId", Self::set_alert_policy_id)
            .scalar("alertWebUrl", Self::set_alert_web_url)
            .scalar("assignedTo", Self::set_assigned_to)
            .scalar("category", Self::set_category)
            .enumeration("classification", Self::set_classification)
            .objects(
                "comments",
                AlertComment::create_from_discriminator_value,
                |m, v| m.backing_store_mut().put("comments", v),
            )
            .scalar("createdDateTime", Self::set_created_date_time)
            .scalar("description", Self::set_description)
            .enumeration("detectionSource", Self::set_detection_source)
            .scalar("detectorId", Self::set_detector_id)
            .enumeration("determination", Self::set_determination)
            .objects(
                "evidence",
                AlertEvidence::create_from_discriminator_value,
                Self::set_evidence,
            )
            .scalar("firstActivityDateTime", Self::set_first_activity_date_time)
            .scalar("incidentId", Self::set_incident_id)
            .scalar("incidentWebUrl", Self::set_incident_web_url)
            .scalar("lastActivityDateTime", Self::set_last_activity_date_time)
            .scalar("lastUpdateDateTime", Self::set_last_update_date_time)
            .primitives("mitreTechniques", Self::set_mitre_techniques)
            .scalar("productName", Self::set_product_name)
            .scalar("providerAlertId", Self::set_provider_alert_id)
            .scalar("recommendedActions", Self::set_recommended_actions)
            .scalar("resolvedDateTime", Self::set_resolved_date_time)
            .enumeration("severity", Self::set_severity)
            .enumeration("status", Self::set_status)
            .primitives("systemTags", Self::set_system_tags)
            .scalar("tenantId", Self::set_tenant_id)
            .scalar("threatDisplayName", Self::set_threat_display_name)
            .scalar("threatFamilyName", Self::set_threat_family_name)
            .scalar("title", Self::set_title)
    }

    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), WriteError> {
        self.base.write_properties(writer)?;
        writer.write_string_value("actorDisplayName", self.actor_display_name().as_deref())?;
        writer.write_string_value("alertPolicyId", self.alert_policy_id().as_deref())?;
        writer.write_string_value("alertWebUrl", self.alert_web_url().as_deref())?;
        writer.write_string_value("assignedTo", self.assigned_to().as_deref())?;
        writer.write_string_value("category", self.category().as_deref())?;
        writer.write_enum_value("classification", self.classification())?;
        writer.write_collection_of_object_values("comments", self.backing_store().models("comments"))?;
        writer.write_date_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("description", self.description().as_deref())?;
        writer.write_enum_value("detectionSource", self.detection_source())?;
        writer.write_string_value("detectorId", self.detector_id().as_deref())?;
        writer.write_enum_value("determination", self.determination())?;
        writer.write_collection_of_object_values("evidence", self.evidence_models())?;
        writer.write_date_time_value("firstActivityDateTime", self.first_activity_date_time())?;
        writer.write_string_value("incidentId", self.incident_id().as_deref())?;
        writer.write_string_value("incidentWebUrl", self.incident_web_url().as_deref())?;
        writer.write_date_time_value("lastActivityDateTime", self.last_activity_date_time())?;
        writer.write_date_time_value("lastUpdateDateTime", self.last_update_date_time())?;
        writer.write_collection_of_string_values("mitreTechniques", self.mitre_techniques().as_deref())?;
        writer.write_string_value("productName", self.product_name().as_deref())?;
        writer.write_string_value("providerAlertId", self.provider_alert_id().as_deref())?;
        writer.write_string_value("recommendedActions", self.recommended_actions().as_deref())?;
        writer.write_date_time_value("resolvedDateTime", self.resolved_date_time())?;
        writer.write_enum_value("severity", self.severity())?;
        writer.write_enum_value("status", self.status())?;
        writer.write_collection_of_string_values("systemTags", self.system_tags().as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id().as_deref())?;
        writer.write_string_value("threatDisplayName", self.threat_display_name().as_deref())?;
        writer.write_string_value("threatFamilyName", self.threat_family_name().as_deref())?;
        writer.write_string_value("title", self.title().as_deref())
    }
}

crate::impl_model!(Alert, base = base: Entity);
