// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sample schema tests: accessors, dispatch and JSON round trips.

use super::callrecords::{AudioCodec, DeviceInfo, MediaStream, MediaStreamDirection};
use super::security::{
    Alert, AlertComment, AlertCollectionResponse, AlertEvidence, AlertSeverity, AlertStatus,
    Artifact, DeviceEvidence, DeviceRiskScore, EvidenceRole, EvidenceVerdict, Host, Hostname,
    IpAddress, IpEvidence,
};
use super::*;
use crate::duration::IsoDuration;
use crate::enums::ModelEnum;
use crate::error::ParseError;
use crate::json::{self, JsonDocument};
use crate::model::{as_type, Model, ModelFactory};
use crate::serialization::{deserialize_into, ParseNode, Primitive};
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

fn decode(payload: &JsonValue, factory: ModelFactory) -> Box<dyn Model> {
    json::from_value(payload, factory).unwrap().unwrap()
}

fn roundtrip(payload: &JsonValue, factory: ModelFactory) -> JsonValue {
    json::to_value(decode(payload, factory).as_ref()).unwrap()
}

// ----- Accessors -----

#[test]
fn scalar_accessors_read_back_what_was_set() {
    let at = DateTime::parse_from_rfc3339("2024-05-01T09:30:00+02:00").unwrap();
    let principal = Uuid::parse_str("3b2f6a0e-5c55-4a4b-9d4e-5b0c3c3b4a11").unwrap();

    let mut assignment = AppRoleAssignment::new();
    assignment.set_principal_id(Some(principal));
    assignment.set_created_date_time(Some(at));
    assignment.set_deleted_date_time(None);
    assert_eq!(assignment.principal_id(), Some(principal));
    assert_eq!(assignment.created_date_time(), Some(at));
    assert_eq!(assignment.deleted_date_time(), None);

    let mut file = FileAttachment::new();
    file.set_content_bytes(Some(vec![0, 159, 146, 150]));
    file.set_is_inline(Some(false));
    file.set_size(Some(4));
    assert_eq!(file.content_bytes(), Some(vec![0, 159, 146, 150]));
    assert_eq!(file.is_inline(), Some(false));
    assert_eq!(file.size(), Some(4));

    let mut stream = MediaStream::new();
    stream.set_average_packet_loss_rate(Some(0.015));
    stream.set_packet_utilization(Some(67_512));
    stream.set_average_jitter(Some(IsoDuration::from_millis(12)));
    assert_eq!(stream.average_packet_loss_rate(), Some(0.015));
    assert_eq!(stream.packet_utilization(), Some(67_512));
    assert_eq!(stream.average_jitter(), Some(IsoDuration::from_millis(12)));

    let mut range = RecurrenceRange::new();
    range.set_start_date(NaiveDate::from_ymd_opt(2024, 1, 31));
    range.set_number_of_occurrences(Some(10));
    range.set_range_type(Some(RecurrenceRangeType::Numbered));
    assert_eq!(range.start_date(), NaiveDate::from_ymd_opt(2024, 1, 31));
    assert_eq!(range.number_of_occurrences(), Some(10));
    assert_eq!(range.range_type(), Some(RecurrenceRangeType::Numbered));

    let mut hours = WorkingHours::new();
    hours.set_start_time(NaiveTime::from_hms_opt(8, 0, 0));
    assert_eq!(hours.start_time(), NaiveTime::from_hms_opt(8, 0, 0));
}

#[test]
fn narrow_and_double_scalars_read_back_through_the_store() {
    let mut stream = MediaStream::new();
    let store = stream.backing_store_mut();
    store.put("x-byte", Some(250u8));
    store.put("x-sbyte", Some(-7i8));
    store.put("x-double", Some(0.1f64 + 0.2));
    assert_eq!(store.value::<u8>("x-byte"), Some(250));
    assert_eq!(store.value::<i8>("x-sbyte"), Some(-7));
    assert_eq!(store.value::<f64>("x-double"), Some(0.1f64 + 0.2));

    let doc = JsonDocument::from_value(json!({"b": 250, "s": -7, "d": 0.30000000000000004}));
    let root = doc.root();
    let node = |name: &str| root.child_node(name).unwrap().unwrap();
    assert_eq!(u8::read(&*node("b")).unwrap(), Some(250));
    assert_eq!(i8::read(&*node("s")).unwrap(), Some(-7));
    assert_eq!(f64::read(&*node("d")).unwrap(), Some(0.1f64 + 0.2));
    assert!(u8::read(&*node("s")).is_err());
}

#[test]
fn empty_flag_set_reads_back() {
    let mut body = GetMailTipsPostRequestBody::new();
    body.set_mail_tips_options(Some(MailTipsType::empty()));
    assert_eq!(body.mail_tips_options(), Some(MailTipsType::empty()));

    // Nothing to render, so the property is left off the wire.
    let out = json::to_value(&body).unwrap();
    assert!(out.get("MailTipsOptions").is_none(), "{}", out);
}

#[test]
fn unset_properties_are_none() {
    let alert = Alert::new();
    assert_eq!(alert.title(), None);
    assert_eq!(alert.severity(), None);
    assert!(alert.comments().is_none());
    assert!(alert.evidence().is_none());
}

#[test]
fn setting_none_clears_a_property() {
    let mut alert = Alert::new();
    alert.set_title(Some("first".into()));
    alert.set_title(None);
    assert_eq!(alert.title(), None);
}

#[test]
fn constructors_start_with_empty_additional_data() {
    for model in [
        Entity::create_from_discriminator_value(None),
        MediaStream::create_from_discriminator_value(None),
        BaseCollectionPaginationCountResponse::create_from_discriminator_value(None),
    ] {
        assert!(model.additional_data().is_empty(), "{}", model.type_name());
    }
}

#[test]
fn derived_constructors_set_their_discriminator() {
    assert_eq!(Entity::new().odata_type(), None);
    assert_eq!(
        Alert::new().odata_type().as_deref(),
        Some("#microsoft.graph.security.alert")
    );
    assert_eq!(
        Hostname::new().odata_type().as_deref(),
        Some("#microsoft.graph.security.hostname")
    );
    assert_eq!(
        DeviceEvidence::new().odata_type().as_deref(),
        Some("#microsoft.graph.security.deviceEvidence")
    );
}

#[test]
fn inherited_accessors_reach_the_base() {
    let mut hostname = Hostname::new();
    hostname.set_id(Some("contoso.com".into()));
    hostname.set_first_seen_date_time(DateTime::parse_from_rfc3339("2019-01-01T00:00:00Z").ok());
    hostname.set_registrar(Some("MarkMonitor".into()));

    let host = as_type::<Host>(&hostname).unwrap();
    assert!(host.first_seen_date_time().is_some());
    assert_eq!(as_type::<Entity>(&hostname).unwrap().id().as_deref(), Some("contoso.com"));
}

#[test]
fn typed_comment_setter_round_trips() {
    let mut comment = AlertComment::new();
    comment.set_comment(Some("triaged".into()));
    let mut alert = Alert::new();
    alert.set_comments(Some(vec![comment]));

    let comments = alert.comments().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment().as_deref(), Some("triaged"));
}

// ----- Field maps -----

#[test]
fn every_family_inherits_base_fields() {
    fn names<T: Model>(fields: &crate::model::FieldDeserializers<T>) -> Vec<&'static str> {
        fields.names().collect()
    }

    let entity = names(&Entity::field_deserializers());
    for derived in [
        names(&DirectoryObject::field_deserializers()),
        names(&AppRoleAssignment::field_deserializers()),
        names(&Attachment::field_deserializers()),
        names(&FileAttachment::field_deserializers()),
        names(&Alert::field_deserializers()),
        names(&IpAddress::field_deserializers()),
    ] {
        assert_eq!(&derived[..entity.len()], &entity[..]);
    }

    let evidence = names(&AlertEvidence::field_deserializers());
    let device = names(&DeviceEvidence::field_deserializers());
    assert_eq!(&device[..evidence.len()], &evidence[..]);
    assert!(device.contains(&"riskScore"));
    assert!(!evidence.contains(&"riskScore"));
}

#[test]
fn field_names_come_from_the_concrete_type() {
    let model: Box<dyn Model> = Box::new(FileAttachment::new());
    let names = model.field_names();
    assert!(names.contains(&"id"));
    assert!(names.contains(&"size"));
    assert!(names.contains(&"contentBytes"));
}

// ----- Dispatch -----

#[test]
fn entity_dispatches_every_sample_subtype() {
    let cases: [(&str, fn(&dyn Model) -> bool); 6] = [
        ("#microsoft.graph.directoryObject", |m| m.as_any().is::<DirectoryObject>()),
        ("#microsoft.graph.appRoleAssignment", |m| m.as_any().is::<AppRoleAssignment>()),
        ("#microsoft.graph.fileAttachment", |m| m.as_any().is::<FileAttachment>()),
        ("#microsoft.graph.security.alert", |m| m.as_any().is::<Alert>()),
        ("#microsoft.graph.security.ipAddress", |m| m.as_any().is::<IpAddress>()),
        ("#microsoft.graph.user", |m| m.as_any().is::<Entity>()),
    ];
    for (tag, check) in cases {
        let model = decode(&json!({ "@odata.type": tag }), Entity::create_from_discriminator_value);
        assert!(check(model.as_ref()), "{} resolved to {}", tag, model.type_name());
    }
}

#[test]
fn unknown_subtype_keeps_its_discriminator() {
    let payload = json!({"@odata.type": "#microsoft.graph.user", "id": "u1", "displayName": "Adele"});
    let model = decode(&payload, Entity::create_from_discriminator_value);
    assert!(model.as_any().is::<Entity>());
    assert_eq!(model.odata_type().as_deref(), Some("#microsoft.graph.user"));
    assert_eq!(
        model.additional_data().get("displayName"),
        Some(&Value::String("Adele".into()))
    );
    assert_eq!(roundtrip(&payload, Entity::create_from_discriminator_value), payload);
}

#[test]
fn narrower_families_only_know_their_subtypes() {
    let payload = json!({"@odata.type": "#microsoft.graph.security.alert"});
    let model = decode(&payload, Artifact::create_from_discriminator_value);
    assert!(model.as_any().is::<Artifact>());

    let payload = json!({"@odata.type": "#microsoft.graph.security.ipAddress"});
    let model = decode(&payload, Host::create_from_discriminator_value);
    assert!(model.as_any().is::<IpAddress>());
    assert_eq!(Host::discriminators().len(), 2);
    assert_eq!(Entity::discriminators().len(), 9);
}

#[test]
fn top_level_null_is_absent() {
    assert!(json::from_slice(b"null", Entity::create_from_discriminator_value)
        .unwrap()
        .is_none());
}

// ----- Round trips -----

fn alert_payload() -> JsonValue {
    json!({
        "@odata.type": "#microsoft.graph.security.alert",
        "id": "da637551227677560813_-961444813",
        "title": "Suspicious execution of hidden file",
        "severity": "medium",
        "status": "new",
        "classification": "truePositive",
        "determination": "malware",
        "detectionSource": "antivirus",
        "createdDateTime": "2021-04-27T12:52:47.026Z",
        "mitreTechniques": ["T1564.001"],
        "systemTags": [],
        "comments": [{
            "comment": "triaged",
            "createdByDisplayName": "analyst@contoso.com",
            "createdDateTime": "2021-04-28T08:00:00Z"
        }],
        "evidence": [
            {
                "@odata.type": "#microsoft.graph.security.deviceEvidence",
                "createdDateTime": "2021-04-27T12:19:27.720Z",
                "verdict": "suspicious",
                "remediationStatus": "none",
                "roles": ["compromised"],
                "tags": [],
                "mdeDeviceId": "73e7e2de709dff64ef64b1d0c30e67fab63279db",
                "osBuild": 22424,
                "rbacGroupId": 75,
                "riskScore": "high",
                "healthStatus": "active",
                "ipInterfaces": ["10.0.0.4"]
            },
            {
                "@odata.type": "#microsoft.graph.security.ipEvidence",
                "verdict": "unknown",
                "ipAddress": "192.0.2.7",
                "countryLetterCode": "US"
            }
        ],
        "customerTag": {"team": "blue", "priority": 2, "labels": ["a", null]}
    })
}

#[test]
fn alert_reads_every_kind_of_field() {
    let model = decode(&alert_payload(), Entity::create_from_discriminator_value);
    let alert = as_type::<Alert>(model.as_ref()).unwrap();

    assert_eq!(alert.severity(), Some(AlertSeverity::Medium));
    assert_eq!(alert.status(), Some(AlertStatus::New));
    assert_eq!(alert.mitre_techniques(), Some(vec!["T1564.001".to_string()]));
    assert_eq!(alert.system_tags(), Some(vec![]));
    assert_eq!(alert.comments().unwrap()[0].comment().as_deref(), Some("triaged"));

    let evidence = alert.evidence_models().unwrap();
    assert_eq!(evidence.len(), 2);
    let device = as_type::<DeviceEvidence>(evidence[0].as_ref()).unwrap();
    assert_eq!(device.risk_score(), Some(DeviceRiskScore::High));
    assert_eq!(device.os_build(), Some(22424));
    assert_eq!(device.roles(), Some(vec![EvidenceRole::Compromised]));
    let ip = as_type::<IpEvidence>(evidence[1].as_ref()).unwrap();
    assert_eq!(ip.ip_address().as_deref(), Some("192.0.2.7"));
    assert_eq!(ip.verdict(), Some(EvidenceVerdict::Unknown));

    let base_view = alert.evidence().unwrap();
    assert_eq!(base_view.len(), 2);

    let tag = alert.additional_data().get("customerTag").unwrap();
    assert_eq!(tag.as_map().unwrap().get("priority"), Some(&Value::I64(2)));
}

#[test]
fn alert_round_trips() {
    let payload = alert_payload();
    assert_eq!(roundtrip(&payload, Entity::create_from_discriminator_value), payload);
}

#[test]
fn declared_nulls_are_dropped_undeclared_nulls_kept() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.security.alert",
        "title": null,
        "extra": null
    });
    let out = roundtrip(&payload, Entity::create_from_discriminator_value);
    assert_eq!(
        out,
        json!({"@odata.type": "#microsoft.graph.security.alert", "extra": null})
    );
}

#[test]
fn unknown_enum_value_is_absent() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.security.alert",
        "severity": "catastrophic",
        "status": "resolved"
    });
    let model = decode(&payload, Alert::create_from_discriminator_value);
    let alert = as_type::<Alert>(model.as_ref()).unwrap();
    assert_eq!(alert.severity(), None);
    assert_eq!(alert.status(), Some(AlertStatus::Resolved));
}

#[test]
fn collections_empty_versus_absent() {
    let model = decode(
        &json!({"evidence": [], "comments": null}),
        Alert::create_from_discriminator_value,
    );
    let alert = as_type::<Alert>(model.as_ref()).unwrap();
    assert_eq!(alert.evidence().map(|e| e.len()), Some(0));
    assert!(alert.comments().is_none());
    assert!(alert.mitre_techniques().is_none());
}

#[test]
fn null_collection_elements_are_skipped() {
    let model = decode(
        &json!({"mitreTechniques": ["T1", null, "T2"], "evidence": [null]}),
        Alert::create_from_discriminator_value,
    );
    let alert = as_type::<Alert>(model.as_ref()).unwrap();
    assert_eq!(
        alert.mitre_techniques(),
        Some(vec!["T1".to_string(), "T2".to_string()])
    );
    assert_eq!(alert.evidence().map(|e| e.len()), Some(0));
}

#[test]
fn media_stream_round_trips() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.callRecords.mediaStream",
        "audioCodec": "silk",
        "averageAudioDegradation": 1.2,
        "averageJitter": "PT0.015S",
        "averageRoundTripTime": "PT0.24S",
        "maxJitter": "PT1M2.5S",
        "averagePacketLossRate": 0.01,
        "averageBandwidthEstimate": 9_965_083,
        "packetUtilization": 67_512,
        "isAudioForwardErrorCorrectionUsed": true,
        "startDateTime": "2020-02-25T18:52:21.2169889Z",
        "streamDirection": "callerToCallee",
        "streamId": "1504545584",
        "wasMediaBypassed": false
    });
    let model = decode(&payload, MediaStream::create_from_discriminator_value);
    let stream = as_type::<MediaStream>(model.as_ref()).unwrap();
    assert_eq!(stream.audio_codec(), Some(AudioCodec::Silk));
    assert_eq!(stream.stream_direction(), Some(MediaStreamDirection::CallerToCallee));
    assert_eq!(stream.average_jitter().unwrap().millis, 15);
    assert_eq!(stream.max_jitter().unwrap().minutes, 1);
    assert_eq!(stream.average_packet_loss_rate(), Some(0.01));

    let mut expected = payload.clone();
    // Seven fractional digits come back padded to nine.
    expected["startDateTime"] = json!("2020-02-25T18:52:21.216988900Z");
    assert_eq!(json::to_value(model.as_ref()).unwrap(), expected);
}

#[test]
fn device_info_keeps_float_ratios() {
    let payload = json!({
        "captureDeviceName": "Microphone (Realtek)",
        "micGlitchRate": 0.5,
        "lowSpeechToNoiseEventRatio": 0.25,
        "howlingEventCount": 0,
        "receivedNoiseLevel": -71
    });
    let model = decode(&payload, DeviceInfo::create_from_discriminator_value);
    let info = as_type::<DeviceInfo>(model.as_ref()).unwrap();
    assert_eq!(info.received_noise_level(), Some(-71));
    assert_eq!(roundtrip(&payload, DeviceInfo::create_from_discriminator_value), payload);
}

#[test]
fn complex_types_with_dates_times_and_enum_lists() {
    let range = json!({
        "type": "endDate",
        "startDate": "2024-01-01",
        "endDate": "2024-12-31",
        "recurrenceTimeZone": "UTC",
        "numberOfOccurrences": 0
    });
    assert_eq!(roundtrip(&range, RecurrenceRange::create_from_discriminator_value), range);

    let hours = json!({
        "daysOfWeek": ["monday", "tuesday", "friday"],
        "startTime": "08:00:00",
        "endTime": "16:30:00"
    });
    let model = decode(&hours, WorkingHours::create_from_discriminator_value);
    let working = as_type::<WorkingHours>(model.as_ref()).unwrap();
    assert_eq!(
        working.days_of_week(),
        Some(vec![DayOfWeek::Monday, DayOfWeek::Tuesday, DayOfWeek::Friday])
    );
    assert_eq!(json::to_value(model.as_ref()).unwrap(), hours);
}

#[test]
fn file_attachment_bytes_are_base64() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.fileAttachment",
        "id": "AAMkADA1M",
        "name": "menu.txt",
        "contentType": "text/plain",
        "size": 5,
        "isInline": false,
        "contentBytes": "aGVsbG8="
    });
    let model = decode(&payload, Attachment::create_from_discriminator_value);
    let file = as_type::<FileAttachment>(model.as_ref()).unwrap();
    assert_eq!(file.content_bytes(), Some(b"hello".to_vec()));
    assert_eq!(json::to_value(model.as_ref()).unwrap(), payload);
}

#[test]
fn mail_tips_flags_round_trip() {
    let payload = json!({
        "EmailAddresses": ["danas@contoso.com", "fannyd@contoso.com"],
        "MailTipsOptions": "automaticReplies, mailboxFullStatus"
    });
    let model = decode(&payload, GetMailTipsPostRequestBody::create_from_discriminator_value);
    let body = as_type::<GetMailTipsPostRequestBody>(model.as_ref()).unwrap();
    let options = body.mail_tips_options().unwrap();
    assert!(options.contains(MailTipsType::AUTOMATIC_REPLIES));
    assert!(options.contains(MailTipsType::MAILBOX_FULL_STATUS));
    assert!(!options.contains(MailTipsType::CUSTOM_MAIL_TIP));

    let out = json::to_value(model.as_ref()).unwrap();
    assert_eq!(out["MailTipsOptions"], json!("automaticReplies,mailboxFullStatus"));
}

#[test]
fn collection_response_pages() {
    let payload = json!({
        "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#security/alerts_v2",
        "@odata.count": 2,
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/security/alerts_v2?$skip=2",
        "value": [
            {"@odata.type": "#microsoft.graph.security.alert", "id": "a1", "severity": "low"},
            {"@odata.type": "#microsoft.graph.security.alert", "id": "a2", "severity": "high"}
        ]
    });
    let model = decode(&payload, AlertCollectionResponse::create_from_discriminator_value);
    let page = as_type::<AlertCollectionResponse>(model.as_ref()).unwrap();
    assert_eq!(page.odata_count(), Some(2));
    let alerts = page.value().unwrap();
    assert_eq!(alerts[1].severity(), Some(AlertSeverity::High));
    assert!(page.additional_data().contains_key("@odata.context"));
    assert_eq!(json::to_value(model.as_ref()).unwrap(), payload);
}

// ----- Failure paths -----

#[test]
fn malformed_field_aborts_without_rollback() {
    let doc = JsonDocument::parse(br#"{"title": "kept", "severity": 5, "status": "new"}"#).unwrap();
    let mut alert = Alert::new();
    let err = deserialize_into(&mut alert, &doc.root()).unwrap_err();

    assert!(matches!(err, ParseError::Field { ref field, .. } if field == "severity"));
    assert_eq!(err.to_string(), "field 'severity': expected string, found number");
    assert_eq!(alert.title().as_deref(), Some("kept"));
    assert_eq!(alert.status(), None);
}

#[test]
fn nested_failure_names_the_path() {
    let payload = json!({"comments": [{"comment": "ok"}, {"createdDateTime": "soon"}]});
    let err = json::from_value(&payload, Alert::create_from_discriminator_value).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("field 'comments': field '1': field 'createdDateTime'"), "{}", message);
}

#[test]
fn collection_commits_only_when_every_element_reads() {
    let doc = JsonDocument::parse(br#"{"mitreTechniques": ["T1", 7]}"#).unwrap();
    let mut alert = Alert::new();
    assert!(deserialize_into(&mut alert, &doc.root()).is_err());
    assert!(alert.mitre_techniques().is_none());
}

// ----- Change tracking -----

#[test]
fn edits_after_decode_are_tracked() {
    let mut model = decode(&alert_payload(), Entity::create_from_discriminator_value);
    assert!(model.backing_store().initialization_completed());

    let alert = crate::model::as_type_mut::<Alert>(model.as_mut()).unwrap();
    alert.set_status(Some(AlertStatus::Resolved));
    alert.set_assigned_to(None);
    alert.backing_store_mut().set_return_only_changed_values(true);

    assert_eq!(alert.status(), Some(AlertStatus::Resolved));
    assert_eq!(alert.severity(), None);
    let changed: Vec<&str> = alert.backing_store().enumerate().into_iter().map(|(k, _)| k).collect();
    assert_eq!(changed, vec!["status", "assignedTo"]);
    assert_eq!(
        alert.backing_store().enumerate_keys_for_values_changed_to_null(),
        vec!["assignedTo"]
    );
}

// ----- Enums and lookup -----

#[test]
fn enum_wire_names_round_trip() {
    for v in AlertSeverity::VARIANTS {
        assert_eq!(AlertSeverity::parse(&v.to_wire()), Some(*v));
    }
    for v in DayOfWeek::VARIANTS {
        assert_eq!(DayOfWeek::parse(v.as_str()), Some(*v));
    }
    assert_eq!(AlertSeverity::parse("not-a-real-value"), None);
    assert_eq!(AlertStatus::InProgress.to_string(), "inProgress");
}

#[test]
fn factory_lookup_accepts_short_and_full_names() {
    let short = factory_for("security.hostname").unwrap();
    assert!(short(None).as_any().is::<Hostname>());

    let full = factory_for("#microsoft.graph.callRecords.mediaStream").unwrap();
    assert!(full(None).as_any().is::<MediaStream>());

    assert!(factory_for("security.nothing").is_none());
    assert!(type_names().any(|name| name == "entity"));
}
