// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte-level JSON round trips through the public API.

#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

use odata_model::json::{self, JsonDocument, JsonSerializationWriter, JsonWriterOptions};
use odata_model::models::callrecords::MediaStream;
use odata_model::models::security::{
    Alert, AlertCollectionResponse, AlertComment, AlertSeverity, DeviceEvidence, DeviceRiskScore,
    EvidenceRole, IpEvidence,
};
use odata_model::models::{factory_for, Entity, FileAttachment};
use odata_model::{as_type, deserialize_into, IsoDuration, Model, SerializationWriter, Value};
use serde_json::json;

fn reparse(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn built_alert_serializes_base_fields_first() {
    let mut comment = AlertComment::new();
    comment.set_comment(Some("escalated".into()));

    let mut device = DeviceEvidence::new();
    device.set_mde_device_id(Some("7a1".into()));
    device.set_risk_score(Some(DeviceRiskScore::Medium));
    device.set_roles(Some(vec![EvidenceRole::Compromised, EvidenceRole::Attacked]));

    let mut ip = IpEvidence::new();
    ip.set_ip_address(Some("198.51.100.4".into()));

    let mut alert = Alert::new();
    alert.set_id(Some("a-1".into()));
    alert.set_title(Some("Credential theft".into()));
    alert.set_severity(Some(AlertSeverity::High));
    alert.set_comments(Some(vec![comment]));
    alert.set_evidence(Some(vec![Box::new(device) as Box<dyn Model>, Box::new(ip)]));
    alert
        .additional_data_mut()
        .insert("ticket".into(), Value::I64(4711));

    let bytes = json::to_vec(&alert).unwrap();
    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text.starts_with(r##"{"id":"a-1","@odata.type":"#microsoft.graph.security.alert""##));
    assert!(text.ends_with(r#""ticket":4711}"#));

    assert_eq!(
        reparse(&bytes),
        json!({
            "id": "a-1",
            "@odata.type": "#microsoft.graph.security.alert",
            "comments": [{"comment": "escalated"}],
            "evidence": [
                {
                    "@odata.type": "#microsoft.graph.security.deviceEvidence",
                    "roles": ["compromised", "attacked"],
                    "mdeDeviceId": "7a1",
                    "riskScore": "medium"
                },
                {
                    "@odata.type": "#microsoft.graph.security.ipEvidence",
                    "ipAddress": "198.51.100.4"
                }
            ],
            "severity": "high",
            "title": "Credential theft",
            "ticket": 4711
        })
    );
}

#[test]
fn bytes_survive_decode_then_encode() {
    let payload = json!({
        "@odata.count": 1,
        "value": [{
            "@odata.type": "#microsoft.graph.security.alert",
            "id": "a-9",
            "status": "inProgress",
            "evidence": [{
                "@odata.type": "#microsoft.graph.security.ipEvidence",
                "ipAddress": "203.0.113.9",
                "x-vendor": {"score": 0.75, "seen": [1, 2, 3]}
            }]
        }]
    });
    let bytes = serde_json::to_vec(&payload).unwrap();

    let model = json::from_slice(&bytes, AlertCollectionResponse::create_from_discriminator_value)
        .unwrap()
        .unwrap();
    assert_eq!(reparse(&json::to_vec(model.as_ref()).unwrap()), payload);

    let page = as_type::<AlertCollectionResponse>(model.as_ref()).unwrap();
    let alerts = page.value().unwrap();
    let evidence = alerts[0].evidence_models().unwrap();
    let ip = as_type::<IpEvidence>(evidence[0].as_ref()).unwrap();
    let vendor = ip.additional_data().get("x-vendor").unwrap().as_map().unwrap();
    assert_eq!(vendor.get("score"), Some(&Value::F64(0.75)));
}

#[test]
fn pretty_output_reparses_to_the_same_document() {
    let mut stream = MediaStream::new();
    stream.set_stream_id(Some("1504545584".into()));
    stream.set_max_jitter(Some(IsoDuration::from_millis(62_500)));
    stream.set_average_packet_loss_rate(Some(0.1));

    let compact = json::to_vec(&stream).unwrap();
    let pretty = json::to_vec_with(&stream, JsonWriterOptions::pretty()).unwrap();
    assert!(pretty.contains(&b'\n'));
    assert!(!compact.contains(&b'\n'));
    assert_eq!(reparse(&compact), reparse(&pretty));
    assert_eq!(
        reparse(&compact),
        json!({"averagePacketLossRate": 0.1, "maxJitter": "PT1M2.5S", "streamId": "1504545584"})
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = json::from_slice(b"{\"id\": ", Entity::create_from_discriminator_value).unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn non_object_top_level_is_rejected() {
    assert!(json::from_slice(b"[1, 2]", Entity::create_from_discriminator_value).is_err());
    assert!(json::from_slice(b"\"entity\"", Entity::create_from_discriminator_value).is_err());
}

#[test]
fn deserialize_into_an_existing_instance() {
    let doc = JsonDocument::parse(
        br##"{"@odata.type": "#microsoft.graph.fileAttachment", "name": "a.txt", "contentBytes": "YQ=="}"##,
    )
    .unwrap();
    let mut file = FileAttachment::new();
    file.set_size(Some(1));
    deserialize_into(&mut file, &doc.root()).unwrap();

    assert_eq!(file.name().as_deref(), Some("a.txt"));
    assert_eq!(file.content_bytes(), Some(b"a".to_vec()));
    // Fields absent from the payload keep their value.
    assert_eq!(file.size(), Some(1));
}

#[test]
fn writer_can_hold_several_objects() {
    let mut first = Entity::new();
    first.set_id(Some("1".into()));
    let mut second = Entity::new();
    second.set_id(Some("2".into()));

    let mut writer = JsonSerializationWriter::new();
    let items: Vec<Box<dyn Model>> = vec![Box::new(first), Box::new(second)];
    writer
        .write_collection_of_object_values("", Some(items.as_slice()))
        .unwrap();
    assert_eq!(reparse(&writer.content().unwrap()), json!([{"id": "1"}, {"id": "2"}]));
}

#[test]
fn factory_lookup_drives_decoding() {
    let factory = factory_for("security.alertEvidence").unwrap();
    let model = json::from_slice(
        br##"{"@odata.type": "#microsoft.graph.security.deviceEvidence", "osBuild": 19045}"##,
        factory,
    )
    .unwrap()
    .unwrap();
    assert_eq!(as_type::<DeviceEvidence>(model.as_ref()).unwrap().os_build(), Some(19045));
}

#[test]
fn passthrough_integers_keep_full_precision() {
    let bytes = br#"{"id":"x","big":18446744073709551615,"small":-9223372036854775808,"ratio":0.5}"#;
    let model = json::from_slice(bytes, Entity::create_from_discriminator_value)
        .unwrap()
        .unwrap();
    assert_eq!(model.additional_data().get("big"), Some(&Value::U64(u64::MAX)));

    let out = json::to_vec(model.as_ref()).unwrap();
    assert_eq!(out.as_slice(), &bytes[..]);
}
