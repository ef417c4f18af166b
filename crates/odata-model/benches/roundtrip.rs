// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Benches panic on failure
#![allow(clippy::unreadable_literal)] // Payload constants

//! Decode and encode throughput for alert pages.
//!
//! - polymorphic decode of an alert collection page
//! - encode of the decoded page
//! - typed accessor reads against the backing store

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use odata_model::json;
use odata_model::models::security::{Alert, AlertCollectionResponse};
use odata_model::{as_type, Model};
use serde_json::json;

fn alert(index: usize) -> serde_json::Value {
    json!({
        "@odata.type": "#microsoft.graph.security.alert",
        "id": format!("da6375512276775608{index:02}"),
        "title": "Suspicious PowerShell command line",
        "severity": "medium",
        "status": "inProgress",
        "createdDateTime": "2021-04-27T12:52:47.026Z",
        "mitreTechniques": ["T1059.001", "T1564.001"],
        "comments": [{"comment": "triaged", "createdDateTime": "2021-04-28T08:00:00Z"}],
        "evidence": [
            {
                "@odata.type": "#microsoft.graph.security.deviceEvidence",
                "mdeDeviceId": "73e7e2de709dff64ef64b1d0c30e67fab63279db",
                "osBuild": 22424,
                "riskScore": "high",
                "roles": ["compromised"]
            },
            {
                "@odata.type": "#microsoft.graph.security.ipEvidence",
                "ipAddress": "192.0.2.7"
            }
        ],
        "vendorData": {"score": 0.87, "labels": ["a", "b"]}
    })
}

fn page(size: usize) -> Vec<u8> {
    let alerts: Vec<_> = (0..size).map(alert).collect();
    serde_json::to_vec(&json!({"@odata.count": size, "value": alerts})).unwrap_or_default()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1usize, 16, 128] {
        let bytes = page(size);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| {
                json::from_slice(
                    black_box(bytes),
                    AlertCollectionResponse::create_from_discriminator_value,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1usize, 16, 128] {
        let model = json::from_slice(
            &page(size),
            AlertCollectionResponse::create_from_discriminator_value,
        )
        .unwrap()
        .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &model, |b, model| {
            b.iter(|| json::to_vec(black_box(model.as_ref())).unwrap());
        });
    }
    group.finish();
}

fn bench_accessors(c: &mut Criterion) {
    let model = json::from_slice(&page(1), AlertCollectionResponse::create_from_discriminator_value)
        .unwrap()
        .unwrap();
    let page = as_type::<AlertCollectionResponse>(model.as_ref()).unwrap();
    let first: &Alert = page.value().unwrap()[0];

    c.bench_function("accessor/string", |b| b.iter(|| black_box(first.title())));
    c.bench_function("accessor/enum", |b| b.iter(|| black_box(first.severity())));
    c.bench_function("accessor/objects", |b| {
        b.iter(|| black_box(first.evidence().map(|e| e.len())))
    });
    c.bench_function("accessor/additional_data", |b| {
        b.iter(|| black_box(first.additional_data().len()))
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_accessors);
criterion_main!(benches);
