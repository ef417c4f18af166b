// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `microsoft.graph.security` namespace.

mod alert;
mod alert_collection_response;
mod alert_comment;
mod alert_evidence;
mod artifact;
mod device_evidence;
mod enums;
mod host;
mod hostname;
mod ip_address;
mod ip_evidence;

pub use alert::Alert;
pub use alert_collection_response::AlertCollectionResponse;
pub use alert_comment::AlertComment;
pub use alert_evidence::AlertEvidence;
pub use artifact::Artifact;
pub use device_evidence::DeviceEvidence;
pub use enums::{
    AlertClassification, AlertDetermination, AlertSeverity, AlertStatus, DefenderAvStatus,
    DetectionSource, DeviceHealthStatus, DeviceRiskScore, EvidenceRemediationStatus, EvidenceRole,
    EvidenceVerdict, OnboardingStatus,
};
pub use host::Host;
pub use hostname::Hostname;
pub use ip_address::IpAddress;
pub use ip_evidence::IpEvidence;
