// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::model_enum;

model_enum! {
    pub enum AlertSeverity {
        Unknown => "unknown",
        Informational => "informational",
        Low => "low",
        Medium => "medium",
        High => "high",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum AlertStatus {
        Unknown => "unknown",
        New => "new",
        InProgress => "inProgress",
        Resolved => "resolved",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum AlertClassification {
        Unknown => "unknown",
        FalsePositive => "falsePositive",
        TruePositive => "truePositive",
        InformationalExpectedActivity => "informationalExpectedActivity",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum AlertDetermination {
        Unknown => "unknown",
        Apt => "apt",
        Malware => "malware",
        SecurityPersonnel => "securityPersonnel",
        SecurityTesting => "securityTesting",
        UnwantedSoftware => "unwantedSoftware",
        Other => "other",
        MultiStagedAttack => "multiStagedAttack",
        CompromisedAccount => "compromisedAccount",
        Phishing => "phishing",
        MaliciousUserActivity => "maliciousUserActivity",
        NotMalicious => "notMalicious",
        NotEnoughDataToValidate => "notEnoughDataToValidate",
        ConfirmedUserActivity => "confirmedUserActivity",
        LineOfBusinessApplication => "lineOfBusinessApplication",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum DetectionSource {
        Unknown => "unknown",
        MicrosoftDefenderForEndpoint => "microsoftDefenderForEndpoint",
        Antivirus => "antivirus",
        SmartScreen => "smartScreen",
        CustomTi => "customTi",
        MicrosoftDefenderForOffice365 => "microsoftDefenderForOffice365",
        AutomatedInvestigation => "automatedInvestigation",
        MicrosoftThreatExperts => "microsoftThreatExperts",
        CustomDetection => "customDetection",
        MicrosoftDefenderForIdentity => "microsoftDefenderForIdentity",
        CloudAppSecurity => "cloudAppSecurity",
        Microsoft365Defender => "microsoft365Defender",
        AzureAdIdentityProtection => "azureAdIdentityProtection",
        Manual => "manual",
        MicrosoftDataLossPrevention => "microsoftDataLossPrevention",
        AppGovernancePolicy => "appGovernancePolicy",
        AppGovernanceDetection => "appGovernanceDetection",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum EvidenceRemediationStatus {
        None => "none",
        Remediated => "remediated",
        Prevented => "prevented",
        Blocked => "blocked",
        NotFound => "notFound",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum EvidenceRole {
        Unknown => "unknown",
        Contextual => "contextual",
        Scanned => "scanned",
        Source => "source",
        Destination => "destination",
        Created => "created",
        Added => "added",
        Compromised => "compromised",
        Edited => "edited",
        Attacked => "attacked",
        Attacker => "attacker",
        CommandAndControl => "commandAndControl",
        Loaded => "loaded",
        Suspicious => "suspicious",
        PolicyViolator => "policyViolator",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum EvidenceVerdict {
        Unknown => "unknown",
        Suspicious => "suspicious",
        Malicious => "malicious",
        NoThreatsFound => "noThreatsFound",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum DefenderAvStatus {
        NotReporting => "notReporting",
        Disabled => "disabled",
        NotUpdated => "notUpdated",
        Updated => "updated",
        Unknown => "unknown",
        NotSupported => "notSupported",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum DeviceHealthStatus {
        Active => "active",
        Inactive => "inactive",
        ImpairedCommunication => "impairedCommunication",
        NoSensorData => "noSensorData",
        NoSensorDataImpairedCommunication => "noSensorDataImpairedCommunication",
        Unknown => "unknown",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum DeviceRiskScore {
        None => "none",
        Informational => "informational",
        Low => "low",
        Medium => "medium",
        High => "high",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum OnboardingStatus {
        InsufficientInfo => "insufficientInfo",
        Onboarded => "onboarded",
        CanBeOnboarded => "canBeOnboarded",
        Unsupported => "unsupported",
        UnknownFutureValue => "unknownFutureValue",
    }
}
