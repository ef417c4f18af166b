// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sample Microsoft Graph schema.
//!
//! A representative slice of the generated models: the `entity` root with
//! directory, attachment and security families, the `callRecords` complex
//! types, a few standalone complex types, and a paged collection response.

/// Typed getter/setter pairs over backing store slots.
///
/// `get / set : Type = "wireName";` expands to `get() -> Option<Type>` and
/// `set(Option<Type>)`.
macro_rules! properties {
    ($( $(#[$meta:meta])* $get:ident / $set:ident : $ty:ty = $key:literal; )*) => {
        $(
            $(#[$meta])*
            pub fn $get(&self) -> Option<$ty> {
                $crate::model::Model::backing_store(self).value($key)
            }

            pub fn $set(&mut self, value: Option<$ty>) {
                $crate::model::Model::backing_store_mut(self).put($key, value)
            }
        )*
    };
}

pub mod callrecords;
pub mod security;

mod app_role_assignment;
mod attachment;
mod collection;
mod directory_object;
mod entity;
mod enums;
mod file_attachment;
mod mail_tips;
mod recurrence_range;
mod working_hours;

#[cfg(test)]
mod tests;

pub use app_role_assignment::AppRoleAssignment;
pub use attachment::Attachment;
pub use collection::BaseCollectionPaginationCountResponse;
pub use directory_object::DirectoryObject;
pub use entity::Entity;
pub use enums::{DayOfWeek, MailTipsType, RecurrenceRangeType};
pub use file_attachment::FileAttachment;
pub use mail_tips::GetMailTipsPostRequestBody;
pub use recurrence_range::RecurrenceRange;
pub use working_hours::WorkingHours;

use crate::model::ModelFactory;

/// Graph namespace prefix of every discriminator value.
pub const GRAPH_NAMESPACE: &str = "#microsoft.graph.";

// ----- Type lookup -----

static FAMILIES: &[(&str, ModelFactory)] = &[
    ("entity", Entity::create_from_discriminator_value),
    ("directoryObject", DirectoryObject::create_from_discriminator_value),
    ("appRoleAssignment", AppRoleAssignment::create_from_discriminator_value),
    ("attachment", Attachment::create_from_discriminator_value),
    ("fileAttachment", FileAttachment::create_from_discriminator_value),
    ("recurrenceRange", RecurrenceRange::create_from_discriminator_value),
    ("workingHours", WorkingHours::create_from_discriminator_value),
    ("getMailTipsPostRequestBody", GetMailTipsPostRequestBody::create_from_discriminator_value),
    (
        "baseCollectionPaginationCountResponse",
        BaseCollectionPaginationCountResponse::create_from_discriminator_value,
    ),
    ("security.alert", security::Alert::create_from_discriminator_value),
    ("security.alertComment", security::AlertComment::create_from_discriminator_value),
    ("security.alertEvidence", security::AlertEvidence::create_from_discriminator_value),
    ("security.deviceEvidence", security::DeviceEvidence::create_from_discriminator_value),
    ("security.ipEvidence", security::IpEvidence::create_from_discriminator_value),
    ("security.artifact", security::Artifact::create_from_discriminator_value),
    ("security.host", security::Host::create_from_discriminator_value),
    ("security.hostname", security::Hostname::create_from_discriminator_value),
    ("security.ipAddress", security::IpAddress::create_from_discriminator_value),
    (
        "security.alertCollectionResponse",
        security::AlertCollectionResponse::create_from_discriminator_value,
    ),
    ("callRecords.mediaStream", callrecords::MediaStream::create_from_discriminator_value),
    ("callRecords.deviceInfo", callrecords::DeviceInfo::create_from_discriminator_value),
];

/// Resolve a type name to its discriminator factory.
///
/// Accepts the short name (`"security.alert"`) or the full discriminator
/// value (`"#microsoft.graph.security.alert"`).
pub fn factory_for(name: &str) -> Option<ModelFactory> {
    let short = name.strip_prefix(GRAPH_NAMESPACE).unwrap_or(name);
    FAMILIES
        .iter()
        .find(|(family, _)| *family == short)
        .map(|(_, factory)| *factory)
}

/// Every name accepted by [`factory_for`].
pub fn type_names() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|(name, _)| *name)
}
