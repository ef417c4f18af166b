// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::{flag_enum, model_enum};

model_enum! {
    pub enum DayOfWeek {
        Sunday => "sunday",
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
    }
}

model_enum! {
    pub enum RecurrenceRangeType {
        EndDate => "endDate",
        NoEnd => "noEnd",
        Numbered => "numbered",
    }
}

flag_enum! {
    /// Mail tips to request for a set of recipients.
    pub struct MailTipsType {
        const AUTOMATIC_REPLIES = 1 => "automaticReplies";
        const MAILBOX_FULL_STATUS = 2 => "mailboxFullStatus";
        const CUSTOM_MAIL_TIP = 4 => "customMailTip";
        const EXTERNAL_MEMBER_COUNT = 8 => "externalMemberCount";
        const TOTAL_MEMBER_COUNT = 16 => "totalMemberCount";
        const MAX_MESSAGE_SIZE = 32 => "maxMessageSize";
        const DELIVERY_RESTRICTION = 64 => "deliveryRestriction";
        const MODERATION_STATUS = 128 => "moderationStatus";
        const RECIPIENT_SCOPE = 256 => "recipientScope";
        const RECIPIENT_SUGGESTIONS = 512 => "recipientSuggestions";
    }
}
