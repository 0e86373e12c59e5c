use chrono::{DateTime, FixedOffset, Utc};
use rolebook_domain::Role;

use crate::role_ports::{MessageEnvelope, RoleSummary, UserSummary};

/// Offset applied to message timestamps (Indochina Time, UTC+7).
pub const MESSAGE_UTC_OFFSET_SECONDS: i32 = 7 * 3600;

/// Maps a role into its response view with caller-supplied member summaries.
#[must_use]
pub fn role_summary(role: &Role, users: Vec<UserSummary>) -> RoleSummary {
    RoleSummary {
        id: role.id().to_string(),
        name: role.name().as_str().to_owned(),
        privileges: role
            .privileges()
            .iter()
            .map(|privilege| privilege.as_str().to_owned())
            .collect(),
        users,
    }
}

/// Wraps a message with the current time.
#[must_use]
pub fn message_envelope(detail: impl Into<String>) -> MessageEnvelope {
    message_envelope_at(detail, Utc::now())
}

/// Wraps a message with the given instant, rendered in UTC+7.
#[must_use]
pub fn message_envelope_at(detail: impl Into<String>, now: DateTime<Utc>) -> MessageEnvelope {
    let timestamp = FixedOffset::east_opt(MESSAGE_UTC_OFFSET_SECONDS)
        .map_or_else(|| now.fixed_offset(), |offset| now.with_timezone(&offset));

    MessageEnvelope {
        message: detail.into(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rolebook_core::NonEmptyString;
    use rolebook_domain::{Privilege, Role, RoleId, UserId};

    use super::{message_envelope, message_envelope_at, role_summary};
    use crate::role_ports::UserSummary;

    fn role() -> Role {
        Role::from_parts(
            RoleId::new(),
            NonEmptyString::new("auditors").unwrap_or_else(|_| panic!("name must be valid")),
            vec![Privilege::Read, Privilege::Admin],
            vec![UserId::new()],
        )
    }

    #[test]
    fn role_summary_copies_role_and_supplied_users() {
        let role = role();
        let users = vec![UserSummary {
            id: "someone".to_owned(),
            email: "someone@example.com".to_owned(),
        }];

        let summary = role_summary(&role, users.clone());

        assert_eq!(summary.id, role.id().to_string());
        assert_eq!(summary.name, "auditors");
        assert_eq!(summary.privileges, vec!["READ", "ADMIN"]);
        assert_eq!(summary.users, users);
    }

    #[test]
    fn role_summary_is_repeatable() {
        let role = role();
        let users = vec![UserSummary {
            id: "1".to_owned(),
            email: "one@example.com".to_owned(),
        }];

        let first = role_summary(&role, users.clone());
        let second = role_summary(&role, users);

        assert_eq!(first, second);
    }

    #[test]
    fn message_timestamp_uses_indochina_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).single();
        let Some(now) = now else {
            panic!("fixed test instant must be valid");
        };

        let envelope = message_envelope_at("role assigned", now);

        assert_eq!(envelope.message, "role assigned");
        assert_eq!(envelope.timestamp.offset().local_minus_utc(), 7 * 3600);
        assert_eq!(envelope.timestamp.to_rfc3339(), "2024-03-02T03:30:00+07:00");
        assert_eq!(envelope.timestamp, now);
    }

    #[test]
    fn message_envelope_reads_the_clock() {
        let before = Utc::now();
        let envelope = message_envelope("done");
        let after = Utc::now();

        assert!(envelope.timestamp >= before && envelope.timestamp <= after);
    }
}
