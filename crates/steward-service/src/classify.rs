//! Event Classifier - turns a member-update snapshot pair into a notification
//!
//! Classification is an ordered match over a tagged description of what
//! changed. Priority is strict: status, then nickname, then display name,
//! then role set, then a fallback for updates nothing matched. Exactly one
//! branch ever fires even when several fields differ at once.

use steward_core::{Member, UserStatus};

use crate::format::{ljust, PREFIX_WIDTH, STATUS_WIDTH};

/// A derived notification: subject identity plus display body.
///
/// Transient; constructed and consumed within a single event-handling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Audit-log subject (the account name the log file is keyed by)
    pub subject: String,
    /// What changed
    pub change: MemberChange,
    /// Human-readable body
    pub body: String,
}

/// What a member update changed, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberChange {
    /// Overall presence status changed
    Status,
    /// Per-guild nickname changed
    Nickname,
    /// Display name changed (nickname unchanged)
    DisplayName,
    /// Role set changed (names unchanged)
    Roles,
    /// Update event fired but nothing recognizable changed
    Unrecognized,
}

/// Determine what changed between two member snapshots.
///
/// Strictly ordered; the first matching condition wins.
pub fn change_kind(before: &Member, after: &Member) -> MemberChange {
    if before.presence.status != after.presence.status {
        MemberChange::Status
    } else if before.nickname != after.nickname {
        MemberChange::Nickname
    } else if before.display_name() != after.display_name() {
        MemberChange::DisplayName
    } else if before.roles != after.roles {
        MemberChange::Roles
    } else {
        MemberChange::Unrecognized
    }
}

/// Classify a member update into a notification.
pub fn classify(before: &Member, after: &Member) -> Notification {
    let change = change_kind(before, after);
    let body = match change {
        MemberChange::Status => status_message(before, after),
        MemberChange::Nickname => nickname_message(before, after),
        MemberChange::DisplayName => display_name_message(before, after),
        MemberChange::Roles => roles_message(before, after),
        MemberChange::Unrecognized => fallback_message(after),
    };
    Notification {
        subject: before.name.clone(),
        change,
        body,
    }
}

fn status_message(before: &Member, after: &Member) -> String {
    let b = before.presence;
    let a = after.presence;
    let was = b.status.to_string().to_uppercase();
    let now = a.status.to_string().to_uppercase();
    let prefix = ljust(&format!("{} is now:", before.display_name()), PREFIX_WIDTH);

    if b.mobile_status == UserStatus::Offline && a.mobile_status == UserStatus::Offline {
        // Desktop change
        format!("{}, \twas {was}", ljust(&format!("{prefix}{now}"), STATUS_WIDTH))
    } else if b.mobile_status != a.mobile_status {
        format!(
            "{} (MOBILE), \t was {was} (MOBILE).",
            ljust(&format!("{prefix}{now}"), STATUS_WIDTH)
        )
    } else if b.web_status != a.web_status {
        format!(
            "{} (WEB), \t was {was} (WEB).",
            ljust(&format!("{prefix}{now}"), STATUS_WIDTH)
        )
    } else {
        format!(
            "Something weird happened when {} updated their status.",
            before.display_name()
        )
    }
}

fn nickname_message(before: &Member, after: &Member) -> String {
    // A missing prior nickname displays as the base account name, and the
    // new side falls back the same way when the nickname was cleared.
    let old = before.nickname.as_deref().unwrap_or(&before.name);
    let new = after.nickname.as_deref().unwrap_or(&after.name);
    format!(
        "{}{new}",
        ljust(&format!("{old}'s new nickname is: "), PREFIX_WIDTH)
    )
}

fn display_name_message(before: &Member, after: &Member) -> String {
    format!(
        "{}{}",
        ljust(&format!("{}'s new member_name is: ", before.name), PREFIX_WIDTH),
        after.name
    )
}

fn roles_message(before: &Member, after: &Member) -> String {
    let joined = after
        .roles
        .iter()
        .filter(|role| !role.is_everyone())
        .map(|role| role.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let list = if joined.is_empty() { "None" } else { joined.as_str() };
    format!("{}'s roles are now: {list}", before.name)
}

fn fallback_message(after: &Member) -> String {
    format!(
        "ERROR!!! {} has caused an error in member_updated().",
        after.name
    )
}
