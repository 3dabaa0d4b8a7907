//! Rewrites Android `X-ANDROID-CUSTOM` cursor-item lines.
//!
//! A cursor-item line carries a typed value that plain vCard cannot
//! express, e.g.
//!
//! ```text
//! X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;John;5
//! ```
//!
//! Relation and contact-event lines become an Apple `item`N pair: a value
//! line plus an `X-ABLabel` line sharing the same group.

use std::fmt;
use std::sync::LazyLock;

use cardshift_core::constants::{
    ANDROID_CURSOR_ITEM_PREFIX, ANDROID_CUSTOM_PROPERTY, APPLE_DATE_PROPERTY,
    APPLE_LABEL_PROPERTY, APPLE_RELATED_NAMES_PROPERTY,
};
use cardshift_core::types::CounterMode;
use chrono::NaiveDate;
use regex::Regex;

use super::diagnostic::{DiagnosticKind, Diagnostics};
use super::label::{EventLabel, RelationLabel, ResolvedLabel, resolve};
use super::quoted_printable::{self, SOFT_WRAPPED_VALUE};
use super::splice::{Edit, apply_reversed};
use super::{compile, line_ending};

/// Group 1 is the item type, group 2 the `;`-separated payload including
/// any soft-wrapped continuation lines.
static CURSOR_ITEM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!(
        r"{}[;:][^\r\n]*{}([^;\r\n]*);({SOFT_WRAPPED_VALUE})",
        regex::escape(ANDROID_CUSTOM_PROPERTY),
        regex::escape(ANDROID_CURSOR_ITEM_PREFIX),
    ))
});

/// Cursor-item types the rewriter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorItemKind {
    Nickname,
    Relation,
    ContactEvent,
}

impl CursorItemKind {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "nickname" => Some(Self::Nickname),
            "relation" => Some(Self::Relation),
            "contact_event" => Some(Self::ContactEvent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nickname => "nickname",
            Self::Relation => "relation",
            Self::ContactEvent => "contact_event",
        }
    }
}

impl fmt::Display for CursorItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running `item`N numbers for one rewrite pass.
#[derive(Debug)]
struct ItemCounters {
    mode: CounterMode,
    relation: usize,
    contact_event: usize,
}

impl ItemCounters {
    const fn new(mode: CounterMode) -> Self {
        Self {
            mode,
            relation: 0,
            contact_event: 0,
        }
    }

    fn next(&mut self, kind: CursorItemKind) -> usize {
        let slot = match (self.mode, kind) {
            (CounterMode::Independent, CursorItemKind::ContactEvent) => &mut self.contact_event,
            _ => &mut self.relation,
        };
        let current = *slot;
        *slot += 1;
        current
    }
}

/// Rewrites every recognized cursor-item line in `text`.
///
/// Item numbers follow document order. Unrecognized item types are left
/// in place.
#[must_use]
#[tracing::instrument(skip(text, diagnostics), fields(input_len = text.len()))]
pub fn rewrite_cursor_items(
    text: &str,
    mode: CounterMode,
    diagnostics: &mut Diagnostics,
) -> String {
    let Some(pattern) = CURSOR_ITEM.as_ref() else {
        return text.to_string();
    };

    let newline = line_ending(text);
    let mut counters = ItemCounters::new(mode);
    let mut edits = Vec::new();

    for caps in pattern.captures_iter(text) {
        let (Some(line), Some(token), Some(payload)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let Some(kind) = CursorItemKind::from_token(token.as_str()) else {
            tracing::trace!(item_type = token.as_str(), "Skipping unrecognized cursor item");
            diagnostics.push(line.start(), || DiagnosticKind::UnknownCursorItem {
                item_type: token.as_str().to_string(),
            });
            continue;
        };

        let replacement = match kind {
            CursorItemKind::Nickname => {
                let payload = quoted_printable::join_soft_breaks(payload.as_str());
                let nickname = payload.split(';').next().unwrap_or_default();
                format!("NICKNAME:{nickname}")
            }
            CursorItemKind::Relation | CursorItemKind::ContactEvent => {
                let item = counters.next(kind);
                labeled_item(kind, payload.as_str(), item, newline, line.start(), diagnostics)
            }
        };

        tracing::trace!(%kind, offset = line.start(), "Rewriting cursor item");
        edits.push(Edit::new(line.range(), replacement));
    }

    tracing::debug!(count = edits.len(), "Rewrote cursor items");

    apply_reversed(text, edits)
}

/// Builds the `itemN.<value>` / `itemN.X-ABLabel` pair for a relation or event.
fn labeled_item(
    kind: CursorItemKind,
    payload: &str,
    item: usize,
    newline: &str,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> String {
    let segments: Vec<String> = payload
        .split(';')
        .map(|segment| decode_segment(segment, offset, diagnostics))
        .collect();

    let value = segments.first().map_or("", String::as_str);
    let label_token = segments.last().map_or("", String::as_str);

    let (property, label) = if kind == CursorItemKind::ContactEvent {
        if diagnostics.is_enabled() && !is_event_date(value) {
            diagnostics.push(offset, || DiagnosticKind::InvalidEventDate {
                value: value.to_string(),
            });
        }
        (APPLE_DATE_PROPERTY, resolve::<EventLabel>(label_token))
    } else {
        (
            APPLE_RELATED_NAMES_PROPERTY,
            resolve::<RelationLabel>(label_token),
        )
    };

    if let ResolvedLabel::Custom(text) = &label {
        diagnostics.push(offset, || DiagnosticKind::CustomLabel {
            item: kind,
            label: text.clone(),
        });
    }

    format!(
        "item{item}.{property}:{value}{newline}item{item}.{APPLE_LABEL_PROPERTY}:{}",
        label.as_str()
    )
}

fn decode_segment(segment: &str, offset: usize, diagnostics: &mut Diagnostics) -> String {
    if let Some(decoded) = quoted_printable::try_decode(segment) {
        decoded
    } else {
        diagnostics.push(offset, || DiagnosticKind::UndecodableSegment {
            segment: segment.to_string(),
        });
        segment.to_string()
    }
}

/// Android writes full dates as `YYYY-MM-DD` and year-less dates as `--MM-DD`.
fn is_event_date(value: &str) -> bool {
    if let Some(month_day) = value.strip_prefix("--") {
        // Leap year so `--02-29` is accepted.
        NaiveDate::parse_from_str(&format!("2000-{month_day}"), "%Y-%m-%d").is_ok()
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    }
}
