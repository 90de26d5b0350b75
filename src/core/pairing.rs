//! Pairing Engine: turns one plate's event stream into completed stays.
//!
//! Events are sorted by (timestamp, source) and fed through a two-state
//! matcher (awaiting entry / awaiting exit). Every event ends up in exactly
//! one outcome: consumed into an Interval or the origin of an Issue. An
//! anomaly never stops processing of later events on the plate.

use crate::models::{Event, EventKind, Interval, Issue, IssueKind};
use crate::utils::{minutes_between, round2};
use serde::{Deserialize, Serialize};

/// What to do when a second ENTRY arrives while one is still open.
/// `KeepLatest` flags the earlier entry and restarts the stay from the new
/// one; `KeepEarliest` flags the new entry and keeps waiting on the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateEntryPolicy {
    #[default]
    KeepLatest,
    KeepEarliest,
}

/// Plates that are nothing but digits are badge or ticket numbers leaking
/// into the plate column; they are reported instead of paired.
pub fn is_hazard_plate(plate: &str) -> bool {
    !plate.is_empty() && plate.chars().all(|c| c.is_ascii_digit())
}

pub fn pair_plate(
    plate: &str,
    events: &[Event],
    policy: DuplicateEntryPolicy,
) -> (Vec<Interval>, Vec<Issue>) {
    let mut intervals = Vec::new();
    let mut issues = Vec::new();

    if is_hazard_plate(plate) {
        for ev in events {
            issues.push(Issue::new(
                IssueKind::HazardPlate,
                Some(plate.to_string()),
                Some(ev.timestamp),
                "Hazard plate number",
                ev.source.clone(),
            ));
        }
        return (intervals, issues);
    }

    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut open_entry: Option<Event> = None;

    for ev in &sorted {
        match ev.kind {
            EventKind::Entry => match open_entry.take() {
                None => open_entry = Some(ev.clone()),
                Some(prev) => match policy {
                    DuplicateEntryPolicy::KeepLatest => {
                        issues.push(unmatched_entry(&prev, "Consecutive ENTRY without EXIT"));
                        open_entry = Some(ev.clone());
                    }
                    DuplicateEntryPolicy::KeepEarliest => {
                        issues.push(unmatched_entry(ev, "Consecutive ENTRY without EXIT"));
                        open_entry = Some(prev);
                    }
                },
            },
            EventKind::Exit => {
                let Some(entry) = open_entry.take() else {
                    issues.push(Issue::new(
                        IssueKind::UnmatchedExit,
                        Some(plate.to_string()),
                        Some(ev.timestamp),
                        "EXIT without matching ENTRY",
                        ev.source.clone(),
                    ));
                    continue;
                };

                let duration = minutes_between(&entry.timestamp, &ev.timestamp);
                if duration < 0.0 {
                    issues.push(Issue::new(
                        IssueKind::OutOfOrder,
                        Some(plate.to_string()),
                        Some(ev.timestamp),
                        "EXIT earlier than ENTRY",
                        ev.source.clone(),
                    ));
                    continue;
                }

                intervals.push(Interval {
                    plate: plate.to_string(),
                    entry_time: entry.timestamp,
                    exit_time: ev.timestamp,
                    duration_minutes: round2(duration),
                });
            }
        }
    }

    // Stream ended with a stay still open.
    if let Some(entry) = open_entry {
        issues.push(unmatched_entry(&entry, "ENTRY without matching EXIT"));
    }

    (intervals, issues)
}

fn unmatched_entry(entry: &Event, detail: &str) -> Issue {
    Issue::new(
        IssueKind::UnmatchedEntry,
        Some(entry.plate.clone()),
        Some(entry.timestamp),
        detail,
        entry.source.clone(),
    )
}
