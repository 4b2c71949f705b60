//! Encounter timestamp discovery and recency selection.

use tracing::debug;

use crate::xml::Element;

/// Find the most recent encounter timestamp in the document.
///
/// Scans every `component → structuredBody → component[*] → section →
/// entry[*] → encounter → effectiveTime` and keeps the candidate with the
/// largest `YYYYMMDD[HHMMSS]` value. When no encounter entry yields a
/// timestamp, falls back to `documentationOf → serviceEvent → effectiveTime →
/// low`. Returns the raw timestamp string; calendar validation happens at
/// formatting time.
pub(crate) fn latest_encounter_timestamp(root: &Element) -> Option<String> {
    let mut best: Option<(u64, String)> = None;

    for component in root.children("component") {
        let Some(body) = component.child("structuredBody") else {
            continue;
        };
        for section_wrap in body.children("component") {
            let Some(section) = section_wrap.child("section") else {
                continue;
            };
            for entry in section.children("entry") {
                let Some(time) = entry
                    .child("encounter")
                    .and_then(|e| e.child("effectiveTime"))
                else {
                    continue;
                };
                let Some(value) = timestamp_value(time) else {
                    continue;
                };
                match recency_key(&value) {
                    Some(key) if best.as_ref().is_none_or(|(b, _)| key > *b) => {
                        best = Some((key, value));
                    }
                    Some(_) => {}
                    None => debug!(value, "skipping encounter timestamp with fewer than 8 digits"),
                }
            }
        }
    }

    match best {
        Some((_, value)) => Some(value),
        None => service_event_low(root),
    }
}

/// Timestamp from an `effectiveTime` element, first match wins:
/// `low/@value`, `low` text, `@value`, text.
fn timestamp_value(time: &Element) -> Option<String> {
    let low = time.child("low");
    low.and_then(|l| l.attr("value"))
        .or_else(|| low.and_then(|l| l.text()))
        .or_else(|| time.attr("value"))
        .or_else(|| time.text())
        .map(str::to_owned)
}

fn service_event_low(root: &Element) -> Option<String> {
    let low = root
        .child("documentationOf")?
        .child("serviceEvent")?
        .child("effectiveTime")?
        .child("low")?;
    low.attr("value").or_else(|| low.text()).map(str::to_owned)
}

/// Numeric recency key: leading digits right-padded to 14 (`YYYYMMDDHHMMSS`,
/// time defaulting to `000000`). Candidates with fewer than 8 leading digits
/// cannot name a calendar day and are rejected rather than compared as short
/// integers.
fn recency_key(value: &str) -> Option<u64> {
    let digits: String = value.chars().take_while(char::is_ascii_digit).take(14).collect();
    if digits.len() < 8 {
        return None;
    }
    format!("{digits:0<14}").parse().ok()
}
