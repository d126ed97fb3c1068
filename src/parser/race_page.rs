use scraper::Html;
use strum::IntoEnumIterator;

use crate::schema::{SessionKind, SessionSchedule};

/// Collects the visible text of every text-bearing element on a race page
/// and scans it for session announcements.
pub fn parse(html: &Html) -> SessionSchedule {
    extract_sessions(
        html.select(selector!("p, span, div, li"))
            .map(|element| element.text().collect::<String>()),
    )
}

/// Scans text fragments for `<date> [Chequered Flag] <label> <time>`
/// announcements, e.g. `04Jul Chequered Flag Race 15:00` or
/// `03JulPractice 111:30-12:30` (spacing between the tokens is optional).
///
/// Only the first announcement within a fragment counts, but a later
/// fragment announcing the same session overwrites the earlier value.
/// Adjacency within one fragment is the only evidence required; nothing
/// cross-checks that the date, label and time actually belong together.
pub fn extract_sessions<I, S>(fragments: I) -> SessionSchedule
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sessions = SessionSchedule::default();
    for fragment in fragments {
        let text = fragment.as_ref().trim();
        if let Some(captures) = regex!(
            r"(\d{2}[A-Z][a-z]{2})\s*(?:Chequered Flag)?\s*(Practice 1|Practice 2|Practice 3|Qualifying|Race)\s*(\d{2}:\d{2}(?:-\d{2}:\d{2})?)"
        )
        .captures(text)
        {
            let (date, label, time) = (&captures[1], &captures[2], &captures[3]);
            if let Some(kind) = SessionKind::iter().find(|kind| label.contains(kind.label())) {
                sessions.set(kind, format!("{date} {time}"));
            }
        }
    }
    sessions
}
