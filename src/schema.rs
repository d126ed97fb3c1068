use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Placeholder for a session whose date and time could not be determined.
pub const TBD: &str = "TBD";

/// One scraped race, as emitted in the output array.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    pub race_name: String,
    pub url: String,
    pub sessions: SessionSchedule,
}

/// The five weekend sessions.  Every slot is always present; unresolved
/// slots hold [`TBD`], resolved ones hold `"<date> <time>"` as matched on
/// the race page (e.g. `"04Jul 15:00"` or `"03Jul 11:30-12:30"`).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SessionSchedule {
    pub practice1: String,
    pub practice2: String,
    pub practice3: String,
    pub qualifying: String,
    pub race: String,
}

impl Default for SessionSchedule {
    fn default() -> Self {
        Self {
            practice1: TBD.to_owned(),
            practice2: TBD.to_owned(),
            practice3: TBD.to_owned(),
            qualifying: TBD.to_owned(),
            race: TBD.to_owned(),
        }
    }
}

impl SessionSchedule {
    pub fn set(&mut self, kind: SessionKind, value: String) {
        *self.slot_mut(kind) = value;
    }

    pub fn get(&self, kind: SessionKind) -> &str {
        match kind {
            SessionKind::Practice1 => &self.practice1,
            SessionKind::Practice2 => &self.practice2,
            SessionKind::Practice3 => &self.practice3,
            SessionKind::Qualifying => &self.qualifying,
            SessionKind::Race => &self.race,
        }
    }

    fn slot_mut(&mut self, kind: SessionKind) -> &mut String {
        match kind {
            SessionKind::Practice1 => &mut self.practice1,
            SessionKind::Practice2 => &mut self.practice2,
            SessionKind::Practice3 => &mut self.practice3,
            SessionKind::Qualifying => &mut self.qualifying,
            SessionKind::Race => &mut self.race,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter)]
pub enum SessionKind {
    Practice1,
    Practice2,
    Practice3,
    Qualifying,
    Race,
}

impl SessionKind {
    /// The label under which the session is announced on a race page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Practice1 => "Practice 1",
            Self::Practice2 => "Practice 2",
            Self::Practice3 => "Practice 3",
            Self::Qualifying => "Qualifying",
            Self::Race => "Race",
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::{RaceRecord, SessionKind, SessionSchedule, TBD};

    #[test]
    fn test_default_schedule() {
        let schedule = SessionSchedule::default();
        for kind in SessionKind::iter() {
            assert_eq!(schedule.get(kind), TBD);
        }
    }

    #[test]
    fn test_set_slot() {
        let mut schedule = SessionSchedule::default();
        schedule.set(SessionKind::Qualifying, "05Jul 14:00".to_owned());
        for kind in SessionKind::iter() {
            if kind == SessionKind::Qualifying {
                assert_eq!(schedule.get(kind), "05Jul 14:00");
            } else {
                assert_eq!(schedule.get(kind), TBD);
            }
        }
    }

    #[test]
    fn test_record_keys() {
        let record = RaceRecord {
            race_name: "Austria".to_owned(),
            url: "https://www.formula1.com/en/racing/2025/austria".to_owned(),
            sessions: SessionSchedule::default(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"raceName":"Austria","url":"https://www.formula1.com/en/racing/2025/austria","sessions":{"practice1":"TBD","practice2":"TBD","practice3":"TBD","qualifying":"TBD","race":"TBD"}}"#
        );
    }

    #[test]
    fn test_record_round_trip() {
        let mut sessions = SessionSchedule::default();
        sessions.set(SessionKind::Practice1, "03Jul 11:30-12:30".to_owned());
        sessions.set(SessionKind::Race, "06Jul 15:00".to_owned());
        let records = vec![
            RaceRecord {
                race_name: "Great Britain".to_owned(),
                url: "https://www.formula1.com/en/racing/2025/great-britain".to_owned(),
                sessions,
            },
            RaceRecord {
                race_name: "Unknown Race".to_owned(),
                url: "https://www.formula1.com/en/racing/2025/belgium".to_owned(),
                sessions: SessionSchedule::default(),
            },
        ];
        let json = serde_json::to_string_pretty(&records).unwrap();
        let parsed: Vec<RaceRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records, parsed);
    }

    #[test]
    fn test_session_labels() {
        let labels = SessionKind::iter().map(SessionKind::label).collect_vec();
        assert_eq!(
            labels,
            ["Practice 1", "Practice 2", "Practice 3", "Qualifying", "Race"]
        );
    }
}
