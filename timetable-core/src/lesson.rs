//! Lesson records: one scheduled class occurrence.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TimetableError;

/// One class on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: LessonType,
    pub time: LessonTime,
    /// Room or building, None when not specified
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub instructor: Option<String>,
    /// 1-based position within the day (also shown as a badge)
    pub number: u32,
}

/// Kind of class. Only affects how a lesson is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonType {
    #[serde(rename = "ПЗ", alias = "practice")]
    Practice,
    #[serde(rename = "ЛР", alias = "lab")]
    Lab,
    #[serde(rename = "ЛК", alias = "lecture")]
    Lecture,
    #[serde(rename = "ЭКЗ", alias = "exam")]
    Exam,
}

impl LessonType {
    pub fn short_name(self) -> &'static str {
        match self {
            LessonType::Practice => "ПЗ",
            LessonType::Lab => "ЛР",
            LessonType::Lecture => "ЛК",
            LessonType::Exam => "ЭКЗ",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            LessonType::Practice => "Практическое занятие",
            LessonType::Lab => "Лабораторная работа",
            LessonType::Lecture => "Лекция",
            LessonType::Exam => "Экзамен",
        }
    }
}

impl FromStr for LessonType {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "пз" | "practice" => Ok(LessonType::Practice),
            "лр" | "lab" => Ok(LessonType::Lab),
            "лк" | "lecture" => Ok(LessonType::Lecture),
            "экз" | "exam" => Ok(LessonType::Exam),
            _ => Err(TimetableError::InvalidLessonType(s.to_string())),
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

const TIME_SEPARATORS: [char; 3] = ['—', '–', '-'];

/// Start and end of a lesson.
///
/// Stored in datasets as "HH:MM — HH:MM"; a hyphen or en-dash also works
/// as the separator. Orders by start time first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonTime {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl LessonTime {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        LessonTime { start, end }
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

impl FromStr for LessonTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimetableError::InvalidLessonTime(s.to_string());

        let (start, end) = s.split_once(TIME_SEPARATORS).ok_or_else(invalid)?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").map_err(|_| invalid())?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").map_err(|_| invalid())?;

        Ok(LessonTime { start, end })
    }
}

impl TryFrom<String> for LessonTime {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LessonTime> for String {
    fn from(time: LessonTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for LessonTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} — {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // --- LessonTime ---

    #[test]
    fn parses_time_range_with_and_without_spaces() {
        let compact: LessonTime = "08:30-10:00".parse().unwrap();
        let spaced: LessonTime = "08:30 - 10:00".parse().unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.start, hm(8, 30));
        assert_eq!(compact.end, hm(10, 0));
    }

    #[test]
    fn parses_em_dash_and_en_dash_separators() {
        let em: LessonTime = "09:00 — 10:30".parse().unwrap();
        let en: LessonTime = "09:00–10:30".parse().unwrap();
        let hyphen: LessonTime = "09:00-10:30".parse().unwrap();
        assert_eq!(em, hyphen);
        assert_eq!(en, hyphen);
        assert_eq!(em.start, hm(9, 0));
        assert_eq!(em.end, hm(10, 30));
    }

    #[test]
    fn displayed_time_parses_back() {
        let time = LessonTime::new(hm(15, 0), hm(16, 30));
        assert_eq!(time.to_string().parse::<LessonTime>().unwrap(), time);
    }

    #[test]
    fn displays_time_range() {
        let time = LessonTime::new(hm(10, 10), hm(11, 40));
        assert_eq!(time.to_string(), "10:10 — 11:40");
    }

    #[test]
    fn rejects_malformed_time_range() {
        assert!("08:30".parse::<LessonTime>().is_err());
        assert!("8.30-10.00".parse::<LessonTime>().is_err());
        assert!("25:00-26:00".parse::<LessonTime>().is_err());
    }

    #[test]
    fn orders_by_start_time() {
        let early = LessonTime::new(hm(8, 30), hm(10, 0));
        let late = LessonTime::new(hm(10, 10), hm(11, 40));
        assert!(early < late);
    }

    #[test]
    fn inverted_range_is_not_well_formed() {
        assert!(!LessonTime::new(hm(12, 0), hm(11, 0)).is_well_formed());
    }

    // --- Lesson deserialization ---

    #[test]
    fn deserializes_lesson_with_source_labels() {
        let json = r#"{
            "subject": "Общая физика",
            "type": "ЛК",
            "time": "10:10-11:40",
            "location": "Б-312",
            "instructor": "Соколов А.В.",
            "number": 2
        }"#;

        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.kind, LessonType::Lecture);
        assert_eq!(lesson.number, 2);
        assert_eq!(lesson.location.as_deref(), Some("Б-312"));
    }

    #[test]
    fn blank_and_missing_optionals_are_absent() {
        let json = r#"{
            "subject": "Физкультура",
            "type": "practice",
            "time": "13:00-14:30",
            "location": "  ",
            "number": 4
        }"#;

        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.kind, LessonType::Practice);
        assert_eq!(lesson.location, None);
        assert_eq!(lesson.instructor, None);
    }

    #[test]
    fn serializes_type_with_source_label() {
        let lesson = Lesson {
            subject: "Матанализ".to_string(),
            kind: LessonType::Exam,
            time: LessonTime::new(hm(9, 0), hm(12, 0)),
            location: None,
            instructor: None,
            number: 1,
        };

        let value = serde_json::to_value(&lesson).unwrap();
        assert_eq!(value["type"], "ЭКЗ");
        assert_eq!(value["time"], "09:00 — 12:00");
        assert!(value.get("location").is_none());
    }

    #[test]
    fn lesson_type_parses_both_label_sets() {
        assert_eq!("ЛР".parse::<LessonType>().unwrap(), LessonType::Lab);
        assert_eq!("lab".parse::<LessonType>().unwrap(), LessonType::Lab);
        assert!("seminar".parse::<LessonType>().is_err());
    }
}
