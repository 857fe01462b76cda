//! Exam result entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Letter grades on the institutional scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "grade")]
pub enum Grade {
    /// 90-100.
    #[serde(rename = "A+")]
    #[sqlx(rename = "A+")]
    APlus,
    /// 80-89.
    #[serde(rename = "A")]
    #[sqlx(rename = "A")]
    A,
    /// 70-79.
    #[serde(rename = "B+")]
    #[sqlx(rename = "B+")]
    BPlus,
    /// 60-69.
    #[serde(rename = "B")]
    #[sqlx(rename = "B")]
    B,
    /// 50-59.
    #[serde(rename = "C+")]
    #[sqlx(rename = "C+")]
    CPlus,
    /// 40-49.
    #[serde(rename = "C")]
    #[sqlx(rename = "C")]
    C,
    /// Below 40.
    #[serde(rename = "F")]
    #[sqlx(rename = "F")]
    F,
}

impl Grade {
    /// Derive the grade from marks on a 0-100 scale.
    pub fn from_marks(marks: i32) -> Self {
        match marks {
            90..=100 => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::BPlus,
            60..=69 => Self::B,
            50..=59 => Self::CPlus,
            40..=49 => Self::C,
            _ => Self::F,
        }
    }

    /// Return the grade label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = campushub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "F" => Ok(Self::F),
            _ => Err(campushub_core::AppError::validation(format!(
                "Invalid grade: '{s}'"
            ))),
        }
    }
}

/// An exam result. Unique per (student, subject, exam type).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// The student profile this result belongs to.
    pub student_id: Uuid,
    /// The examined subject.
    pub subject_id: Uuid,
    /// Marks obtained, 0-100.
    pub marks_obtained: i32,
    /// Total marks for the exam.
    pub total_marks: i32,
    /// Awarded letter grade.
    pub grade: Grade,
    /// Date the exam was held.
    pub exam_date: NaiveDate,
    /// Kind of exam (e.g. `Final Exam`).
    pub exam_type: String,
}
