//! Feedback form rules shared by the browser form and any submission backend.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{SUBJECT_PREFIX, SUBJECT_SUMMARY_MAX_CHARS, SUMMARY_MAX_UNITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("summary is {units} units; the limit is {max}")]
    SummaryTooLong { units: usize, max: usize },
}

const fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' | '\u{f900}'..='\u{faff}')
}

/// Weighted length of a summary: CJK ideographs count double.
#[must_use]
pub fn summary_units(text: &str) -> usize {
    text.chars().map(|c| if is_cjk(c) { 2 } else { 1 }).sum()
}

/// Keep the longest prefix of `text` that fits in the summary limit.
#[must_use]
pub fn truncate_summary(text: &str) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += if is_cjk(*c) { 2 } else { 1 };
            used <= SUMMARY_MAX_UNITS
        })
        .collect()
}

/// Raw form contents as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub summary: String,
    pub message: String,
}

/// A trimmed, validated submission; this is the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub summary: String,
    pub message: String,
}

impl FeedbackForm {
    /// Trim every field and check the form is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank or the summary exceeds the
    /// weighted length limit.
    pub fn validate(&self) -> Result<FeedbackSubmission, FeedbackError> {
        let fields = [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("summary", self.summary.trim()),
            ("message", self.message.trim()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(FeedbackError::MissingField(*field));
        }
        let units = summary_units(fields[2].1);
        if units > SUMMARY_MAX_UNITS {
            return Err(FeedbackError::SummaryTooLong {
                units,
                max: SUMMARY_MAX_UNITS,
            });
        }
        Ok(FeedbackSubmission {
            name: fields[0].1.to_string(),
            email: fields[1].1.to_string(),
            summary: fields[2].1.to_string(),
            message: fields[3].1.to_string(),
        })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl FeedbackSubmission {
    /// Email subject: prefix plus the summary cut at 50 characters.
    #[must_use]
    pub fn email_subject(&self) -> String {
        let mut chars = self.summary.chars();
        let head: String = chars.by_ref().take(SUBJECT_SUMMARY_MAX_CHARS).collect();
        if chars.next().is_some() {
            format!("{SUBJECT_PREFIX}{head}…")
        } else {
            format!("{SUBJECT_PREFIX}{head}")
        }
    }

    #[must_use]
    pub fn email_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSummary: {}\n\nMessage:\n{}",
            self.name, self.email, self.summary, self.message
        )
    }
}

/// Submission lifecycle shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

keyed_enum!(FeedbackStatus {
    Idle => "idle",
    Sending => "sending",
    Success => "success",
    Error => "error",
});
