//! Named field-extraction rules for student blocks
//!
//! Each field is described by one [`FieldRule`]: a label, the grammar of the
//! value that follows it, and the default used when the label is missing.
//! Rules run independently against the whole block, so a missing or
//! reordered label never disturbs any other field.

use crate::app::models::ExtractedFields;
use crate::constants::{DEFAULT_SCORE_TOKEN, UNKNOWN_FIELD};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Labels that terminate a free-text value
const NEXT_LABEL: &str = r"SEAT\s+NO\.?\s*:|\bNAME\s*:|\b(?:MOTHER|FATHER|GUARDIAN)(?:'S)?(?:\s+NAME)?\s*:|\b(?:PRN|REG(?:ISTRATION)?\.?\s+NO\.?)\s*:|\b(?:[A-Z]+\s+)?YEAR\s+SGPA\b|\bSGPA\s*:|\bTOTAL\s+CREDITS\b";

/// Scalar fields recognised in a student block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SeatNumber,
    Name,
    GuardianName,
    RegistrationNumber,
    AggregateScore,
    EarnedCredits,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::SeatNumber,
        Field::Name,
        Field::GuardianName,
        Field::RegistrationNumber,
        Field::AggregateScore,
        Field::EarnedCredits,
    ];

    /// Value recorded when the field's label is not found
    pub fn default_value(&self) -> &'static str {
        match self {
            Field::AggregateScore => DEFAULT_SCORE_TOKEN,
            Field::EarnedCredits => "0",
            _ => UNKNOWN_FIELD,
        }
    }
}

/// Which match wins when a label occurs more than once in a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Last,
}

/// A label followed directly by another field's label has no value
static LABEL_AT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{NEXT_LABEL})")).expect("valid label start regex")
});

/// Text before a `NAME :` label that makes it a guardian label
static GUARDIAN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:MOTHER|FATHER|GUARDIAN)(?:'S)?\s+$").expect("valid guardian prefix regex")
});

/// Label, value grammar and default for one field
#[derive(Debug)]
pub struct FieldRule {
    pub field: Field,
    pattern: Regex,
    occurrence: Occurrence,
    excluded_prefix: Option<&'static Regex>,
}

impl FieldRule {
    /// Build a rule from a pattern exposing a `value` capture group
    fn new(field: Field, pattern: &str, occurrence: Occurrence) -> Self {
        Self {
            field,
            pattern: Regex::new(pattern).expect("valid field rule regex"),
            occurrence,
            excluded_prefix: None,
        }
    }

    /// Ignore label matches whose preceding text ends with `prefix`
    fn excluding_prefix(mut self, prefix: &'static Regex) -> Self {
        self.excluded_prefix = Some(prefix);
        self
    }

    /// Every usable value for this field, in document order
    ///
    /// Matching resumes right after each value, so a label that terminated
    /// one value can still start the next match. Values that are themselves
    /// a label, and labels carrying an excluded prefix, are skipped.
    fn candidates(&self, text: &str) -> Vec<String> {
        let mut values = Vec::new();
        let mut start = 0;

        while start <= text.len() {
            let Some(captures) = self.pattern.captures_at(text, start) else {
                break;
            };
            let Some(whole) = captures.get(0) else {
                break;
            };
            let value = captures.name("value");
            start = value.map_or(whole.end(), |m| m.end()).max(whole.start() + 1);

            let excluded = self
                .excluded_prefix
                .is_some_and(|prefix| prefix.is_match(&text[..whole.start()]));
            let Some(value) = value.filter(|_| !excluded) else {
                continue;
            };
            if LABEL_AT_START.is_match(&text[value.start()..]) {
                continue;
            }

            let value = value.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
            if !value.is_empty() {
                values.push(value);
            }
        }

        values
    }

    /// Find this field's value in `text`
    ///
    /// Internal whitespace is collapsed to single spaces. An empty value is
    /// treated as a miss.
    pub fn lookup(&self, text: &str) -> Option<String> {
        let candidates = self.candidates(text);
        match self.occurrence {
            Occurrence::First => candidates.into_iter().next(),
            Occurrence::Last => candidates.into_iter().last(),
        }
    }

    /// Find this field's value or fall back to its default
    pub fn lookup_or_default(&self, text: &str) -> String {
        self.lookup(text)
            .unwrap_or_else(|| self.field.default_value().to_string())
    }
}

fn free_text_pattern(label: &str) -> String {
    format!(r"(?m){label}[ \t]*(?P<value>.*?)[ \t]*(?:{NEXT_LABEL}|$)")
}

static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            Field::SeatNumber,
            r"SEAT\s+NO\.?[ \t]*:[ \t]*(?P<value>[A-Za-z0-9/\-]+)",
            Occurrence::First,
        ),
        FieldRule::new(
            Field::Name,
            &free_text_pattern(r"\bNAME\s*:"),
            Occurrence::First,
        )
        .excluding_prefix(&GUARDIAN_PREFIX),
        FieldRule::new(
            Field::GuardianName,
            &free_text_pattern(r"\b(?:MOTHER|FATHER|GUARDIAN)(?:'S)?(?:\s+NAME)?\s*:"),
            Occurrence::First,
        ),
        FieldRule::new(
            Field::RegistrationNumber,
            r"\b(?:PRN|REG(?:ISTRATION)?\.?\s+NO\.?)[ \t]*:[ \t]*(?P<value>[A-Za-z0-9]+)",
            Occurrence::First,
        ),
        // Optional qualifier word, optional YEAR, then SGPA. Documents that
        // list several terms put the current one last. Any token is kept
        // raw; the classifier decides whether it is a score.
        FieldRule::new(
            Field::AggregateScore,
            r"\b(?:(?:[A-Z]+\s+)?YEAR\s+)?SGPA[ \t]*:[ \t]*(?P<value>[^\s,;]+)",
            Occurrence::Last,
        ),
        FieldRule::new(
            Field::EarnedCredits,
            r"\bTOTAL\s+CREDITS\s+EARNED[ \t]*:[ \t]*(?P<value>\d+)",
            Occurrence::First,
        ),
    ]
});

/// The rule registered for `field`
pub fn rule_for(field: Field) -> &'static FieldRule {
    FIELD_RULES
        .iter()
        .find(|rule| rule.field == field)
        .expect("every field has a registered rule")
}

/// Apply every field rule to one student block
pub fn extract_fields(text: &str) -> ExtractedFields {
    let earned_credits = rule_for(Field::EarnedCredits)
        .lookup(text)
        .and_then(|value| match value.parse::<u32>() {
            Ok(credits) => Some(credits),
            Err(e) => {
                debug!("Ignoring unparseable credit count '{}': {}", value, e);
                None
            }
        })
        .unwrap_or(0);

    ExtractedFields {
        seat_number: rule_for(Field::SeatNumber).lookup_or_default(text),
        name: rule_for(Field::Name).lookup_or_default(text),
        guardian_name: rule_for(Field::GuardianName).lookup_or_default(text),
        registration_number: rule_for(Field::RegistrationNumber).lookup_or_default(text),
        aggregate_score_raw: rule_for(Field::AggregateScore).lookup_or_default(text),
        earned_credits,
    }
}

/// True when no identity field and no score label was found in the block
pub fn is_unidentified(fields: &ExtractedFields, text: &str) -> bool {
    fields.seat_number == UNKNOWN_FIELD
        && fields.name == UNKNOWN_FIELD
        && fields.registration_number == UNKNOWN_FIELD
        && rule_for(Field::AggregateScore).lookup(text).is_none()
}
