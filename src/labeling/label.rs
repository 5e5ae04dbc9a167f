use serde::{Deserialize, Serialize};
use std::fmt;

pub const OUTPUT_HEADERS: [&str; 5] = ["entryid", "Excerpt", "Dual-use", "Maybe", "No"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    DualUse,
    Maybe,
    NotDualUse,
}

impl Label {
    pub fn flags(self) -> (u8, u8, u8) {
        match self {
            Label::DualUse => (1, 0, 0),
            Label::Maybe => (0, 1, 0),
            Label::NotDualUse => (0, 0, 1),
        }
    }

    /// Anything but exactly one set flag is rejected.
    pub fn from_flags(dual_use: u8, maybe: u8, no: u8) -> Option<Self> {
        match (dual_use, maybe, no) {
            (1, 0, 0) => Some(Label::DualUse),
            (0, 1, 0) => Some(Label::Maybe),
            (0, 0, 1) => Some(Label::NotDualUse),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::DualUse => write!(f, "dual-use"),
            Label::Maybe => write!(f, "maybe"),
            Label::NotDualUse => write!(f, "not dual-use"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Label(Label),
    Quit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Choice::Label(Label::DualUse)),
            "0" => Some(Choice::Label(Label::NotDualUse)),
            "m" => Some(Choice::Label(Label::Maybe)),
            "q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    pub identifier: String,
    pub excerpt: String,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRow {
    #[serde(rename = "entryid")]
    pub identifier: String,
    #[serde(rename = "Excerpt")]
    pub excerpt: String,
    #[serde(rename = "Dual-use")]
    pub dual_use: u8,
    #[serde(rename = "Maybe")]
    pub maybe: u8,
    #[serde(rename = "No")]
    pub no: u8,
}

impl From<&LabelRecord> for LabelRow {
    fn from(record: &LabelRecord) -> Self {
        let (dual_use, maybe, no) = record.label.flags();
        Self {
            identifier: record.identifier.clone(),
            excerpt: record.excerpt.clone(),
            dual_use,
            maybe,
            no,
        }
    }
}

impl TryFrom<LabelRow> for LabelRecord {
    type Error = String;

    fn try_from(row: LabelRow) -> Result<Self, Self::Error> {
        let label = Label::from_flags(row.dual_use, row.maybe, row.no).ok_or_else(|| {
            format!(
                "entry {} has flags Dual-use={} Maybe={} No={}, expected exactly one set",
                row.identifier, row.dual_use, row.maybe, row.no
            )
        })?;

        Ok(Self {
            identifier: row.identifier,
            excerpt: row.excerpt,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::parse("1"), Some(Choice::Label(Label::DualUse)));
        assert_eq!(Choice::parse(" 0\n"), Some(Choice::Label(Label::NotDualUse)));
        assert_eq!(Choice::parse("M"), Some(Choice::Label(Label::Maybe)));
        assert_eq!(Choice::parse("  Q "), Some(Choice::Quit));
        assert_eq!(Choice::parse("x"), None);
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("10"), None);
    }

    #[test]
    fn test_each_label_sets_exactly_one_flag() {
        assert_eq!(Label::DualUse.flags(), (1, 0, 0));
        assert_eq!(Label::Maybe.flags(), (0, 1, 0));
        assert_eq!(Label::NotDualUse.flags(), (0, 0, 1));
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        assert_eq!(Label::from_flags(1, 1, 0), None);
        assert_eq!(Label::from_flags(0, 0, 0), None);
        assert_eq!(Label::from_flags(2, 0, 0), None);

        let row = LabelRow {
            identifier: "A".to_string(),
            excerpt: "text".to_string(),
            dual_use: 0,
            maybe: 0,
            no: 0,
        };
        assert!(LabelRecord::try_from(row).is_err());
    }
}
