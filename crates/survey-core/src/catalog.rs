//! Canonical survey field catalog
//!
//! The single ordered list of survey questions. The question/answer export,
//! the bulk table and the notification body all walk this list, so adding a
//! question here is the only change needed to surface it everywhere.

/// Placeholder shown for an unanswered question in single-response output
pub const NOT_SPECIFIED: &str = "Not specified";

/// Section a question belongs to, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Academic,
    Social,
    Environment,
    FuturePlans,
    Comments,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Personal => "Personal Information",
            Section::Academic => "Academic Experience",
            Section::Social => "Social Experience",
            Section::Environment => "School Environment",
            Section::FuturePlans => "Future Plans",
            Section::Comments => "Comments",
        }
    }
}

/// How the question is answered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Radio group or select: exactly one option
    Choice,
    /// Checkbox group: any number of options
    MultiChoice,
    /// Free text
    Text,
}

impl InputKind {
    /// Message shown when a required question is left blank
    pub fn missing_message(&self) -> &'static str {
        match self {
            InputKind::Choice => "Please select an option",
            InputKind::MultiChoice => "Please select at least one option",
            InputKind::Text => "This field is required",
        }
    }
}

/// One survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form field name, also the key in stored `data`
    pub key: &'static str,
    /// Question label in the question/answer export and notification body
    pub label: &'static str,
    /// Column header in the bulk table
    pub column: &'static str,
    /// Spreadsheet column width (characters) in the bulk table
    pub width: u16,
    pub section: Section,
    pub input: InputKind,
}

impl FieldSpec {
    /// Free-text comments are optional and omitted from single-response
    /// output when blank instead of showing a placeholder
    pub fn is_comment(&self) -> bool {
        self.section == Section::Comments
    }
}

const fn field(
    key: &'static str,
    label: &'static str,
    column: &'static str,
    width: u16,
    section: Section,
    input: InputKind,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        column,
        width,
        section,
        input,
    }
}

use InputKind::{Choice, MultiChoice, Text};
use Section::{Academic, Comments, Environment, FuturePlans, Personal, Social};

/// Every survey question in presentation order
pub const FIELDS: &[FieldSpec] = &[
    field("age", "Age Range", "Age Range", 12, Personal, Choice),
    field("grade", "Grade Level", "Grade Level", 12, Personal, Choice),
    field("schoolType", "School Type", "School Type", 15, Personal, Choice),
    field("academicPerformance", "Academic Performance", "Academic Performance", 20, Academic, Choice),
    field("studyTime", "Study Time", "Study Time", 12, Academic, Choice),
    field("favoriteSubjects", "Favorite Subjects", "Favorite Subjects", 25, Academic, MultiChoice),
    field("academicChallenge", "Biggest Academic Challenge", "Academic Challenge", 20, Academic, Choice),
    field("socialLife", "Social Life", "Social Life", 15, Social, Choice),
    field("extracurriculars", "Extracurricular Activities", "Extracurricular Activities", 25, Social, MultiChoice),
    field("bullying", "Bullying Experience", "Bullying Experience", 18, Social, Choice),
    field("facilities", "Facilities Rating", "Facilities Rating", 18, Environment, Choice),
    field("teachers", "Teacher Rating", "Teacher Rating", 15, Environment, Choice),
    field("safety", "Safety Rating", "Safety Rating", 15, Environment, Choice),
    field("futurePlans", "Post-Graduation Plans", "Future Plans", 20, FuturePlans, Choice),
    field("preparation", "School Preparation", "School Preparation", 18, FuturePlans, Choice),
    field("bestExperience", "Best Experience", "Best Experience", 30, Comments, Text),
    field("worstExperience", "Challenging Experience", "Challenging Experience", 30, Comments, Text),
    field("suggestions", "Suggestions", "Suggestions", 30, Comments, Text),
    field("additionalComments", "Additional Comments", "Additional Comments", 30, Comments, Text),
];

/// Look up a question by form field name
pub fn find(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

/// Keys of every non-comment question, the default required set
pub fn required_keys() -> Vec<&'static str> {
    FIELDS
        .iter()
        .filter(|f| !f.is_comment())
        .map(|f| f.key)
        .collect()
}
