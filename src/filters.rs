//! Applicant filter criteria and the operations user input performs on them.
//!
//! [`FilterState`] is the single mutable record behind the filter form. Every
//! field starts empty and is only ever changed by an explicit user action:
//! editing a text field, cycling a closed choice, toggling the boolean, or
//! clearing one field back to its empty value. The non-empty subset is what
//! gets serialized onto the outgoing search request.

use clap::ValueEnum;

/// Gender options offered by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Return the value the service expects on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Disability-status options offered by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Disability {
    Yes,
    No,
}

impl Disability {
    const ALL: [Self; 2] = [Self::Yes, Self::No];

    /// Return the value the service expects on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Grade-level options offered by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GradeLevel {
    HighSchool,
    Undergraduate,
    Graduate,
}

impl GradeLevel {
    const ALL: [Self; 3] = [Self::HighSchool, Self::Undergraduate, Self::Graduate];

    /// Return the value the service expects on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool => "high-school",
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
        }
    }
}

/// How a filter field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited character by character.
    Text,
    /// Closed enumeration, cycled through its options.
    Choice,
    /// Boolean, toggled on and off.
    Toggle,
}

/// Identifies one field of the filter form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Gpa,
    FieldOfStudy,
    Ethnicity,
    Gender,
    Disability,
    Location,
    GradeLevel,
    FinancialNeed,
    Extracurricular,
}

impl FilterField {
    /// All fields in the order the form presents them.
    pub const ALL: [Self; 9] = [
        Self::Gpa,
        Self::FieldOfStudy,
        Self::Ethnicity,
        Self::Gender,
        Self::Disability,
        Self::Location,
        Self::GradeLevel,
        Self::FinancialNeed,
        Self::Extracurricular,
    ];

    /// Human-readable label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gpa => "GPA",
            Self::FieldOfStudy => "Field of Study",
            Self::Ethnicity => "Ethnicity",
            Self::Gender => "Gender",
            Self::Disability => "Disability Status",
            Self::Location => "Location",
            Self::GradeLevel => "Grade Level",
            Self::FinancialNeed => "Financial Need",
            Self::Extracurricular => "Extracurricular Activities",
        }
    }

    /// Query-parameter key the service recognizes for this field.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::Gpa => "gpa",
            Self::FieldOfStudy => "field",
            Self::Ethnicity => "ethnicity",
            Self::Gender => "gender",
            Self::Disability => "disability",
            Self::Location => "location",
            Self::GradeLevel => "gradeLevel",
            Self::FinancialNeed => "financialNeed",
            Self::Extracurricular => "extracurricular",
        }
    }

    /// Hint shown while the field is empty.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Gpa => "Enter GPA (e.g., 3.5)",
            Self::FieldOfStudy => "Enter field of study",
            Self::Ethnicity => "Enter ethnicity",
            Self::Gender => "Select gender",
            Self::Disability => "Select status",
            Self::Location => "State or country",
            Self::GradeLevel => "Select grade level",
            Self::FinancialNeed => "Toggle with space",
            Self::Extracurricular => "Enter your extracurricular activities",
        }
    }

    /// Editing behaviour of the field.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Gender | Self::Disability | Self::GradeLevel => FieldKind::Choice,
            Self::FinancialNeed => FieldKind::Toggle,
            _ => FieldKind::Text,
        }
    }

    /// Whether a typed character may be appended to this field.
    ///
    /// GPA accepts only digits and a decimal point, mirroring a numeric
    /// input; range checking is deliberately left to the service.
    #[must_use]
    pub fn accepts_char(self, ch: char) -> bool {
        match self.kind() {
            FieldKind::Text if self == Self::Gpa => ch.is_ascii_digit() || ch == '.',
            FieldKind::Text => !ch.is_control(),
            FieldKind::Choice | FieldKind::Toggle => false,
        }
    }
}

/// The applicant criteria currently entered into the filter form.
///
/// Setting a field replaces that field alone; [`clear`](Self::clear) resets
/// exactly one field to its empty value. Values are not validated here —
/// out-of-range input passes through to the service untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub gpa: String,
    pub field_of_study: String,
    pub ethnicity: String,
    pub gender: Option<Gender>,
    pub disability: Option<Disability>,
    pub location: String,
    pub grade_level: Option<GradeLevel>,
    pub financial_need: bool,
    pub extracurricular: String,
}

impl FilterState {
    /// Create an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the displayable value of a field, or `None` when it is unset.
    ///
    /// The boolean field counts as set only when true, matching how the
    /// applied-filter chips treat it.
    #[must_use]
    pub fn value(&self, field: FilterField) -> Option<String> {
        let value = match field {
            FilterField::Gpa => self.gpa.clone(),
            FilterField::FieldOfStudy => self.field_of_study.clone(),
            FilterField::Ethnicity => self.ethnicity.clone(),
            FilterField::Gender => self.gender.map(Gender::as_str).unwrap_or_default().into(),
            FilterField::Disability => self
                .disability
                .map(Disability::as_str)
                .unwrap_or_default()
                .into(),
            FilterField::Location => self.location.clone(),
            FilterField::GradeLevel => self
                .grade_level
                .map(GradeLevel::as_str)
                .unwrap_or_default()
                .into(),
            FilterField::FinancialNeed => {
                if self.financial_need {
                    "true".into()
                } else {
                    String::new()
                }
            }
            FilterField::Extracurricular => self.extracurricular.clone(),
        };
        if value.is_empty() { None } else { Some(value) }
    }

    /// Reset exactly one field to its empty value, leaving the rest intact.
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Gpa => self.gpa.clear(),
            FilterField::FieldOfStudy => self.field_of_study.clear(),
            FilterField::Ethnicity => self.ethnicity.clear(),
            FilterField::Gender => self.gender = None,
            FilterField::Disability => self.disability = None,
            FilterField::Location => self.location.clear(),
            FilterField::GradeLevel => self.grade_level = None,
            FilterField::FinancialNeed => self.financial_need = false,
            FilterField::Extracurricular => self.extracurricular.clear(),
        }
    }

    /// Mutable access to the text backing a [`FieldKind::Text`] field.
    pub fn text_mut(&mut self, field: FilterField) -> Option<&mut String> {
        match field {
            FilterField::Gpa => Some(&mut self.gpa),
            FilterField::FieldOfStudy => Some(&mut self.field_of_study),
            FilterField::Ethnicity => Some(&mut self.ethnicity),
            FilterField::Location => Some(&mut self.location),
            FilterField::Extracurricular => Some(&mut self.extracurricular),
            _ => None,
        }
    }

    /// Step a choice field forward through unset and each option in turn.
    pub fn cycle(&mut self, field: FilterField) {
        match field {
            FilterField::Gender => self.gender = cycle_option(&Gender::ALL, self.gender, 1),
            FilterField::Disability => {
                self.disability = cycle_option(&Disability::ALL, self.disability, 1);
            }
            FilterField::GradeLevel => {
                self.grade_level = cycle_option(&GradeLevel::ALL, self.grade_level, 1);
            }
            _ => {}
        }
    }

    /// Step a choice field backward through its options and unset.
    pub fn cycle_back(&mut self, field: FilterField) {
        match field {
            FilterField::Gender => self.gender = cycle_option(&Gender::ALL, self.gender, -1),
            FilterField::Disability => {
                self.disability = cycle_option(&Disability::ALL, self.disability, -1);
            }
            FilterField::GradeLevel => {
                self.grade_level = cycle_option(&GradeLevel::ALL, self.grade_level, -1);
            }
            _ => {}
        }
    }

    /// Flip the boolean field. No-op on any other field.
    pub fn toggle(&mut self, field: FilterField) {
        if field == FilterField::FinancialNeed {
            self.financial_need = !self.financial_need;
        }
    }

    /// Ordered `(wire key, value)` pairs for every non-empty field.
    ///
    /// This is the exact set of filter parameters that joins the outgoing
    /// request — unset fields never appear.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        FilterField::ALL
            .iter()
            .filter_map(|&field| self.value(field).map(|value| (field.wire_key(), value)))
            .collect()
    }

    /// Fields currently set, paired with their display values.
    #[must_use]
    pub fn applied(&self) -> Vec<(FilterField, String)> {
        FilterField::ALL
            .iter()
            .filter_map(|&field| self.value(field).map(|value| (field, value)))
            .collect()
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|&field| self.value(field).is_none())
    }
}

/// Step an optional selection through `None` and each variant of `options`.
fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, step: i8) -> Option<T> {
    let position = current.and_then(|value| options.iter().position(|option| *option == value));
    match (position, step >= 0) {
        (None, true) => options.first().copied(),
        (None, false) => options.last().copied(),
        (Some(index), true) => {
            if index + 1 < options.len() {
                Some(options[index + 1])
            } else {
                None
            }
        }
        (Some(index), false) => {
            if index == 0 {
                None
            } else {
                Some(options[index - 1])
            }
        }
    }
}
