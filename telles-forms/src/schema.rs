//! Field names and how each one is shared between rows.
//!
//! A `PageSchema` lists the fields a page variant renders per row, in
//! column order, together with the `SyncPolicy` that decides whether the
//! anchor row's value is copied into the other rows.

use crate::error::FormError;
use std::collections::HashSet;

/// Every field name any row template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    AcademicYear,
    Department,
    Classroom,
    CourseYears,
    StudentId,
    Id,
    Password,
    NewPassword,
    Number,
    Fullname,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::AcademicYear,
        FieldName::Department,
        FieldName::Classroom,
        FieldName::CourseYears,
        FieldName::StudentId,
        FieldName::Id,
        FieldName::Password,
        FieldName::NewPassword,
        FieldName::Number,
        FieldName::Fullname,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FieldName::AcademicYear => "academic_year",
            FieldName::Department => "department",
            FieldName::Classroom => "classroom",
            FieldName::CourseYears => "course_years",
            FieldName::StudentId => "student_id",
            FieldName::Id => "id",
            FieldName::Password => "password",
            FieldName::NewPassword => "new_password",
            FieldName::Number => "number",
            FieldName::Fullname => "fullname",
        }
    }

    /// The repeated form field name the backend reads, e.g. `student_id[]`.
    pub fn form_name(&self) -> String {
        format!("{}[]", self.key())
    }

    /// Accepts both `student_id` and `student_id[]`.
    pub fn parse(name: &str) -> Option<FieldName> {
        let key = name.strip_suffix("[]").unwrap_or(name);
        FieldName::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Column heading shown above the rows.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::AcademicYear => "入学年度",
            FieldName::Department => "学科",
            FieldName::Classroom => "クラス",
            FieldName::CourseYears => "年制",
            FieldName::StudentId | FieldName::Id => "ID",
            FieldName::Password => "パスワード",
            FieldName::NewPassword => "新しいパスワード",
            FieldName::Number => "出席番号",
            FieldName::Fullname => "氏名",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::AcademicYear => "例: 2024",
            FieldName::StudentId | FieldName::Id => "ID",
            FieldName::Password | FieldName::NewPassword => "パスワード",
            FieldName::Number => "出席番号",
            FieldName::Fullname => "氏名",
            FieldName::Department | FieldName::Classroom | FieldName::CourseYears => "",
        }
    }

    /// Text shown for a locked copy of this field on a non-anchor row.
    ///
    /// Numeric course lengths read as "3年制"; the submitted value is untouched.
    pub fn display_value(&self, value: &str) -> String {
        match self {
            FieldName::CourseYears if !value.is_empty() && reads_as_number(value) => {
                format!("{value}年制")
            }
            _ => value.to_string(),
        }
    }
}

/// Whether the browser's `Number()` conversion yields a number for `value`.
///
/// Surrounding whitespace is ignored, a blank string counts as zero, and
/// decimals, exponents, `Infinity` and `0x`/`0o`/`0b` integers are accepted.
fn reads_as_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }
    // f64 parsing also takes "inf" and "nan", which the browser does not
    trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && trimmed.parse::<f64>().is_ok()
}

/// How the anchor row's value for a field reaches the other rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Copied verbatim and shown read-only on every other row.
    Synchronized,
    /// First four characters copied, skipped while the anchor value is empty.
    PrefixPropagated,
    /// Never copied.
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    /// Options come from the page configuration.
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub policy: SyncPolicy,
    pub input: InputKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: FieldName, policy: SyncPolicy, input: InputKind) -> Self {
        Self {
            name,
            policy,
            input,
            required: true,
        }
    }
}

/// The page a set of rows belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    #[default]
    StudentSignup,
    PasswordReset,
}

/// Validated, ordered list of fields for one page variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSchema {
    variant: PageVariant,
    fields: Vec<FieldSpec>,
}

impl PageSchema {
    /// Build a schema, rejecting empty field lists and repeated names.
    pub fn new(variant: PageVariant, fields: Vec<FieldSpec>) -> Result<Self, FormError> {
        if fields.is_empty() {
            return Err(FormError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.name) {
                return Err(FormError::DuplicateField(spec.name));
            }
        }
        Ok(Self { variant, fields })
    }

    pub fn for_variant(variant: PageVariant) -> Self {
        match variant {
            PageVariant::StudentSignup => Self::student_signup(),
            PageVariant::PasswordReset => Self::password_reset(),
        }
    }

    /// Bulk student signup: year, department, classroom and course length are
    /// shared; ID, password and attendance number share a four character prefix.
    pub fn student_signup() -> Self {
        use FieldName::*;
        use InputKind::*;
        use SyncPolicy::*;
        Self::builtin(
            PageVariant::StudentSignup,
            vec![
                FieldSpec::new(AcademicYear, Synchronized, Text),
                FieldSpec::new(Department, Synchronized, Select),
                FieldSpec::new(Classroom, Synchronized, Text),
                FieldSpec::new(CourseYears, Synchronized, Select),
                FieldSpec::new(StudentId, PrefixPropagated, Text),
                FieldSpec::new(FieldName::Password, PrefixPropagated, InputKind::Password),
                FieldSpec::new(Number, PrefixPropagated, Text),
                FieldSpec::new(Fullname, Independent, Text),
            ],
        )
    }

    /// Password reset rows: every column is filled in by hand.
    pub fn password_reset() -> Self {
        use FieldName::*;
        use InputKind::*;
        use SyncPolicy::*;
        Self::builtin(
            PageVariant::PasswordReset,
            vec![
                FieldSpec::new(Id, Independent, Text),
                FieldSpec::new(Classroom, Independent, Text),
                FieldSpec::new(Number, Independent, Text),
                FieldSpec::new(Fullname, Independent, Text),
                FieldSpec::new(NewPassword, Independent, InputKind::Password),
            ],
        )
    }

    /// Runs the same checks as `new` on a fixed field list. The built-in
    /// lists are non-empty and duplicate-free, so the fallback never fires.
    fn builtin(variant: PageVariant, fields: Vec<FieldSpec>) -> Self {
        Self::new(variant, fields.clone()).unwrap_or_else(|e| {
            log::error!("built-in {variant:?} schema rejected: {e}");
            Self { variant, fields }
        })
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn spec(&self, name: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.spec(name).is_some()
    }

    pub fn policy(&self, name: FieldName) -> Option<SyncPolicy> {
        self.spec(name).map(|f| f.policy)
    }

    /// Field names with the given policy, in column order.
    pub fn with_policy(&self, policy: SyncPolicy) -> impl Iterator<Item = FieldName> + '_ {
        self.fields
            .iter()
            .filter(move |f| f.policy == policy)
            .map(|f| f.name)
    }
}
