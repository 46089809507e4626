//! Field-level validation for the create dialog.
//!
//! A [`RuleSet`] lists one [`Rule`] per field. [`RuleSet::validate`] checks a
//! [`UserDraft`] against every rule and returns all failures at once, keyed by
//! field, so the dialog can show each message under its input.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Field, UserDraft};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static regex should not panic"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("static regex should not panic"));

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("static regex should not panic")
});

/// Per-field error messages. Empty means the draft is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// What a single field must satisfy.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Non-empty.
    Required,
    /// Non-empty and at least `n` characters.
    RequiredMinLen(usize),
    /// Non-empty and matching an email shape.
    RequiredEmail,
    /// Exactly ten ASCII digits.
    RequiredPhone,
    /// May be empty; otherwise at least `n` characters.
    OptionalMinLen(usize),
    /// May be empty; otherwise an `ftp`, `http` or `https` URL.
    OptionalUrl,
}

impl Rule {
    fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::RequiredMinLen(n) => value.chars().count() >= *n,
            Rule::RequiredEmail => !value.is_empty() && EMAIL_RE.is_match(value),
            Rule::RequiredPhone => PHONE_RE.is_match(value),
            Rule::OptionalMinLen(n) => value.is_empty() || value.chars().count() >= *n,
            Rule::OptionalUrl => value.is_empty() || WEBSITE_RE.is_match(value),
        }
    }
}

/// The rules a create form enforces, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSet {
    rules: Vec<(Field, Rule, &'static str)>,
}

impl RuleSet {
    /// The full create screen: every field of the draft is checked.
    pub fn creator() -> Self {
        Self {
            rules: vec![
                (
                    Field::Name,
                    Rule::RequiredMinLen(3),
                    "Name is required and must be at least 3 characters.",
                ),
                (
                    Field::Email,
                    Rule::RequiredEmail,
                    "Email is required and must be a valid email format.",
                ),
                (
                    Field::Phone,
                    Rule::RequiredPhone,
                    "Phone is required and must be a valid phone number.",
                ),
                (Field::Street, Rule::Required, "Street address is required."),
                (Field::City, Rule::Required, "City is required."),
                (
                    Field::CompanyName,
                    Rule::OptionalMinLen(3),
                    "Company name must be at least 3 characters if provided.",
                ),
                (
                    Field::Website,
                    Rule::OptionalUrl,
                    "Website must be a valid URL if provided.",
                ),
            ],
        }
    }

    /// The manager's add form: four required fields, no shape checks.
    pub fn quick_add() -> Self {
        Self {
            rules: vec![
                (Field::Name, Rule::Required, "Name is required."),
                (Field::Email, Rule::Required, "Email is required."),
                (Field::Phone, Rule::Required, "Phone is required."),
                (Field::Website, Rule::Required, "Website is required."),
            ],
        }
    }

    /// Fields this rule set covers, in form order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.rules.iter().map(|(f, _, _)| *f).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Whether the input for `field` should carry the `required` attribute.
    pub fn is_required(&self, field: Field) -> bool {
        self.rules.iter().any(|(f, rule, _)| {
            *f == field
                && matches!(
                    rule,
                    Rule::Required
                        | Rule::RequiredMinLen(_)
                        | Rule::RequiredEmail
                        | Rule::RequiredPhone
                )
        })
    }

    pub fn validate(&self, draft: &UserDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, rule, message) in &self.rules {
            if !rule.check(draft.get(*field)) {
                errors.entry(*field).or_insert_with(|| message.to_string());
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        let mut d = UserDraft::default();
        d.set_name("Bob");
        d.email = "bob@x.com".to_string();
        d.phone = "5551234567".to_string();
        d.street = "Main".to_string();
        d.city = "Town".to_string();
        d
    }

    #[test]
    fn test_valid_draft_without_optional_fields() {
        assert!(RuleSet::creator().validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_valid_draft_with_optional_fields() {
        let mut d = valid_draft();
        d.company_name = "Acme".to_string();
        d.website = "https://bob.example".to_string();
        assert!(RuleSet::creator().validate(&d).is_empty());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut d = valid_draft();
        d.set_name("Bo");
        let errors = RuleSet::creator().validate(&d);
        assert_eq!(errors.len(), 1);
        assert!(errors[&Field::Name].contains("at least 3"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut d = valid_draft();
        d.set_name("Zoë");
        assert!(RuleSet::creator().validate(&d).is_empty());
    }

    #[test]
    fn test_email_shape() {
        let rules = RuleSet::creator();
        for bad in ["", "bob", "bob@x", "@x.com", "bob@.com"] {
            let mut d = valid_draft();
            d.email = bad.to_string();
            assert!(
                rules.validate(&d).contains_key(&Field::Email),
                "{bad:?} should be rejected"
            );
        }
        let mut d = valid_draft();
        d.email = "b.o.b@mail.x.org".to_string();
        assert!(rules.validate(&d).is_empty());
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let rules = RuleSet::creator();
        for bad in ["", "555123456", "55512345678", "555-123-4567", "555123456a"] {
            let mut d = valid_draft();
            d.phone = bad.to_string();
            assert!(
                rules.validate(&d).contains_key(&Field::Phone),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_optional_fields_checked_only_when_present() {
        let rules = RuleSet::creator();

        let mut d = valid_draft();
        d.company_name = "Ac".to_string();
        assert!(rules.validate(&d).contains_key(&Field::CompanyName));

        let mut d = valid_draft();
        d.website = "bob.example".to_string();
        assert!(rules.validate(&d).contains_key(&Field::Website));

        let mut d = valid_draft();
        d.website = "ftp://files.example".to_string();
        assert!(rules.validate(&d).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = RuleSet::creator().validate(&UserDraft::default());
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Phone, Field::Street, Field::City]
        );
    }

    #[test]
    fn test_quick_add_only_requires_presence() {
        let rules = RuleSet::quick_add();
        let mut d = UserDraft::default();
        d.set_name("Al");
        d.email = "al".to_string();
        d.phone = "12".to_string();
        d.website = "al.dev".to_string();
        assert!(rules.validate(&d).is_empty());

        d.website.clear();
        assert_eq!(rules.validate(&d).len(), 1);
        assert!(rules.is_required(Field::Website));
        assert!(!rules.is_required(Field::Street));
    }

    #[test]
    fn test_fields_in_form_order() {
        assert_eq!(
            RuleSet::quick_add().fields(),
            vec![Field::Name, Field::Email, Field::Phone, Field::Website]
        );
    }
}
