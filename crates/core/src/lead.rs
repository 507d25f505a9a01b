//! Contact lead schema, option sets, and validation rules.
//!
//! Length and email rules run through the `validator` derive. The three
//! select fields are checked against their enumerated option sets by hand so
//! that an unknown value is reported as a field violation instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{check_one_of, violations_from, FieldViolation, SelectOption};

// ---------------------------------------------------------------------------
// Option sets
// ---------------------------------------------------------------------------

pub const PROJECT_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "new-website",
        label: "New Website",
    },
    SelectOption {
        value: "website-redesign",
        label: "Website Redesign",
    },
    SelectOption {
        value: "ecommerce-store",
        label: "eCommerce Store",
    },
    SelectOption {
        value: "web-application",
        label: "Web Application",
    },
    SelectOption {
        value: "other",
        label: "Other",
    },
];

pub const BUDGET_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "20k-50k",
        label: "₹20,000 - ₹50,000",
    },
    SelectOption {
        value: "50k-1lakh",
        label: "₹50,000 - ₹1,00,000",
    },
    SelectOption {
        value: "1lakh-2lakh",
        label: "₹1,00,000 - ₹2,00,000",
    },
    SelectOption {
        value: "2lakh-5lakh",
        label: "₹2,00,000 - ₹5,00,000",
    },
    SelectOption {
        value: "5lakh-plus",
        label: "₹5,00,000+",
    },
    SelectOption {
        value: "not-sure",
        label: "Not Sure Yet",
    },
];

pub const TIMELINE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "asap",
        label: "ASAP (1-2 weeks)",
    },
    SelectOption {
        value: "1-2-months",
        label: "1-2 months",
    },
    SelectOption {
        value: "2-3-months",
        label: "2-3 months",
    },
    SelectOption {
        value: "3-plus-months",
        label: "3+ months",
    },
    SelectOption {
        value: "exploring",
        label: "Just Exploring",
    },
];

/// All three select option sets, as served to the form view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadOptionSets {
    pub project_types: &'static [SelectOption],
    pub budgets: &'static [SelectOption],
    pub timelines: &'static [SelectOption],
}

pub fn option_sets() -> LeadOptionSets {
    LeadOptionSets {
        project_types: PROJECT_TYPE_OPTIONS,
        budgets: BUDGET_OPTIONS,
        timelines: TIMELINE_OPTIONS,
    }
}

// ---------------------------------------------------------------------------
// Lead submission
// ---------------------------------------------------------------------------

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Form order of the fields; violations are reported in this order.
const FIELD_ORDER: &[&str] = &[
    "name",
    "email",
    "phone",
    "company",
    "projectType",
    "budget",
    "timeline",
    "message",
];

/// A lead captured by the contact form.
///
/// Optional text fields are empty strings when left blank, so all eight keys
/// are always present in the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub project_type: String,

    #[serde(default)]
    pub budget: String,

    #[serde(default)]
    pub timeline: String,

    #[serde(default)]
    #[validate(length(min = 20, message = "Message must be at least 20 characters"))]
    pub message: String,
}

impl LeadSubmission {
    /// Run every rule and collect all violations at once.
    ///
    /// Each field contributes at most one violation, and a field's outcome
    /// never depends on the other fields.
    pub fn check(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violations_from(&errors),
        };

        if !self.email.is_empty()
            && !has_dotted_domain(&self.email)
            && !violations.iter().any(|v| v.field == "email")
        {
            violations.push(FieldViolation::new("email", "email", EMAIL_MESSAGE));
        }

        violations.extend(
            [
                check_one_of(
                    "projectType",
                    &self.project_type,
                    PROJECT_TYPE_OPTIONS,
                    "Please select a project type",
                ),
                check_one_of(
                    "budget",
                    &self.budget,
                    BUDGET_OPTIONS,
                    "Please select a budget range",
                ),
                check_one_of(
                    "timeline",
                    &self.timeline,
                    TIMELINE_OPTIONS,
                    "Please select a timeline",
                ),
            ]
            .into_iter()
            .flatten(),
        );

        if violations.is_empty() {
            return Ok(());
        }

        violations.sort_by_key(|v| field_position(&v.field));
        Err(violations)
    }

    /// Reset every field to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The domain must have at least two labels and end in an alphabetic TLD of
/// two or more letters. `validator` alone accepts `jo@localhost`.
fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2
        && labels.iter().all(|l| !l.is_empty())
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn field_position(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: String::new(),
            company: String::new(),
            project_type: "new-website".into(),
            budget: "not-sure".into(),
            timeline: "exploring".into(),
            message: "a".repeat(20),
        }
    }

    fn only_violation(lead: &LeadSubmission) -> FieldViolation {
        let violations = lead.check().unwrap_err();
        assert_eq!(violations.len(), 1, "expected one violation: {violations:?}");
        violations.into_iter().next().unwrap()
    }

    #[test]
    fn minimal_valid_lead_passes() {
        assert!(valid_lead().check().is_ok());
    }

    #[test]
    fn every_option_combination_passes() {
        for p in PROJECT_TYPE_OPTIONS {
            for b in BUDGET_OPTIONS {
                for t in TIMELINE_OPTIONS {
                    let lead = LeadSubmission {
                        project_type: p.value.into(),
                        budget: b.value.into(),
                        timeline: t.value.into(),
                        ..valid_lead()
                    };
                    assert!(lead.check().is_ok(), "{} / {} / {}", p.value, b.value, t.value);
                }
            }
        }
    }

    #[test]
    fn optional_fields_accept_anything() {
        let lead = LeadSubmission {
            phone: "+1 (555) 123-4567".into(),
            company: "x".into(),
            ..valid_lead()
        };
        assert!(lead.check().is_ok());
    }

    #[test]
    fn one_char_name_fails_only_name() {
        let v = only_violation(&LeadSubmission {
            name: "J".into(),
            ..valid_lead()
        });
        assert_eq!(v.field, "name");
        assert_eq!(v.message, "Name must be at least 2 characters");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let lead = LeadSubmission {
            name: "Ó".into(),
            ..valid_lead()
        };
        assert!(lead.check().is_err());
    }

    #[test]
    fn malformed_email_fails_only_email() {
        let v = only_violation(&LeadSubmission {
            email: "not-an-email".into(),
            ..valid_lead()
        });
        assert_eq!(v.field, "email");
        assert_eq!(v.message, "Please enter a valid email address");
    }

    #[test]
    fn email_without_dotted_domain_fails_once() {
        for email in ["jo@example", "jo@localhost", "jo@example.c", "jo@example.123"] {
            let v = only_violation(&LeadSubmission {
                email: email.into(),
                ..valid_lead()
            });
            assert_eq!(v.field, "email", "{email}");
            assert_eq!(v.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn email_with_subdomains_passes() {
        let lead = LeadSubmission {
            email: "jo.bloggs@mail.example.co.uk".into(),
            ..valid_lead()
        };
        assert!(lead.check().is_ok());
    }

    #[test]
    fn empty_email_fails() {
        let v = only_violation(&LeadSubmission {
            email: String::new(),
            ..valid_lead()
        });
        assert_eq!(v.field, "email");
    }

    #[test]
    fn nineteen_char_message_fails_only_message() {
        let v = only_violation(&LeadSubmission {
            message: "a".repeat(19),
            ..valid_lead()
        });
        assert_eq!(v.field, "message");
        assert_eq!(v.message, "Message must be at least 20 characters");
    }

    #[test]
    fn unknown_select_values_fail_with_field_messages() {
        let v = only_violation(&LeadSubmission {
            project_type: "mobile-app".into(),
            ..valid_lead()
        });
        assert_eq!(v.field, "projectType");
        assert_eq!(v.message, "Please select a project type");

        let v = only_violation(&LeadSubmission {
            budget: String::new(),
            ..valid_lead()
        });
        assert_eq!(v.field, "budget");
        assert_eq!(v.message, "Please select a budget range");

        let v = only_violation(&LeadSubmission {
            timeline: "someday".into(),
            ..valid_lead()
        });
        assert_eq!(v.field, "timeline");
        assert_eq!(v.message, "Please select a timeline");
    }

    #[test]
    fn blank_form_reports_every_required_field_in_form_order() {
        let violations = LeadSubmission::default().check().unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "email", "projectType", "budget", "timeline", "message"]
        );
    }

    #[test]
    fn clear_blanks_all_fields() {
        let mut lead = LeadSubmission {
            phone: "123".into(),
            company: "Acme".into(),
            ..valid_lead()
        };
        lead.clear();
        assert_eq!(lead, LeadSubmission::default());
    }

    #[test]
    fn serializes_all_keys_in_camel_case() {
        let json = serde_json::to_value(valid_lead()).unwrap();
        let obj = json.as_object().unwrap();
        for key in FIELD_ORDER {
            assert!(obj.contains_key(*key), "missing key {key}");
        }
        assert_eq!(obj.len(), FIELD_ORDER.len());
        assert_eq!(json["projectType"], "new-website");
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let lead: LeadSubmission = serde_json::from_value(serde_json::json!({
            "name": "Jo",
            "email": "jo@example.com",
            "projectType": "new-website",
            "budget": "not-sure",
            "timeline": "exploring",
            "message": "12345678901234567890",
        }))
        .unwrap();
        assert_eq!(lead.phone, "");
        assert!(lead.check().is_ok());
    }
}
