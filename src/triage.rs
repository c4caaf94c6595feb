//! Decision Logic: the ordered rule table mapping ticket attributes to a
//! triage label and its canonical comment.
//!
//! Rules evaluate in declaration order and the first match wins; the order
//! is a contract, not an implementation detail. Every comment template names
//! the concrete secret type and location so downstream consumers can judge
//! the explanation against the attributes. The table is an injected,
//! immutable structure; commands share one `RuleTable::standard()`.

use crate::error::ClassifyError;
use crate::models::ticket::{Label, Reach, TicketAttrs, Validity};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Identifies which rule produced a verdict.
pub enum RuleId {
    RevokedSecret,
    LimitedExposure,
    LiveAndPublic,
    InsufficientSignals,
    UnmatchedPattern,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::RevokedSecret => "revoked-secret",
            RuleId::LimitedExposure => "limited-exposure",
            RuleId::LiveAndPublic => "live-and-public",
            RuleId::InsufficientSignals => "insufficient-signals",
            RuleId::UnmatchedPattern => "unmatched-pattern",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of classifying one set of ticket attributes.
pub struct Verdict {
    pub label: Label,
    pub comment: String,
    pub rule: RuleId,
}

/// One precedence-ordered rule: a predicate plus an outcome builder.
pub struct Rule {
    id: RuleId,
    applies: fn(&TicketAttrs) -> bool,
    outcome: fn(&TicketAttrs) -> (Label, String),
}

impl Rule {
    pub fn new(
        id: RuleId,
        applies: fn(&TicketAttrs) -> bool,
        outcome: fn(&TicketAttrs) -> (Label, String),
    ) -> Self {
        Rule { id, applies, outcome }
    }
}

/// Immutable, ordered rule table.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn custom(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    /// The standard triage rulebook. Ends in a catch-all, so `classify`
    /// against this table never fails.
    pub fn standard() -> Self {
        RuleTable::custom(vec![
            Rule::new(
                RuleId::RevokedSecret,
                |a| a.validity_signal == Validity::ConfirmedRevoked,
                |a| {
                    (
                        Label::FalsePositive,
                        format!(
                            "The {} found in the {} is confirmed revoked and poses no active risk; close without rotation.",
                            a.secret_type, a.location
                        ),
                    )
                },
            ),
            Rule::new(
                RuleId::LimitedExposure,
                |a| a.location.is_non_exposing() && a.severity_signal == Reach::Private,
                |a| {
                    (
                        Label::FalsePositive,
                        format!(
                            "The {} in the {} has limited exposure: the location is not externally reachable and the blast radius is private; safe to close as a false positive.",
                            a.secret_type, a.location
                        ),
                    )
                },
            ),
            Rule::new(
                RuleId::LiveAndPublic,
                |a| a.validity_signal == Validity::ConfirmedActive && a.location.is_public(),
                |a| {
                    (
                        Label::Confirmed,
                        format!(
                            "The {} in the {} is verified active and publicly exposed; rotate it immediately and audit recent usage.",
                            a.secret_type, a.location
                        ),
                    )
                },
            ),
            Rule::new(
                RuleId::InsufficientSignals,
                |a| {
                    a.validity_signal == Validity::Unknown
                        || a.severity_signal == Reach::Unknown
                },
                |a| {
                    (
                        Label::NeedsReview,
                        format!(
                            "Insufficient evidence to confirm exposure or validity of the {} in the {}; manual investigation required.",
                            a.secret_type, a.location
                        ),
                    )
                },
            ),
            Rule::new(
                RuleId::UnmatchedPattern,
                |_| true,
                |a| {
                    (
                        Label::NeedsReview,
                        format!(
                            "The {} in the {} did not match a known triage pattern; route to manual review.",
                            a.secret_type, a.location
                        ),
                    )
                },
            ),
        ])
    }
}

/// Classify one set of attributes against the table. First matching rule
/// wins. Fails with `Unclassifiable` only when no rule matches, which the
/// standard table's catch-all prevents.
pub fn classify(attrs: &TicketAttrs, table: &RuleTable) -> Result<Verdict, ClassifyError> {
    for rule in &table.rules {
        if (rule.applies)(attrs) {
            let (label, comment) = (rule.outcome)(attrs);
            return Ok(Verdict {
                label,
                comment,
                rule: rule.id,
            });
        }
    }
    Err(ClassifyError::Unclassifiable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ticket::{Location, SecretType};

    fn attrs(
        secret_type: SecretType,
        location: Location,
        severity_signal: Reach,
        validity_signal: Validity,
    ) -> TicketAttrs {
        TicketAttrs {
            secret_type,
            location,
            severity_signal,
            validity_signal,
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::Password,
            Location::ChatMessage,
            Reach::Internal,
            Validity::Unknown,
        );
        let v1 = classify(&a, &table).unwrap();
        let v2 = classify(&a, &table).unwrap();
        assert_eq!(v1, v2);
    }

    #[test]
    fn test_revoked_wins_over_live_and_public() {
        // Construct a ticket matching both the revoked rule and the
        // live-and-public rule's location condition; the earlier rule must win.
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::ApiKey,
            Location::PublicRepository,
            Reach::Public,
            Validity::ConfirmedRevoked,
        );
        let v = classify(&a, &table).unwrap();
        assert_eq!(v.rule, RuleId::RevokedSecret);
        assert_eq!(v.label, Label::FalsePositive);
        assert!(v.comment.contains("revoked"));
    }

    #[test]
    fn test_limited_exposure_wins_over_insufficient_signals() {
        // Unknown validity alone would hit rule 4, but a private non-exposing
        // location is checked earlier.
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::Password,
            Location::LocalConfig,
            Reach::Private,
            Validity::Unknown,
        );
        let v = classify(&a, &table).unwrap();
        assert_eq!(v.rule, RuleId::LimitedExposure);
        assert_eq!(v.label, Label::FalsePositive);
        assert!(v.comment.contains("limited exposure"));
    }

    #[test]
    fn test_live_api_key_in_public_repo_is_confirmed() {
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::ApiKey,
            Location::PublicRepository,
            Reach::Public,
            Validity::ConfirmedActive,
        );
        let v = classify(&a, &table).unwrap();
        assert_eq!(v.label, Label::Confirmed);
        assert!(v.comment.contains("API key"));
        assert!(v.comment.contains("public"));
    }

    #[test]
    fn test_unknown_validity_needs_review() {
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::OauthToken,
            Location::ChatMessage,
            Reach::Internal,
            Validity::Unknown,
        );
        let v = classify(&a, &table).unwrap();
        assert_eq!(v.label, Label::NeedsReview);
        assert!(v.comment.contains("manual investigation"));
    }

    #[test]
    fn test_fallback_catches_everything_else() {
        // Active but internal: none of rules 1-4 match.
        let table = RuleTable::standard();
        let a = attrs(
            SecretType::Certificate,
            Location::InternalRepository,
            Reach::Internal,
            Validity::ConfirmedActive,
        );
        let v = classify(&a, &table).unwrap();
        assert_eq!(v.rule, RuleId::UnmatchedPattern);
        assert_eq!(v.label, Label::NeedsReview);
    }

    #[test]
    fn test_empty_table_is_unclassifiable() {
        let table = RuleTable::custom(Vec::new());
        let a = attrs(
            SecretType::Password,
            Location::InternalLog,
            Reach::Private,
            Validity::Unknown,
        );
        assert_eq!(
            classify(&a, &table),
            Err(crate::error::ClassifyError::Unclassifiable)
        );
    }

    #[test]
    fn test_comments_name_secret_and_location() {
        let table = RuleTable::standard();
        let cases = [
            attrs(
                SecretType::SshKey,
                Location::PublicPaste,
                Reach::Public,
                Validity::ConfirmedActive,
            ),
            attrs(
                SecretType::SshKey,
                Location::PublicPaste,
                Reach::Public,
                Validity::ConfirmedRevoked,
            ),
            attrs(
                SecretType::SshKey,
                Location::PublicPaste,
                Reach::Unknown,
                Validity::Unknown,
            ),
        ];
        for a in cases {
            let v = classify(&a, &table).unwrap();
            assert!(v.comment.contains("SSH key"), "{}", v.comment);
            assert!(v.comment.contains("public paste site"), "{}", v.comment);
        }
    }
}
