//! Ticket schema: attribute enums and the record stored per dataset line.
//!
//! Wire names (kebab-case) are a schema contract shared by generate,
//! validate, and fix. Display names are what comment templates embed.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Category of the leaked secret.
pub enum SecretType {
    Password,
    ApiKey,
    OauthToken,
    Certificate,
    SshKey,
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SecretType::Password => "password",
            SecretType::ApiKey => "API key",
            SecretType::OauthToken => "OAuth token",
            SecretType::Certificate => "certificate",
            SecretType::SshKey => "SSH key",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where the secret was observed.
pub enum Location {
    PublicRepository,
    PublicPaste,
    InternalRepository,
    InternalLog,
    ChatMessage,
    LocalConfig,
}

impl Location {
    /// Locations reachable by anyone outside the organization.
    pub fn is_public(&self) -> bool {
        matches!(self, Location::PublicRepository | Location::PublicPaste)
    }

    /// Locations that are local-only or already access-controlled.
    pub fn is_non_exposing(&self) -> bool {
        matches!(self, Location::InternalLog | Location::LocalConfig)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::PublicRepository => "public repository",
            Location::PublicPaste => "public paste site",
            Location::InternalRepository => "internal repository",
            Location::InternalLog => "internal log",
            Location::ChatMessage => "chat message",
            Location::LocalConfig => "local config file",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Exposure reach of the finding; `Private` is the low end.
pub enum Reach {
    Public,
    Internal,
    Private,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether the secret is known to still work.
pub enum Validity {
    ConfirmedActive,
    ConfirmedRevoked,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Triage outcome assigned to a ticket.
pub enum Label {
    Confirmed,
    FalsePositive,
    NeedsReview,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Label::Confirmed => "Confirmed",
            Label::FalsePositive => "False Positive",
            Label::NeedsReview => "Needs Review",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The four decision-driving attributes, detached from id/label/comment.
pub struct TicketAttrs {
    pub secret_type: SecretType,
    pub location: Location,
    pub severity_signal: Reach,
    pub validity_signal: Validity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One security-alert record as stored in the dataset file.
pub struct Ticket {
    pub id: String,
    pub secret_type: SecretType,
    pub location: Location,
    pub severity_signal: Reach,
    pub validity_signal: Validity,
    pub label: Label,
    pub comment: String,
}

impl Ticket {
    pub fn attrs(&self) -> TicketAttrs {
        TicketAttrs {
            secret_type: self.secret_type,
            location: self.location,
            severity_signal: self.severity_signal,
            validity_signal: self.validity_signal,
        }
    }
}
