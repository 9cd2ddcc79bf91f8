use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::config::AdminConfig;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(ReportId);

// --- Status ---

/// Moderation state of a report. The wire form is lowercase; anything the
/// service sends that is missing, `null` or unrecognised reads as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

impl Serialize for ReportStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Pending, Self::from_wire))
    }
}

/// A status the operator is allowed to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorDecision {
    Approve,
    Reject,
}

impl OperatorDecision {
    #[must_use]
    pub const fn status(self) -> ReportStatus {
        match self {
            Self::Approve => ReportStatus::Approved,
            Self::Reject => ReportStatus::Rejected,
        }
    }

    #[must_use]
    pub fn success_message(self) -> String {
        format!("Report {}", self.status().as_str())
    }
}

// --- Report ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_id", alias = "id")]
    pub id: ReportId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub status: ReportStatus,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Local mirror of the service's report list, in server order, one entry
/// per id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportList {
    reports: IndexMap<ReportId, Report>,
}

impl ReportList {
    /// Replaces the whole list. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, reports: impl IntoIterator<Item = Report>) {
        let mut next = IndexMap::new();
        for report in reports {
            if next.contains_key(&report.id) {
                warn!(report_id = %report.id, "Dropping duplicate report from server payload");
                continue;
            }
            next.insert(report.id.clone(), report);
        }
        self.reports = next;
    }

    /// Overwrites the status of `id`. Returns `false` if the id is unknown.
    pub fn patch_status(&mut self, id: &ReportId, status: ReportStatus) -> bool {
        match self.reports.get_mut(id) {
            Some(report) => {
                report.status = status;
                true
            }
            None => false,
        }
    }

    /// Removes `id`, keeping the order of everything else.
    pub fn remove(&mut self, id: &ReportId) -> Option<Report> {
        self.reports.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ReportId) -> bool {
        self.reports.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

// --- Map selection ---

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selection(Option<GeoLocation>);

impl Selection {
    pub fn select(&mut self, location: GeoLocation) {
        self.0 = Some(location);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub const fn current(&self) -> Option<GeoLocation> {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub reports: ReportList,
    /// A status change or delete is awaiting the service.
    pub busy: bool,
    pub selection: Selection,
    pub config: AdminConfig,
}

impl Model {
    #[must_use]
    pub fn with_config(config: AdminConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}
