use serde::{de::Error as _, Deserialize, Serialize, Serializer};
use serde_yaml::{Mapping, Value};

const TYPE_PLACEHOLDER: &str = "-";
const STATUS_UNKNOWN: &str = "unknown";

/// one index entry: typed fields for display, plus the entry exactly as written
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub folder: String,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub status: Option<ProjectStatus>,
    raw: Mapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
    #[serde(untagged)]
    Other(String),
}

#[derive(Deserialize)]
struct RecordFields {
    folder: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    status: Option<ProjectStatus>,
}

impl TryFrom<Value> for ProjectRecord {
    type Error = serde_yaml::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Mapping(raw) = value else {
            return Err(serde_yaml::Error::custom("project entry is not a mapping"));
        };

        let fields: RecordFields = serde_yaml::from_value(Value::Mapping(raw.clone()))?;

        Ok(Self {
            folder: fields.folder,
            name: fields.name,
            kind: fields.kind,
            status: fields.status,
            raw,
        })
    }
}

/// serializes the entry as it appeared in the index, key order and nulls included
impl Serialize for ProjectRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl ProjectRecord {
    /// label shown to the user, the folder when no name is set
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.folder)
    }

    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(TYPE_PLACEHOLDER)
    }

    pub fn status_label(&self) -> &str {
        self.status
            .as_ref()
            .map(ProjectStatus::as_str)
            .unwrap_or(STATUS_UNKNOWN)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, Some(ProjectStatus::Active))
    }

    pub fn is_archived(&self) -> bool {
        matches!(self.status, Some(ProjectStatus::Archived))
    }
}

#[cfg(test)]
impl ProjectRecord {
    pub(crate) fn new(folder: &str) -> Self {
        let mut raw = Mapping::new();
        raw.insert("folder".into(), folder.into());
        Self {
            folder: folder.to_string(),
            name: None,
            kind: None,
            status: None,
            raw,
        }
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.raw.insert("name".into(), name.into());
        self.name = Some(name.to_string());
        self
    }

    pub(crate) fn with_kind(mut self, kind: &str) -> Self {
        self.raw.insert("type".into(), kind.into());
        self.kind = Some(kind.to_string());
        self
    }

    pub(crate) fn with_status(mut self, status: ProjectStatus) -> Self {
        self.raw.insert("status".into(), status.as_str().into());
        self.status = Some(status);
        self
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Other(other) => other,
        }
    }
}
