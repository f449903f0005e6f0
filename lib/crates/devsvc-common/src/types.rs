use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category a service is grouped under in the tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Database,
    Cache,
    Other,
}

impl ServiceType {
    /// Label of the group node that holds services of this type.
    #[must_use]
    pub fn group_label(self) -> &'static str {
        match self {
            Self::Database => "Databases",
            Self::Cache => "Caches",
            Self::Other => "Other Services",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Database => "database",
            Self::Cache => "cache",
            Self::Other => "other",
        })
    }
}

/// Live state of a service as reported by the container engine.
///
/// Always derived from engine queries, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// The service image is not present locally.
    NotPulled,
    /// The image is present and no container is running.
    Stopped,
    /// A container with the service's name is running.
    Running,
}

impl ServiceStatus {
    /// Display record for this status.
    #[must_use]
    pub fn presentation(self) -> StatusPresentation {
        match self {
            Self::NotPulled => StatusPresentation {
                label: "Image not pulled",
                icon: "cloud-download",
                context: "service-not_pulled",
            },
            Self::Stopped => StatusPresentation {
                label: "Stopped",
                icon: "circle-outline",
                context: "service-stopped",
            },
            Self::Running => StatusPresentation {
                label: "Running",
                icon: "circle-filled",
                context: "service-running",
            },
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NotPulled => "not_pulled",
            Self::Stopped => "stopped",
            Self::Running => "running",
        })
    }
}

/// Constant display record for a [`ServiceStatus`].
///
/// `context` is the value an editor uses to decide which actions a node offers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub icon: &'static str,
    pub context: &'static str,
}

/// A controllable containerized development service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Unique key, used on the command line.
    pub name: String,
    pub display_name: String,
    pub service_type: ServiceType,
    /// Engine image reference, e.g. `redis:latest`.
    pub image: String,
    /// Name of the single persistent container backing this service.
    pub container_name: String,
    /// Published port; the same number is used on host and container side.
    pub port: u16,
    #[serde(default, skip_serializing_if = "Environment::is_empty")]
    pub environment: Environment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Container environment variables in declaration order.
///
/// Serialized as a JSON/YAML map; the order entries were declared in is the
/// order they are passed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(Vec<(String, String)>);

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Value of `key`, if declared.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Declare `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.insert(key, value);
        }
        env
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnvironmentVisitor;

        impl<'de> Visitor<'de> for EnvironmentVisitor {
            type Value = Environment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of environment variables")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Environment, A::Error> {
                let mut env = Environment::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    env.insert(key, value);
                }
                Ok(env)
            }
        }

        deserializer.deserialize_map(EnvironmentVisitor)
    }
}

// ── View model ────────────────────────────────────────────────────────────────

/// Top-level node: one per service type present in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupNode {
    pub label: String,
    pub service_type: ServiceType,
}

/// A catalog entry paired with its freshly resolved status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceNode {
    pub definition: ServiceDefinition,
    pub status: ServiceStatus,
}

impl ServiceNode {
    /// Short description shown next to the service name.
    #[must_use]
    pub fn description(&self) -> String {
        match self.status {
            ServiceStatus::Running => format!("Running on port {}", self.definition.port),
            status => status.presentation().label.to_string(),
        }
    }
}

/// Connection metadata line under a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailNode {
    pub label: String,
    pub value: String,
}

/// Any node of the three-level service tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Group(GroupNode),
    Service(ServiceNode),
    Detail(DetailNode),
}

impl From<GroupNode> for ViewNode {
    fn from(node: GroupNode) -> Self {
        Self::Group(node)
    }
}

impl From<ServiceNode> for ViewNode {
    fn from(node: ServiceNode) -> Self {
        Self::Service(node)
    }
}

impl From<DetailNode> for ViewNode {
    fn from(node: DetailNode) -> Self {
        Self::Detail(node)
    }
}

// ── Whole-tree output ─────────────────────────────────────────────────────────

/// The fully expanded tree, as printed by `devsvc list --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceTree {
    pub groups: Vec<TreeGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeGroup {
    #[serde(flatten)]
    pub group: GroupNode,
    pub services: Vec<TreeService>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeService {
    #[serde(flatten)]
    pub node: ServiceNode,
    pub presentation: StatusPresentation,
    pub description: String,
    pub details: Vec<DetailNode>,
}
