//! The static service catalog.
//!
//! Pure data and validation — no I/O, no async. The catalog is assembled once
//! at startup and only ever shared by reference afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use devsvc_common::{Environment, ServiceDefinition, ServiceType};
use regex::Regex;

use crate::domain::error::CatalogError;

/// Container names the engine accepts.
pub static CONTAINER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_.-]*$").expect("valid regex")
});

/// Shared development password used by the built-in database services.
const DEV_PASSWORD: &str = "P@ssw0rd";
const DEV_DATABASE: &str = "devcontainer_db";

/// Ordered, validated list of service definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceDefinition>,
}

impl Catalog {
    /// Build a catalog, checking every definition and the uniqueness of
    /// `name` and `container_name` across entries.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn new(services: Vec<ServiceDefinition>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut containers = HashSet::new();
        for def in &services {
            validate_definition(def)?;
            if !names.insert(def.name.as_str()) {
                return Err(CatalogError::DuplicateName(def.name.clone()));
            }
            if !containers.insert(def.container_name.as_str()) {
                return Err(CatalogError::DuplicateContainer(def.container_name.clone()));
            }
        }
        Ok(Self { services })
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in table violates a catalog invariant.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_services())
    }

    /// All definitions in catalog order.
    #[must_use]
    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    /// Look up a service by its `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownService`] listing the valid names.
    pub fn get(&self, name: &str) -> Result<&ServiceDefinition, CatalogError> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::UnknownService {
                name: name.to_string(),
                valid: self.names().join(", "),
            })
    }

    /// Service names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }

    /// Distinct service types in first-occurrence order.
    #[must_use]
    pub fn service_types(&self) -> Vec<ServiceType> {
        let mut seen = Vec::new();
        for def in &self.services {
            if !seen.contains(&def.service_type) {
                seen.push(def.service_type);
            }
        }
        seen
    }

    /// Definitions of the given type, in catalog order.
    pub fn of_type(&self, service_type: ServiceType) -> impl Iterator<Item = &ServiceDefinition> {
        self.services
            .iter()
            .filter(move |s| s.service_type == service_type)
    }
}

/// Validate a single definition in isolation.
///
/// # Errors
///
/// Returns an error if the image is empty, the port is zero, or the container
/// name would be rejected by the engine.
pub fn validate_definition(def: &ServiceDefinition) -> Result<(), CatalogError> {
    if def.image.trim().is_empty() {
        return Err(CatalogError::EmptyImage(def.name.clone()));
    }
    if def.port == 0 {
        return Err(CatalogError::InvalidPort(def.name.clone()));
    }
    if !CONTAINER_NAME_RE.is_match(&def.container_name) {
        return Err(CatalogError::InvalidContainerName(
            def.container_name.clone(),
        ));
    }
    Ok(())
}

fn env(pairs: &[(&str, &str)]) -> Environment {
    pairs.iter().copied().collect()
}

fn builtin_services() -> Vec<ServiceDefinition> {
    vec![
        ServiceDefinition {
            name: "mssql".to_string(),
            display_name: "SQL Server".to_string(),
            service_type: ServiceType::Database,
            image: "mcr.microsoft.com/mssql/server:2019-latest".to_string(),
            container_name: "mssql-devcontainer".to_string(),
            port: 1433,
            environment: env(&[("ACCEPT_EULA", "Y"), ("SA_PASSWORD", DEV_PASSWORD)]),
            username: Some("sa".to_string()),
            password: Some(DEV_PASSWORD.to_string()),
            database: None,
        },
        ServiceDefinition {
            name: "postgres".to_string(),
            display_name: "PostgreSQL".to_string(),
            service_type: ServiceType::Database,
            image: "postgres:latest".to_string(),
            container_name: "postgres-devcontainer".to_string(),
            port: 5432,
            environment: env(&[
                ("POSTGRES_PASSWORD", DEV_PASSWORD),
                ("POSTGRES_DB", DEV_DATABASE),
            ]),
            username: Some("postgres".to_string()),
            password: Some(DEV_PASSWORD.to_string()),
            database: Some(DEV_DATABASE.to_string()),
        },
        ServiceDefinition {
            name: "mariadb".to_string(),
            display_name: "MariaDB".to_string(),
            service_type: ServiceType::Database,
            image: "mariadb:latest".to_string(),
            container_name: "mariadb-devcontainer".to_string(),
            port: 3306,
            environment: env(&[
                ("MYSQL_ROOT_PASSWORD", DEV_PASSWORD),
                ("MYSQL_DATABASE", DEV_DATABASE),
            ]),
            username: Some("root".to_string()),
            password: Some(DEV_PASSWORD.to_string()),
            database: Some(DEV_DATABASE.to_string()),
        },
        ServiceDefinition {
            name: "redis".to_string(),
            display_name: "Redis".to_string(),
            service_type: ServiceType::Cache,
            image: "redis:latest".to_string(),
            container_name: "redis-devcontainer".to_string(),
            port: 6379,
            environment: Environment::new(),
            username: None,
            password: None,
            database: None,
        },
    ]
}

// ── Unit tests ───────────────────────────────────────────────────────────────
