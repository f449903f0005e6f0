//! Property-based tests for status resolution and catalog invariants.

use devsvc_cli::application::services::status::resolve;
use devsvc_cli::domain::Catalog;
use devsvc_cli::domain::catalog::CONTAINER_NAME_RE;
use devsvc_common::{Environment, ServiceDefinition, ServiceStatus, ServiceType};
use proptest::prelude::*;

use crate::helpers::{FakeEngine, service};

const OPS: [&str; 3] = ["images", "ps", "ps -a"];

fn arb_engine() -> impl Strategy<Value = FakeEngine> {
    (
        any::<bool>(),
        prop::option::of(any::<bool>()),
        prop::collection::vec(prop::sample::select(OPS.to_vec()), 0..3),
    )
        .prop_map(|(has_image, container, failing)| {
            let mut engine = FakeEngine::new();
            if has_image {
                engine = engine.with_image("redis:latest");
            }
            if let Some(running) = container {
                engine = engine.with_container("redis-devcontainer", running);
            }
            for op in failing {
                engine = engine.failing(op);
            }
            engine
        })
}

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(f)
}

fn definition(name: &str, container: &str, port: u16) -> ServiceDefinition {
    ServiceDefinition {
        name: name.to_string(),
        display_name: name.to_string(),
        service_type: ServiceType::Other,
        image: format!("{name}:latest"),
        container_name: container.to_string(),
        port,
        environment: Environment::new(),
        username: None,
        password: None,
        database: None,
    }
}

proptest! {
    /// Resolution always yields a status, whatever the engine does.
    #[test]
    fn prop_resolve_is_total(engine in arb_engine()) {
        let status = block_on(resolve(&engine, &service("redis")));
        prop_assert!(matches!(
            status,
            ServiceStatus::NotPulled | ServiceStatus::Stopped | ServiceStatus::Running
        ));
    }

    /// A healthy engine without the image always reports `not_pulled`.
    #[test]
    fn prop_missing_image_is_not_pulled(running in prop::option::of(any::<bool>())) {
        let mut engine = FakeEngine::new();
        if let Some(running) = running {
            engine = engine.with_container("redis-devcontainer", running);
        }
        let status = block_on(resolve(&engine, &service("redis")));
        prop_assert_eq!(status, ServiceStatus::NotPulled);
    }

    /// An engine failure is never reported as `not_pulled`.
    #[test]
    fn prop_failure_never_reports_not_pulled(engine in arb_engine()) {
        let engine = engine.failing("images");
        let status = block_on(resolve(&engine, &service("redis")));
        prop_assert_eq!(status, ServiceStatus::Stopped);
    }

    /// Names the engine would reject are refused at catalog construction.
    #[test]
    fn prop_catalog_rejects_invalid_container_names(name in "[ /:@!$]{1}[a-z]{0,8}") {
        prop_assume!(!CONTAINER_NAME_RE.is_match(&name));
        prop_assert!(Catalog::new(vec![definition("svc", &name, 8080)]).is_err());
    }

    /// Valid, distinct names and non-zero ports always build a catalog.
    #[test]
    fn prop_catalog_accepts_valid_definitions(
        names in prop::collection::btree_set("[a-z][a-z0-9]{0,10}", 1..6),
        port in 1u16..=u16::MAX,
    ) {
        let defs: Vec<ServiceDefinition> = names
            .iter()
            .map(|n| definition(n, &format!("{n}-devcontainer"), port))
            .collect();
        let catalog = Catalog::new(defs).expect("valid catalog");
        prop_assert_eq!(catalog.len(), names.len());
        prop_assert_eq!(catalog.service_types(), vec![ServiceType::Other]);
    }

    /// Two entries with one container name never coexist.
    #[test]
    fn prop_catalog_rejects_shared_container(container in "[a-z][a-z0-9_.-]{0,10}") {
        let defs = vec![
            definition("first", &container, 1000),
            definition("second", &container, 2000),
        ];
        prop_assert!(Catalog::new(defs).is_err());
    }
}
