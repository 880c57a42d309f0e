//! In-memory integration tests for registration passes.

use autoproxy::interception::{
    domain::{AnnotationAttributes, RegistrationOutcome, TypeRef},
    services::ProxyRegistrarError,
};
use rstest::rstest;

use super::helpers::{
    Bootstrap, bootstrap, entry_point, marked_interface, plain_class, strings, type_ref,
};

fn constructor_args(outcome: &RegistrationOutcome) -> Vec<String> {
    outcome
        .registration()
        .map(|record| {
            record
                .constructor_args()
                .iter()
                .map(TypeRef::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[rstest]
fn explicit_target_is_registered_verbatim(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.app.Ignored"))
        .expect("writable");
    let attributes = AnnotationAttributes {
        clients: strings(&["com.x.FooClient"]),
        ..AnnotationAttributes::default()
    };

    let outcome = bootstrap
        .registrar
        .register_proxies(&entry_point(attributes))
        .expect("registration should succeed");

    assert_eq!(constructor_args(&outcome), ["com.x.FooClient"]);
    assert!(
        bootstrap
            .scanner
            .scanned_namespaces()
            .expect("readable")
            .is_empty()
    );
    assert_eq!(bootstrap.registry.list_all().expect("readable").len(), 1);
}

#[rstest]
fn scan_excludes_unmarked_types(bootstrap: Bootstrap) {
    for candidate in [
        marked_interface("com.x.clients.B"),
        marked_interface("com.x.clients.A"),
        plain_class("com.x.clients.C"),
    ] {
        bootstrap.scanner.add(candidate).expect("writable");
    }
    let attributes = AnnotationAttributes {
        base_packages: strings(&["com.x.clients"]),
        ..AnnotationAttributes::default()
    };

    let outcome = bootstrap
        .registrar
        .register_proxies(&entry_point(attributes))
        .expect("registration should succeed");

    assert_eq!(
        constructor_args(&outcome),
        ["com.x.clients.A", "com.x.clients.B"]
    );
}

#[rstest]
fn same_type_from_two_namespaces_counts_once(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.clients.A"))
        .expect("writable");
    let attributes = AnnotationAttributes {
        value: strings(&["com.x"]),
        base_packages: strings(&["com.x.clients"]),
        base_package_classes: strings(&["com.x.clients.Anchor"]),
        ..AnnotationAttributes::default()
    };

    let outcome = bootstrap
        .registrar
        .register_proxies(&entry_point(attributes))
        .expect("registration should succeed");

    assert_eq!(constructor_args(&outcome), ["com.x.clients.A"]);
    assert_eq!(
        bootstrap.scanner.scanned_namespaces().expect("readable").len(),
        2
    );
}

#[rstest]
fn concrete_marked_type_is_fatal(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.clients.A"))
        .expect("writable");
    bootstrap
        .scanner
        .add(plain_class("com.x.clients.D").with_marker("ProxyTarget"))
        .expect("writable");
    let attributes = AnnotationAttributes {
        base_packages: strings(&["com.x.clients"]),
        ..AnnotationAttributes::default()
    };

    let result = bootstrap
        .registrar
        .register_proxies(&entry_point(attributes));

    assert!(matches!(
        result,
        Err(ProxyRegistrarError::NotAnInterface { ref type_ref, .. })
            if type_ref.as_str() == "com.x.clients.D"
    ));
    assert!(bootstrap.registry.list_all().expect("readable").is_empty());
}

#[rstest]
fn dependent_and_annotation_types_are_not_candidates(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.app.Outer$Inner").dependent())
        .expect("writable");
    bootstrap
        .scanner
        .add(
            autoproxy::interception::domain::CandidateDescriptor::new(
                type_ref("com.x.app.ProxyTarget"),
                autoproxy::interception::domain::TypeKind::Annotation,
            )
            .with_marker("ProxyTarget"),
        )
        .expect("writable");

    let outcome = bootstrap
        .registrar
        .register_proxies(&entry_point(AnnotationAttributes::default()))
        .expect("registration should succeed");

    assert_eq!(outcome, RegistrationOutcome::NoTargets);
}

#[rstest]
fn disabled_declaration_registers_nothing(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.app.A"))
        .expect("writable");
    let attributes = AnnotationAttributes {
        enable: Some(false),
        ..AnnotationAttributes::default()
    };

    let outcome = bootstrap
        .registrar
        .register_proxies(&entry_point(attributes))
        .expect("disabled pass should succeed");

    assert_eq!(outcome, RegistrationOutcome::Disabled);
    assert!(bootstrap.registry.list_all().expect("readable").is_empty());
    assert!(
        bootstrap
            .scanner
            .scanned_namespaces()
            .expect("readable")
            .is_empty()
    );
}
