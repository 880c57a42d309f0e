//! In-memory integration tests for installing proxies from the registry.

use std::sync::Arc;

use autoproxy::interception::{
    domain::AnnotationAttributes,
    ports::{Component, ConstructionHook},
    services::ProxyInstaller,
};
use rstest::rstest;

use super::helpers::{
    Bootstrap, RecordedProxy, RecordingProxyFactory, bootstrap, entry_point, marked_interface,
    type_ref,
};

#[rstest]
fn registered_record_drives_installation(bootstrap: Bootstrap) {
    bootstrap
        .scanner
        .add(marked_interface("com.x.app.OrderClient"))
        .expect("writable");
    bootstrap
        .registrar
        .register_proxies(&entry_point(AnnotationAttributes::default()))
        .expect("registration should succeed");
    let record = bootstrap
        .registry
        .find_by_name("proxyInstaller")
        .expect("readable")
        .expect("installer record should exist");
    let factory = Arc::new(RecordingProxyFactory::default());
    let installer = ProxyInstaller::from_registration(&record, Arc::clone(&factory));

    let target: Component = Arc::new("order client");
    let bystander: Component = Arc::new("audit log");
    let exposed_target = installer.after_construction(target, &type_ref("com.x.app.OrderClient"));
    let exposed_bystander =
        installer.after_construction(Arc::clone(&bystander), &type_ref("com.x.app.AuditLog"));

    let proxy = exposed_target
        .downcast_ref::<RecordedProxy>()
        .expect("target should be proxied");
    assert_eq!(proxy.target.as_str(), "com.x.app.OrderClient");
    assert!(Arc::ptr_eq(&bystander, &exposed_bystander));
    assert_eq!(factory.wrapped(), [type_ref("com.x.app.OrderClient")]);
}
