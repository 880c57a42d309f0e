//! Then steps for proxy registration BDD scenarios.

use super::world::RegistrationWorld;
use autoproxy::interception::{
    domain::{RegistrationOutcome, TypeRef},
    services::ProxyRegistrarError,
};
use rstest_bdd_macros::then;

fn last_outcome(world: &RegistrationWorld) -> Result<&RegistrationOutcome, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(outcome)) => Ok(outcome),
        Some(Err(err)) => Err(eyre::eyre!("registration pass failed: {err}")),
        None => Err(eyre::eyre!("registration pass has not run")),
    }
}

#[then("one installer record is registered")]
fn one_record_registered(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    last_outcome(world)?;
    let records = world
        .registry
        .list_all()
        .map_err(|err| eyre::eyre!("list_all failed: {err}"))?;
    if records.len() != 1 {
        return Err(eyre::eyre!("expected 1 record, found {}", records.len()));
    }
    Ok(())
}

#[then(r#"the installer targets are "{targets}""#)]
fn installer_targets_are(world: &RegistrationWorld, targets: String) -> Result<(), eyre::Report> {
    let record = last_outcome(world)?
        .registration()
        .ok_or_else(|| eyre::eyre!("no installer record in outcome"))?;
    let actual: Vec<&str> = record
        .constructor_args()
        .iter()
        .map(TypeRef::as_str)
        .collect();
    let expected: Vec<&str> = targets.split(',').collect();
    if actual != expected {
        return Err(eyre::eyre!("expected targets {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no installer record is registered")]
fn no_record_registered(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let records = world
        .registry
        .list_all()
        .map_err(|err| eyre::eyre!("list_all failed: {err}"))?;
    if !records.is_empty() {
        return Err(eyre::eyre!("expected no records, found {}", records.len()));
    }
    Ok(())
}

#[then("no namespace was scanned")]
fn no_namespace_scanned(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let scanned = world
        .scanner
        .scanned_namespaces()
        .map_err(|err| eyre::eyre!("scanned_namespaces failed: {err}"))?;
    if !scanned.is_empty() {
        return Err(eyre::eyre!("expected no scans, found {scanned:?}"));
    }
    Ok(())
}

#[then(r#"the pass fails because "{name}" is not an interface"#)]
fn pass_fails_not_interface(world: &RegistrationWorld, name: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(ProxyRegistrarError::NotAnInterface { type_ref, .. }))
            if type_ref.as_str() == name =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected non-interface failure for {name}, got {other:?}")),
    }
}
