//! Store contract tests for `PostgresRegistrarStore`.
//!
//! Mirrors the in-memory store tests so both stores agree on identity,
//! ordering and deletion semantics.

use super::helpers::{FixedClock, TestDatabase, test_runtime};
use cluster_registrar::registrar::{
    domain::{
        ClusterName, Kubeconfig, Region, RegistrarClusterDraft, RegistrarClusterId,
        RegistrarLookup,
    },
    ports::{RegistrarStore, RegistrarStoreError},
};
use rstest::rstest;

fn draft(name: &str, region: Option<&str>, clock: FixedClock) -> RegistrarClusterDraft {
    RegistrarClusterDraft::new(
        ClusterName::new(name).expect("valid name"),
        Region::optional(region.map(str::to_owned)).expect("valid region"),
        Kubeconfig::new("apiVersion: v1").expect("valid kubeconfig"),
        &clock,
    )
}

fn region_lookup(label: &str) -> RegistrarLookup {
    RegistrarLookup::Region(Region::new(label).expect("valid region"))
}

#[rstest]
fn put_then_get_by_id_returns_record() {
    let Some(db) = TestDatabase::create("registrar_put_get") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    let source = draft("prod", Some("us-east"), FixedClock::at_offset(0));

    let id = rt.block_on(store.put(&source)).expect("put");
    let cluster = rt
        .block_on(store.get(&RegistrarLookup::Id(id)))
        .expect("get");

    assert_eq!(cluster, source.into_cluster(id));
}

#[rstest]
fn padded_values_round_trip_verbatim() {
    let Some(db) = TestDatabase::create("registrar_padded") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    let source = RegistrarClusterDraft::new(
        ClusterName::new("  prod-east  ").expect("valid name"),
        Some(Region::new(" us-east ").expect("valid region")),
        Kubeconfig::new("\n").expect("valid kubeconfig"),
        &FixedClock::at_offset(0),
    );

    let id = rt.block_on(store.put(&source)).expect("put");
    let cluster = rt
        .block_on(store.get(&region_lookup(" us-east ")))
        .expect("padded region matches exactly");
    let trimmed = rt.block_on(store.get(&region_lookup("us-east")));

    assert_eq!(cluster, source.into_cluster(id));
    assert!(matches!(trimmed, Err(RegistrarStoreError::NotFound(_))));
}

#[rstest]
fn ordering_follows_registration_time_not_insertion() {
    let Some(db) = TestDatabase::create("registrar_ordering") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();

    rt.block_on(store.put(&draft("late", Some("eu"), FixedClock::at_offset(5))))
        .expect("late put");
    rt.block_on(store.put(&draft("early", Some("eu"), FixedClock::at_offset(0))))
        .expect("early put");

    let names: Vec<String> = rt
        .block_on(store.list())
        .expect("list")
        .iter()
        .map(|cluster| cluster.name().as_str().to_owned())
        .collect();
    let by_region = rt
        .block_on(store.get(&region_lookup("eu")))
        .expect("region lookup");

    assert_eq!(names, ["early", "late"]);
    assert_eq!(by_region.name().as_str(), "early");
}

#[rstest]
fn region_lookup_falls_through_after_earliest_is_deleted() {
    let Some(db) = TestDatabase::create("registrar_fall_through") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    let first = rt
        .block_on(store.put(&draft("a", Some("eu"), FixedClock::at_offset(0))))
        .expect("first");
    let second = rt
        .block_on(store.put(&draft("b", Some("eu"), FixedClock::at_offset(1))))
        .expect("second");

    let before = rt
        .block_on(store.get(&region_lookup("eu")))
        .expect("before delete");
    rt.block_on(store.delete(first)).expect("delete");
    let after = rt
        .block_on(store.get(&region_lookup("eu")))
        .expect("after delete");

    assert_eq!(before.id(), first);
    assert_eq!(after.id(), second);
}

#[rstest]
fn clusters_without_region_are_not_found_by_region() {
    let Some(db) = TestDatabase::create("registrar_regionless") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    rt.block_on(store.put(&draft("regionless", None, FixedClock::at_offset(0))))
        .expect("put");

    let err = rt
        .block_on(store.get(&region_lookup("us-east")))
        .expect_err("lookup should fail");

    assert!(matches!(err, RegistrarStoreError::NotFound(_)));
}

#[rstest]
fn delete_unknown_id_is_not_found() {
    let Some(db) = TestDatabase::create("registrar_delete_unknown") else {
        return;
    };
    let rt = test_runtime();

    let err = rt
        .block_on(db.store().delete(RegistrarClusterId::new()))
        .expect_err("delete should fail");

    assert!(matches!(
        err,
        RegistrarStoreError::NotFound(RegistrarLookup::Id(_))
    ));
}

#[rstest]
fn list_skips_deleted_records() {
    let Some(db) = TestDatabase::create("registrar_list_deleted") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    let mut ids = Vec::new();
    for (offset, name) in ["a", "b", "c"].into_iter().enumerate() {
        let clock = FixedClock::at_offset(i64::try_from(offset).expect("small offset"));
        ids.push(rt.block_on(store.put(&draft(name, None, clock))).expect("put"));
    }
    let [a, b, c] = ids.as_slice() else {
        panic!("three records were inserted");
    };
    rt.block_on(store.delete(*b)).expect("delete");

    let listed: Vec<_> = rt
        .block_on(store.list())
        .expect("list")
        .iter()
        .map(|cluster| cluster.id())
        .collect();

    assert_eq!(listed, [*a, *c]);
}

#[rstest]
fn deleted_identifier_is_not_reassigned() {
    let Some(db) = TestDatabase::create("registrar_id_reuse") else {
        return;
    };
    let store = db.store();
    let rt = test_runtime();
    let first = rt
        .block_on(store.put(&draft("prod", Some("eu"), FixedClock::at_offset(0))))
        .expect("first");
    rt.block_on(store.delete(first)).expect("delete");

    let replacement = rt
        .block_on(store.put(&draft("prod", Some("eu"), FixedClock::at_offset(1))))
        .expect("replacement");
    let stale = rt.block_on(store.get(&RegistrarLookup::Id(first)));

    assert_ne!(replacement, first);
    assert!(matches!(stale, Err(RegistrarStoreError::NotFound(_))));
}
