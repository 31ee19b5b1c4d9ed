//! Integration tests for the conditional replacement engine
//!
//! Covers the two slot forms, every recovery variant through its entry
//! point, and the fallible variants with real error types.

use backstop::predicate::{is_zero, ready, PredicateExt};
use backstop::prelude::*;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

trait Shape {
    fn sides(&self) -> u32;
}

#[derive(Debug)]
struct Triangle;

#[derive(Debug)]
struct Square;

impl Shape for Triangle {
    fn sides(&self) -> u32 {
        3
    }
}

impl Shape for Square {
    fn sides(&self) -> u32 {
        4
    }
}

#[test]
fn test_cell_holding_trait_object() {
    let mut shape: Guarded<Box<dyn Shape>> = Guarded::new(Box::new(Triangle));

    against(
        &mut shape,
        |s: &Box<dyn Shape>| s.sides() < 4,
        Recovery::lazy(|| Box::new(Square) as Box<dyn Shape>),
    );

    assert_eq!(shape.get().sides(), 4);
}

#[test]
fn test_struct_field_as_direct_binding() {
    struct Pool {
        size: usize,
    }

    let mut pool = Pool { size: 0 };
    against(&mut pool.size, is_zero(), Recovery::Value(8));
    assert_eq!(pool.size, 8);
}

#[test]
fn test_slot_used_through_dyn() {
    fn repair(slot: &mut dyn Slot<i32>) {
        against(slot, |v: &i32| *v < 0, Recovery::with_current(|v: &i32| -v));
    }

    let mut direct = -4;
    repair(&mut direct);
    assert_eq!(direct, 4);

    let mut cell = Guarded::new(-4);
    repair(&mut cell);
    assert_eq!(cell.into_inner(), 4);
}

#[test]
fn test_combined_predicate() {
    let below_range = |v: &i64| *v < 100;
    let mut value = 0_i64;
    against(&mut value, is_zero().or(below_range), Recovery::Value(100));
    assert_eq!(value, 100);

    let mut value = 250_i64;
    against(&mut value, is_zero().or(below_range), Recovery::Value(100));
    assert_eq!(value, 250);
}

#[test]
fn test_every_recovery_variant_through_sync_entry_point() {
    let odd = |x: &i32| x % 2 != 0;
    let recoveries: Vec<Recovery<'_, i32>> = vec![
        Recovery::value(10),
        Recovery::lazy(|| 10),
        Recovery::with_current(|x: &i32| x + 9),
    ];

    for recovery in recoveries {
        let kind = recovery.kind();
        let mut value = 1;
        against(&mut value, odd, recovery);
        assert_eq!(value, 10, "recovery kind = {}", kind);
    }
}

#[tokio::test]
async fn test_every_recovery_variant_through_async_entry_point() {
    let odd = |x: &i32| {
        let x = *x;
        async move { x % 2 != 0 }
    };
    let recoveries: Vec<AsyncRecovery<'_, i32>> = vec![
        AsyncRecovery::value(10),
        AsyncRecovery::lazy(|| 10),
        AsyncRecovery::with_current(|x: &i32| x + 9),
        AsyncRecovery::lazy_async(|| async { 10 }),
        AsyncRecovery::with_current_async(|x: &i32| {
            let x = *x;
            async move { x + 9 }
        }),
    ];

    for recovery in recoveries {
        let kind = recovery.kind();
        let mut cell = Guarded::new(1);
        async_against(&mut cell, odd, recovery).await;
        assert_eq!(cell.into_inner(), 10, "recovery kind = {}", kind);
    }
}

#[tokio::test]
async fn test_async_predicate_evaluated_once_before_producer() {
    let checks = AtomicUsize::new(0);
    let produced = AtomicUsize::new(0);
    let (checks_ref, produced_ref) = (&checks, &produced);

    let mut value = String::new();
    async_against(
        &mut value,
        |s: &String| {
            let empty = s.is_empty();
            async move {
                checks_ref.fetch_add(1, Ordering::SeqCst);
                assert_eq!(produced_ref.load(Ordering::SeqCst), 0);
                empty
            }
        },
        AsyncRecovery::lazy_async(move || async move {
            produced_ref.fetch_add(1, Ordering::SeqCst);
            String::from("filled")
        }),
    )
    .await;

    assert_eq!(value, "filled");
    assert_eq!(checks.load(Ordering::SeqCst), 1);
    assert_eq!(produced.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dropped_future_stores_nothing() {
    let mut value = 1;
    {
        let pending = async_against(
            &mut value,
            ready(|x: &i32| *x == 1),
            AsyncRecovery::lazy_async(|| futures::future::pending::<i32>()),
        );
        let timed_out = tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
    }
    assert_eq!(value, 1);
}

#[test]
fn test_try_against_propagates_parse_error() {
    fn fill_port(raw: &mut String) -> Result<(), std::num::ParseIntError> {
        try_against(
            raw,
            |s: &String| Ok(s.is_empty()),
            |_: &String| "80x".parse::<u16>().map(|p| p.to_string()),
        )
    }

    let mut raw = String::new();
    assert!(fill_port(&mut raw).is_err());
    assert_eq!(raw, "");
}

#[test]
fn test_try_against_predicate_error_skips_recovery() {
    let produced = AtomicUsize::new(0);
    let mut cell = Guarded::new(5_u8);

    let result = try_against(
        &mut cell,
        |_: &u8| Err::<bool, _>("predicate unavailable"),
        |_: &u8| {
            produced.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        },
    );

    assert_eq!(result, Err("predicate unavailable"));
    assert_eq!(produced.load(Ordering::SeqCst), 0);
    assert_eq!(cell.into_inner(), 5);
}

#[test]
fn test_try_against_success() {
    let mut cell = Guarded::new(-3_i32);
    let result: Result<(), io::Error> =
        try_against(&mut cell, |v: &i32| Ok(*v < 0), |v: &i32| Ok(v.abs()));
    assert!(result.is_ok());
    assert_eq!(cell.into_inner(), 3);
}

#[tokio::test]
async fn test_try_async_against_propagates_error() {
    let mut value = 0_u32;
    let result = try_async_against(
        &mut value,
        |v: &u32| {
            let v = *v;
            async move { Ok::<_, io::Error>(v == 0) }
        },
        |_: &u32| async { Err(io::Error::new(io::ErrorKind::TimedOut, "lookup timed out")) },
    )
    .await;

    let error = result.unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::TimedOut);
    assert_eq!(value, 0);
}

#[tokio::test]
async fn test_try_async_against_predicate_error_skips_recovery() {
    let produced = AtomicUsize::new(0);
    let produced_ref = &produced;
    let mut cell = Guarded::new(Some(String::from("cached")));

    let result = try_async_against(
        &mut cell,
        |_: &Option<String>| async {
            Err::<bool, _>(io::Error::new(io::ErrorKind::NotConnected, "registry offline"))
        },
        move |_: &Option<String>| async move {
            produced_ref.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        },
    )
    .await;

    let error = result.unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::NotConnected);
    assert_eq!(error.to_string(), "registry offline");
    assert_eq!(produced.load(Ordering::SeqCst), 0);
    assert_eq!(cell.into_inner().as_deref(), Some("cached"));
}

#[tokio::test]
async fn test_spawned_async_guard() {
    let handle = tokio::spawn(async {
        let mut cell = Guarded::new(0_u64);
        async_against(
            &mut cell,
            ready(is_zero()),
            AsyncRecovery::lazy_async(|| async {
                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                30_000
            }),
        )
        .await;
        cell.into_inner()
    });

    assert_eq!(handle.await.unwrap(), 30_000);
}

#[tokio::test]
async fn test_try_async_against_with_cell() {
    let mut cell = Guarded::new(None::<String>);
    let result: Result<(), io::Error> = try_async_against(
        &mut cell,
        |v: &Option<String>| {
            let missing = v.is_none();
            async move { Ok(missing) }
        },
        |_: &Option<String>| async { Ok(Some(String::from("resolved"))) },
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(cell.into_inner().as_deref(), Some("resolved"));
}
