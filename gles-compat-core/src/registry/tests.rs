use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, mpsc};
use std::thread;
use std::time::Duration;

use super::*;
use crate::client::ClientBuffer;
use crate::driver::RenderSurface;
use crate::driver::CapabilityTier;
use crate::testing::{FakeGl, FakeSurface};
use crate::tracked::ClientArray;

fn registry() -> ContextRegistry {
    ContextRegistry::new(ShimConfig::default())
}

#[test]
fn activating_twice_on_one_thread_reuses_the_slot() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);

    registry.activate(&surface).expect("compat surface should activate");
    let first = registry.location();
    registry.activate(&surface).expect("compat surface should activate");

    assert_eq!(registry.location(), first);
    assert_eq!(first, Some(SlotLocation::Bounded(0)));
    assert_eq!(
        registry.occupancy(),
        Occupancy {
            bounded: 1,
            fallback: 0
        }
    );
}

#[test]
fn reactivation_rederives_the_handle() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);

    let first = registry.activate(&surface).expect("activate");
    let second = registry.activate(&surface).expect("activate");

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&registry.current(), &second));
}

#[test]
fn distinct_threads_get_independent_handles() {
    let registry = registry();
    let gl = FakeGl::new();
    let surfaces = [FakeSurface::compat(&gl), FakeSurface::core(&gl)];
    let barrier = Barrier::new(surfaces.len());

    thread::scope(|scope| {
        for surface in &surfaces {
            let registry = &registry;
            let barrier = &barrier;
            scope.spawn(move || {
                registry.activate(surface).expect("activate");
                // Both threads are active before either looks itself up.
                barrier.wait();
                let handle = registry.current();
                assert_eq!(handle.surface(), surface.id);
                assert_eq!(handle.owner(), thread::current().id());
            });
        }
    });

    assert_eq!(registry.occupancy().bounded, 2);
}

#[test]
#[should_panic(expected = "no graphics context")]
fn current_without_activation_panics() {
    let registry = registry();
    let _ = registry.current();
}

#[test]
fn try_current_reports_missing_context() {
    let registry = registry();
    assert!(registry.try_current().is_none());
    assert_eq!(registry.location(), None);
}

#[test]
fn lower_tiers_are_derived_from_extended2() {
    let registry = registry();
    let gl = FakeGl::new();

    let handle = registry.activate(&FakeSurface::core(&gl)).expect("activate");

    assert_eq!(handle.tier(), CapabilityTier::Extended2);
    assert!(handle.extended().is_some());
    assert!(handle.uses_attribute_emulation());
}

#[test]
fn base_only_context_has_no_higher_tiers() {
    let registry = registry();
    let gl = FakeGl::new();

    let handle = registry.activate(&FakeSurface::base_only(&gl)).expect("activate");

    assert_eq!(handle.tier(), CapabilityTier::Base);
    assert!(handle.extended().is_none());
    assert!(handle.extended2().is_none());
    assert!(!handle.uses_attribute_emulation());
}

#[test]
fn activation_without_any_tier_fails_and_changes_nothing() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::unsupported(&gl);

    let err = registry.activate(&surface).expect_err("no tier should resolve");

    assert!(matches!(err, ShimError::NoCapabilityTier { surface: id } if id == surface.id));
    assert!(registry.try_current().is_none());
}

#[test]
fn init_callback_waits_for_activation_and_runs_once() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    registry.on_next_init(move |base| {
        base.clear_color(0.0, 0.0, 0.0, 1.0);
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    registry.activate(&surface).expect("activate");
    registry.activate(&surface).expect("activate");

    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(gl.calls_to("clear_color"), 1);
}

#[test]
fn init_callback_runs_immediately_when_already_active() {
    let registry = registry();
    let gl = FakeGl::new();
    registry.activate(&FakeSurface::compat(&gl)).expect("activate");
    let runs = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&runs);
    registry.on_next_init(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn init_callback_may_reenter_the_registry() {
    let registry = Arc::new(registry());
    let gl = FakeGl::new();
    let seen = Arc::new(AtomicUsize::new(0));

    let inner = Arc::clone(&registry);
    let flag = Arc::clone(&seen);
    registry.on_next_init(move |_| {
        if inner.try_current().is_some() {
            flag.store(1, Ordering::SeqCst);
        }
    });
    registry.activate(&FakeSurface::compat(&gl)).expect("activate");

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn least_recently_activated_entry_moves_to_fallback() {
    let registry = ContextRegistry::new(ShimConfig {
        registry_slots: 2,
        ..ShimConfig::default()
    });
    let gl = FakeGl::new();
    let (activated_tx, activated_rx) = mpsc::channel();
    let (resume_tx, resume_rx) = mpsc::channel::<()>();

    thread::scope(|scope| {
        let registry = &registry;
        let gl = &gl;

        let oldest = scope.spawn(move || {
            let surface = FakeSurface::compat(gl);
            registry.activate(&surface).expect("activate");
            activated_tx.send(()).expect("main thread listening");
            resume_rx.recv().expect("main thread resumes us");
            (registry.location(), registry.current().surface() == surface.id)
        });
        activated_rx.recv().expect("first activation");

        for _ in 0..2 {
            scope
                .spawn(move || {
                    registry.activate(&FakeSurface::compat(gl)).expect("activate");
                })
                .join()
                .expect("activation thread");
        }

        resume_tx.send(()).expect("oldest thread waiting");
        let (location, same_surface) = oldest.join().expect("oldest thread");
        assert_eq!(location, Some(SlotLocation::Fallback));
        assert!(same_surface, "evicted entry must stay reachable");
    });

    assert_eq!(
        registry.occupancy(),
        Occupancy {
            bounded: 2,
            fallback: 1
        }
    );
}

#[test]
fn fallback_entry_is_promoted_on_reactivation() {
    let registry = ContextRegistry::new(ShimConfig {
        registry_slots: 1,
        ..ShimConfig::default()
    });
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);

    registry.activate(&surface).expect("activate");
    thread::scope(|scope| {
        scope.spawn(|| {
            registry.activate(&FakeSurface::compat(&gl)).expect("activate");
        });
    });
    assert_eq!(registry.location(), Some(SlotLocation::Fallback));

    registry.activate(&surface).expect("activate");

    assert_eq!(registry.location(), Some(SlotLocation::Bounded(0)));
    assert_eq!(
        registry.occupancy(),
        Occupancy {
            bounded: 1,
            fallback: 1
        }
    );
}

#[test]
fn zero_bounded_slots_keeps_everything_in_fallback() {
    let registry = ContextRegistry::new(ShimConfig {
        registry_slots: 0,
        ..ShimConfig::default()
    });
    let gl = FakeGl::new();

    registry.activate(&FakeSurface::compat(&gl)).expect("activate");

    assert_eq!(registry.location(), Some(SlotLocation::Fallback));
    assert!(registry.try_current().is_some());
}

#[test]
fn client_state_survives_reactivation_of_the_same_surface() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);
    let colors = ClientBuffer::from(vec![255u8; 16]);

    let handle = registry.activate(&surface).expect("activate");
    handle.client().tracked.set(ClientArray::Color, colors.clone());

    let again = registry.activate(&surface).expect("activate");
    assert!(
        again
            .tracked_pointer(ClientArray::Color)
            .is_some_and(|buffer| buffer.same_region(&colors))
    );

    let other_surface = FakeSurface::compat(&gl);
    let other = registry.activate(&other_surface).expect("activate");
    assert!(other.tracked_pointer(ClientArray::Color).is_none());

    let back = registry.activate(&surface).expect("activate");
    assert!(
        back.tracked_pointer(ClientArray::Color)
            .is_some_and(|buffer| buffer.same_region(&colors))
    );
}

#[test]
fn forgetting_a_surface_drops_its_client_state() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);
    let colors = ClientBuffer::from(vec![0u8; 4]);

    let handle = registry.activate(&surface).expect("activate");
    handle.client().tracked.set(ClientArray::Color, colors);
    drop(handle);

    assert_eq!(registry.forget_surface(surface.surface_id()), 1);
    assert_eq!(registry.forget_surface(surface.surface_id()), 0);

    let fresh = registry.activate(&surface).expect("activate");
    assert!(fresh.tracked_pointer(ClientArray::Color).is_none());
}

#[test]
fn lookups_after_activation_do_not_wait_for_the_lock() {
    let registry = registry();
    let gl = FakeGl::new();
    let surface = FakeSurface::compat(&gl);
    let (activated_tx, activated_rx) = mpsc::channel();
    let (found_tx, found_rx) = mpsc::channel();

    thread::scope(|scope| {
        scope.spawn(|| {
            registry.activate(&surface).expect("activate");
            activated_tx.send(()).expect("main thread alive");
            let _ = found_tx.send(registry.current().surface());
        });

        activated_rx.recv().expect("worker activated");
        let guard = registry.lock();
        let found = found_rx.recv_timeout(Duration::from_secs(5));
        drop(guard);

        assert_eq!(found, Ok(surface.surface_id()));
    });
}

#[test]
fn cached_handle_follows_reactivation() {
    let registry = registry();
    let gl = FakeGl::new();
    let first = FakeSurface::compat(&gl);
    let second = FakeSurface::core(&gl);

    registry.activate(&first).expect("activate");
    assert_eq!(registry.current().surface(), first.surface_id());
    registry.activate(&second).expect("activate");

    assert_eq!(registry.current().surface(), second.surface_id());
}
