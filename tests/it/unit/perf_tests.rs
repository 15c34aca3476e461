//! Unit tests for perf module.

use dragdrop::perf::ScopedTimer;
use dragdrop::profile_scope;

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it must not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_profile_scope_compiles_in_any_build() {
    profile_scope!("outer");
    {
        profile_scope!("inner", 5.0);
    }
}
