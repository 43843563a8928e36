//! Dependency scheduler integration tests.

use dagscope::{prelude::*, schedule::DependencyScheduler};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Fixture(&'static str);

fn build_fixture_scheduler() -> DependencyScheduler<Fixture> {
    let mut scheduler = DependencyScheduler::new();
    scheduler.add_unit(Fixture("logging"));
    scheduler.add_dependency(Fixture("database"), Fixture("config")).unwrap();
    scheduler.add_dependency(Fixture("server"), Fixture("database")).unwrap();
    scheduler.add_dependency(Fixture("server"), Fixture("config")).unwrap();
    scheduler.add_dependency(Fixture("client"), Fixture("server")).unwrap();
    scheduler
}

#[test]
fn schedule_runs_dependencies_first() {
    let scheduler = build_fixture_scheduler();
    let order = scheduler.schedule().unwrap();
    assert_eq!(order.len(), scheduler.unit_count());

    let position = |name: &str| order.iter().position(|f| f.0 == name).unwrap();
    assert!(position("config") < position("database"));
    assert!(position("database") < position("server"));
    assert!(position("server") < position("client"));
}

#[test]
fn levels_group_independent_units() {
    let scheduler = build_fixture_scheduler();
    let levels = scheduler.levels().unwrap();

    assert_eq!(levels.len(), 4);
    assert_eq!(levels[0], vec![Fixture("logging"), Fixture("config")]);
    assert_eq!(levels[3], vec![Fixture("client")]);
}

#[test]
fn cycle_surfaces_as_scheduling_error() {
    let mut scheduler = build_fixture_scheduler();
    scheduler
        .add_dependency(Fixture("config"), Fixture("client"))
        .unwrap();

    let err = scheduler.schedule().unwrap_err();
    assert!(matches!(err, Error::Scheduling(_)));
    assert!(err.to_string().starts_with("cannot schedule: dependency cycle"));

    let cycles = scheduler.cycles();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 4);
    assert!(!cycles[0].contains(&Fixture("logging")));
}
