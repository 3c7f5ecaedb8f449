use rand::{rngs::SmallRng, SeedableRng};
use shipgame::sim::simulate;
use shipgame::{BoardError, Outcome, CLASSIC_FLEET};

#[test]
fn classic_playout_finishes() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = simulate(&mut rng, &CLASSIC_FLEET).unwrap();
        assert!(report.outcome.is_terminal());
        // Sinking 17 cells takes at least 17 shots by the winner.
        assert!(report.shots >= 2 * 17 - 1);
        assert!(report.shots <= 200);
    }
}

#[test]
fn playout_is_reproducible() {
    let a = simulate(&mut SmallRng::seed_from_u64(99), &CLASSIC_FLEET).unwrap();
    let b = simulate(&mut SmallRng::seed_from_u64(99), &CLASSIC_FLEET).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_fleet_ends_on_first_shot() {
    let report = simulate(&mut SmallRng::seed_from_u64(1), &[]).unwrap();
    assert_eq!(report.outcome, Outcome::FirstWon);
    assert_eq!(report.shots, 1);
}

#[test]
fn invalid_fleet_is_rejected() {
    let err = simulate(&mut SmallRng::seed_from_u64(1), &[3, 1]).unwrap_err();
    assert_eq!(err, BoardError::InvalidLength(1));
}
