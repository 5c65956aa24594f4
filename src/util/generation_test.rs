use super::*;

#[test]
fn issued_ticket_is_current() {
    let mut generation = Generation::default();
    let ticket = generation.issue();
    assert!(generation.is_current(ticket));
}

#[test]
fn newer_ticket_stales_older_one() {
    let mut generation = Generation::default();
    let first = generation.issue();
    let second = generation.issue();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn advance_stales_outstanding_ticket() {
    let mut generation = Generation::default();
    let ticket = generation.issue();
    generation.advance();
    assert!(!generation.is_current(ticket));
}

#[test]
fn invalidate_retires_generation_for_good() {
    let mut generation = Generation::default();
    let before = generation.issue();
    generation.invalidate();
    assert!(!generation.is_current(before));

    let after = generation.issue();
    assert!(!generation.is_current(after));
}
