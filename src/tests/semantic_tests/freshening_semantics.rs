use super::*;

// =============================================================================
// RENAMING APART
// =============================================================================
//
// Each use of a rule gets its own copy of the rule's variables. Names come
// from one counter per query, so copies never collide with each other or with
// the query's own variables.

fn rule(source: &str) -> Rule {
    kb(source).rules()[0].clone()
}

// -------------------------------------------------------------------------
// Property: shared variables stay shared
// -------------------------------------------------------------------------
#[test]
fn head_body_sharing_survives() {
    let mut counter = VarCounter::new();
    let fresh = freshen(
        &rule("requiere(G, R) :- subtipo_de(E, G), requiere(E, R)."),
        &mut counter,
    );
    let head_vars = fresh.head.variables();
    let body_vars: Vec<Var> = fresh.body.iter().flat_map(|g| g.variables()).collect();
    assert!(body_vars.contains(&head_vars[0]));
    assert!(body_vars.contains(&head_vars[1]));
    assert_eq!(fresh.variables().len(), 3);
}

// -------------------------------------------------------------------------
// Property: two copies share nothing
// -------------------------------------------------------------------------
#[test]
fn successive_copies_are_disjoint() {
    let mut counter = VarCounter::new();
    let r = rule("p(X, Y) :- q(X), r(Y).");
    let first = freshen(&r, &mut counter).variables();
    let second = freshen(&r, &mut counter).variables();
    for var in &first {
        assert!(!second.contains(var), "{} appears in both copies", var);
    }
}

#[test]
fn copies_never_reuse_user_names() {
    let mut counter = VarCounter::new();
    let r = rule("p(X) :- q(X).");
    let fresh = freshen(&r, &mut counter);
    for var in fresh.variables() {
        assert!(!var.is_user());
        assert!(!r.variables().contains(&var));
    }
}

// -------------------------------------------------------------------------
// Property: variable-free rules are unchanged
// -------------------------------------------------------------------------
#[test]
fn ground_rule_is_copied_verbatim() {
    let mut counter = VarCounter::new();
    let r = rule("listo(yo) :- tiene(yo, acta).");
    assert_eq!(freshen(&r, &mut counter), r);
    assert_eq!(counter.current(), 0);
}

// -------------------------------------------------------------------------
// Property: numbering is deterministic per query
// -------------------------------------------------------------------------
#[test]
fn fresh_counters_give_identical_copies() {
    let r = rule("p(A, B) :- q(B, A).");
    let one = freshen(&r, &mut VarCounter::new());
    let two = freshen(&r, &mut VarCounter::new());
    assert_eq!(one, two);
}
