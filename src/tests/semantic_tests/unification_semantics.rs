use super::*;

// =============================================================================
// UNIFICATION SEMANTIC PROPERTIES
// =============================================================================
//
// Syntactic unification without occurs-check. The result must be a unifier
// (both sides become equal under it) and must extend, never rewrite, the
// substitution it started from.

fn unifier(t1: &Term, t2: &Term, s: &Substitution) -> Substitution {
    match unify(t1, t2, s) {
        UnifyResult::Success(sigma) => sigma,
        UnifyResult::Failure(e) => panic!("expected {} and {} to unify: {}", t1, t2, e),
    }
}

// -------------------------------------------------------------------------
// Property: the result is a unifier
// -------------------------------------------------------------------------
#[test]
fn result_makes_both_sides_equal() {
    let t1 = pred("costo", &["Tramite", "Desc", "estandar"]);
    let t2 = pred("costo", &["placas", "D", "M"]);
    let sigma = unifier(&t1, &t2, &Substitution::empty());
    assert_eq!(
        sigma.apply(&t1),
        sigma.apply(&t2),
        "unifier must make both terms identical"
    );
}

#[test]
fn result_is_unifier_for_nested_terms() {
    // f(X, g(Y)) = f(g(Z), X)
    let t1 = Term::app("f", vec![Term::var("X"), Term::app("g", vec![Term::var("Y")])]);
    let t2 = Term::app("f", vec![Term::app("g", vec![Term::var("Z")]), Term::var("X")]);
    let sigma = unifier(&t1, &t2, &Substitution::empty());
    assert_eq!(sigma.apply(&t1), sigma.apply(&t2));
    assert_eq!(sigma.apply(&Term::var("Y")), sigma.apply(&Term::var("Z")));
}

// -------------------------------------------------------------------------
// Property: ground terms unify iff equal, with no bindings
// -------------------------------------------------------------------------
#[test]
fn ground_equal_terms_unify_without_bindings() {
    let t = pred("es_tramite_valido", &["pasaporte"]);
    let sigma = unifier(&t, &t.clone(), &Substitution::empty());
    assert!(sigma.is_empty());
}

#[test]
fn ground_different_terms_fail() {
    let result = unify(
        &pred("es_tramite_valido", &["pasaporte"]),
        &pred("es_tramite_valido", &["licencia"]),
        &Substitution::empty(),
    );
    assert!(result.is_failure());
}

// -------------------------------------------------------------------------
// Property: variable binding
// -------------------------------------------------------------------------
#[test]
fn variable_binds_to_atom() {
    let sigma = unifier(&Term::var("V"), &Term::constant("a"), &Substitution::empty());
    assert_eq!(sigma.apply(&Term::var("V")), Term::constant("a"));
}

#[test]
fn variable_binds_transitively() {
    // V = W, then W = a: V reaches a through the chain
    let s1 = unifier(&Term::var("V"), &Term::var("W"), &Substitution::empty());
    let s2 = unifier(&Term::var("W"), &Term::constant("a"), &s1);
    assert_eq!(s2.lookup(&Var::new("V")), Some(&Term::var("W")));
    assert_eq!(s2.apply(&Term::var("V")), Term::constant("a"));
}

// -------------------------------------------------------------------------
// Property: arity mismatch fails regardless of contents
// -------------------------------------------------------------------------
#[test]
fn arity_mismatch_fails_even_with_variables() {
    let result = unify(
        &Term::tuple(vec![Term::var("A"), Term::var("B")]),
        &Term::tuple(vec![Term::var("C"), Term::var("D"), Term::var("E")]),
        &Substitution::empty(),
    );
    assert!(result.is_failure());
}

// -------------------------------------------------------------------------
// Property: the starting substitution is extended, never modified
// -------------------------------------------------------------------------
#[test]
fn failure_leaves_no_partial_bindings() {
    // p(X, b) vs p(a, c): X = a is found before the clash on b/c,
    // but the caller's substitution must stay empty.
    let start = Substitution::empty();
    let result = unify(&pred("p", &["X", "b"]), &pred("p", &["a", "c"]), &start);
    assert!(result.is_failure());
    assert!(start.is_empty());
}

#[test]
fn success_extends_existing_bindings() {
    let start = Substitution::singleton(Var::new("Y"), Term::constant("b"));
    let sigma = unifier(&Term::var("X"), &Term::constant("a"), &start);
    assert_eq!(sigma.lookup(&Var::new("Y")), Some(&Term::constant("b")));
    assert_eq!(sigma.lookup(&Var::new("X")), Some(&Term::constant("a")));
}

// -------------------------------------------------------------------------
// Property: unification is symmetric up to which variable gets bound
// -------------------------------------------------------------------------
#[test]
fn symmetric_outcome() {
    let t1 = pred("p", &["X", "b"]);
    let t2 = pred("p", &["a", "Y"]);
    let s12 = unifier(&t1, &t2, &Substitution::empty());
    let s21 = unifier(&t2, &t1, &Substitution::empty());
    assert_eq!(s12.apply(&t1), s21.apply(&t1));
}
