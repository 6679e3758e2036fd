use super::*;

// =============================================================================
// SUBSTITUTION APPLICATION PROPERTIES
// =============================================================================
//
// Bindings are triangular (a variable may point at another bound variable),
// so application must chase chains to a fixed point.

fn subst(pairs: &[(&str, Term)]) -> Substitution {
    let mut s = Substitution::empty();
    for (v, t) in pairs {
        s.bind(Var::new(*v), t.clone());
    }
    s
}

// -------------------------------------------------------------------------
// Property: application is idempotent
// -------------------------------------------------------------------------
#[test]
fn application_is_idempotent_on_chains() {
    let s = subst(&[
        ("X", Term::var("Y")),
        ("Y", Term::app("f", vec![Term::var("Z")])),
        ("Z", Term::constant("c")),
    ]);
    let term = pred("p", &["X", "Y", "W"]);
    let once = s.apply(&term);
    let twice = s.apply(&once);
    assert_eq!(once, twice, "apply(apply(T, S), S) must equal apply(T, S)");
}

#[test]
fn fully_applied_term_has_no_bound_variables() {
    let s = subst(&[("X", Term::var("Y")), ("Y", Term::constant("a"))]);
    let applied = s.apply(&pred("p", &["X", "Y", "Z"]));
    for var in applied.variables() {
        assert!(
            s.lookup(&var).is_none(),
            "{} is bound but survived application",
            var
        );
    }
}

// -------------------------------------------------------------------------
// Property: application never changes atoms or arity
// -------------------------------------------------------------------------
#[test]
fn application_preserves_shape() {
    let s = subst(&[("X", Term::constant("a"))]);
    let term = Term::tuple(vec![Term::int(1), Term::var("X"), Term::text("t")]);
    let applied = s.apply(&term);
    assert_eq!(applied.arity(), term.arity());
    assert_eq!(
        applied,
        Term::tuple(vec![Term::int(1), Term::constant("a"), Term::text("t")])
    );
}

// -------------------------------------------------------------------------
// Property: self-reference terminates the chain
// -------------------------------------------------------------------------
#[test]
fn self_bound_variable_resolves_to_itself() {
    let s = subst(&[("X", Term::var("X")), ("Y", Term::var("X"))]);
    assert_eq!(s.apply(&Term::var("Y")), Term::var("X"));
}
