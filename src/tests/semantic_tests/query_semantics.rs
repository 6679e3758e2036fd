use super::*;

// =============================================================================
// QUERY ANSWER SEMANTICS
// =============================================================================
//
// Answers report only the variables the user wrote, each resolved all the way
// down. Internal variables may remain inside a value when nothing constrains
// them, but never as a reported name.

// -------------------------------------------------------------------------
// Property: only user variables are reported, in first-occurrence order
// -------------------------------------------------------------------------
#[test]
fn reported_variables_follow_the_query() {
    let kb = kb("costo(placas, estandar, 500).");
    let got = answers(&kb, pred("costo", &["T", "D", "M"]));
    assert_eq!(got.len(), 1);
    let names: Vec<&str> = got[0].bindings.iter().map(|(v, _)| v.name()).collect();
    assert_eq!(names, vec!["T", "D", "M"]);
}

#[test]
fn repeated_variable_reported_once() {
    let kb = kb("par(a, a). par(a, b).");
    let got = answers(&kb, pred("par", &["X", "X"]));
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].bindings.len(), 1);
    assert_eq!(got[0].binding("X"), Some(&Term::constant("a")));
}

#[test]
fn internal_names_never_reported() {
    let kb = kb("q(X) :- r(X, Y). r(a, b).");
    let got = answers(&kb, pred("q", &["Z"]));
    assert_eq!(got.len(), 1);
    for (var, value) in &got[0].bindings {
        assert!(var.is_user());
        assert!(value.is_ground());
    }
}

// -------------------------------------------------------------------------
// Property: ground queries answer yes or no
// -------------------------------------------------------------------------
#[test]
fn ground_query_is_affirmative() {
    let kb = kb("es_tramite_valido(pasaporte).");
    let yes = answers(&kb, pred("es_tramite_valido", &["pasaporte"]));
    assert_eq!(yes.len(), 1);
    assert!(yes[0].is_affirmative());
    assert!(answers(&kb, pred("es_tramite_valido", &["licencia"])).is_empty());
}

// -------------------------------------------------------------------------
// Property: unconstrained results stay variables
// -------------------------------------------------------------------------
#[test]
fn fact_variable_is_reported_unrenamed() {
    // Facts are matched as written, so their variables keep their names.
    let kb = kb("cualquiera(X).");
    let got = answers(&kb, pred("cualquiera", &["Y"]));
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].binding("Y"), Some(&Term::var("X")));
}

// -------------------------------------------------------------------------
// Property: queries are independent
// -------------------------------------------------------------------------
#[test]
fn repeated_queries_agree() {
    let kb = kb("p(X) :- q(X). q(a). q(b).");
    let first = answers(&kb, pred("p", &["V"]));
    let second = answers(&kb, pred("p", &["V"]));
    assert_eq!(first, second);
}
