use super::*;

// =============================================================================
// SLD RESOLUTION SEMANTICS
// =============================================================================
//
// Leftmost goal first, facts before rules, each in declaration order, depth
// first. Every answer is a logical consequence of the knowledge base, and on
// a finite search space every consequence is found.

fn solutions(kb: &KnowledgeBase, goals: Vec<Term>) -> Vec<crate::sld::Solution> {
    solve(kb, goals, Substitution::empty(), Trace::new(), VarCounter::new()).collect()
}

const DOCUMENTS: &str = "
    subtipo_de(acta_existente, acta_nacimiento).
    subtipo_de(acta_primera_vez, acta_nacimiento).
    requiere(acta_existente, curp).
    requiere(acta_primera_vez, constancia_alumbramiento).
    requiere(acta_primera_vez, identificacion_padres).
    requiere(G, R) :- subtipo_de(E, G), requiere(E, R).
";

// -------------------------------------------------------------------------
// Property: soundness, every answer instance is derivable
// -------------------------------------------------------------------------
#[test]
fn answers_are_instances_of_facts_or_rule_chains() {
    let kb = kb(DOCUMENTS);
    let query = pred("requiere", &["acta_nacimiento", "X"]);
    for solution in solutions(&kb, vec![query.clone()]) {
        let instance = solution.substitution.apply(&query);
        assert!(instance.is_ground(), "{} should be ground", instance);
        // The first step must be the bridge rule, since no fact mentions
        // acta_nacimiento as the first argument of requiere.
        assert!(!solution.trace[0].is_fact());
    }
}

// -------------------------------------------------------------------------
// Property: completeness on a finite search space
// -------------------------------------------------------------------------
#[test]
fn every_requirement_is_found_in_order() {
    let kb = kb(DOCUMENTS);
    let found: Vec<Term> = answers(&kb, pred("requiere", &["acta_nacimiento", "X"]))
        .into_iter()
        .filter_map(|a| a.binding("X").cloned())
        .collect();
    assert_eq!(
        found,
        vec![
            Term::constant("curp"),
            Term::constant("constancia_alumbramiento"),
            Term::constant("identificacion_padres"),
        ]
    );
}

#[test]
fn facts_answer_before_the_recursive_rule() {
    let kb = kb(DOCUMENTS);
    let found: Vec<Term> = answers(&kb, pred("requiere", &["Doc", "X"]))
        .into_iter()
        .filter_map(|a| a.binding("Doc").cloned())
        .collect();
    assert_eq!(
        &found[..3],
        &[
            Term::constant("acta_existente"),
            Term::constant("acta_primera_vez"),
            Term::constant("acta_primera_vez"),
        ]
    );
    assert_eq!(found.len(), 6);
}

// -------------------------------------------------------------------------
// Property: conjunctions thread bindings left to right
// -------------------------------------------------------------------------
#[test]
fn later_goals_see_earlier_bindings() {
    let kb = kb("
        costo(placas, estandar, 500).
        costo(placas, urgente, 900).
        barato(500).
    ");
    let all = solutions(
        &kb,
        vec![pred("costo", &["placas", "D", "M"]), pred("barato", &["M"])],
    );
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].substitution.apply(&Term::var("D")),
        Term::constant("estandar")
    );
    assert_eq!(all[0].trace[1].goal, Term::app("barato", vec![Term::int(500)]));
}

// -------------------------------------------------------------------------
// Property: failure is final, not an error
// -------------------------------------------------------------------------
#[test]
fn unknown_predicate_fails_quietly() {
    let kb = kb(DOCUMENTS);
    assert!(solutions(&kb, vec![pred("desconocido", &["X"])]).is_empty());
}

#[test]
fn empty_knowledge_base_answers_nothing() {
    let kb = KnowledgeBase::new();
    assert!(solutions(&kb, vec![pred("p", &["X"])]).is_empty());
}

// -------------------------------------------------------------------------
// Property: the search does not modify the knowledge base
// -------------------------------------------------------------------------
#[test]
fn search_leaves_knowledge_base_intact() {
    let kb = kb(DOCUMENTS);
    let before = kb.clone();
    let _ = solutions(&kb, vec![pred("requiere", &["X", "Y"])]);
    assert_eq!(kb, before);
}

// -------------------------------------------------------------------------
// Property: trace length equals resolution steps
// -------------------------------------------------------------------------
#[test]
fn bridge_rule_trace_has_three_steps() {
    let kb = kb(DOCUMENTS);
    let first = solutions(&kb, vec![pred("requiere", &["acta_nacimiento", "X"])])
        .into_iter()
        .next()
        .expect("at least one solution");
    let trace: Vec<String> = first.trace.iter().map(|s| s.to_string()).collect();
    assert_eq!(trace.len(), 3);
    assert!(trace[0].contains("applies rule requiere(_G_1, _R_2)"));
    assert!(trace[1].contains("matches fact subtipo_de(acta_existente, acta_nacimiento)"));
    assert!(trace[2].contains("matches fact requiere(acta_existente, curp)"));
}
