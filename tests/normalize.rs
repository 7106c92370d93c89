use forksat::cnf::cnf::{Cnf, Lit};
use forksat::sat::db::{normalize, ClauseDb};

fn lits(xs: &[i32]) -> Vec<Lit> {
    xs.iter()
        .map(|&x| Lit::from_dimacs(x).expect("literal"))
        .collect()
}

#[test]
fn sorts_by_variable_and_deduplicates() {
    let canonical = normalize(&lits(&[3, 1, 3, -2])).expect("not a tautology");
    assert_eq!(canonical, lits(&[1, -2, 3]));
}

#[test]
fn idempotent_on_canonical_input() {
    let canonical = normalize(&lits(&[-1, 2, 4])).expect("not a tautology");
    assert_eq!(
        normalize(&canonical).expect("not a tautology"),
        canonical
    );
}

#[test]
fn rejects_tautologies() {
    assert_eq!(normalize(&lits(&[1, 2, -1])), None);
    assert_eq!(normalize(&lits(&[2, -2])), None);
}

#[test]
fn empty_clause_stays_empty() {
    assert_eq!(normalize(&[]), Some(vec![]));
}

#[test]
fn build_counts_live_occurrences() {
    let mut cnf = Cnf::new(3);
    cnf.add_clause(lits(&[1, -2]));
    cnf.add_clause(lits(&[1, 2, 3]));
    cnf.add_clause(lits(&[2, -2, 3])); // tautology, must not count
    let (db, _) = ClauseDb::build(&cnf).expect("no empty clause");
    assert_eq!(db.clauses().len(), 2);
    assert_eq!((db.var(0).pos_count, db.var(0).neg_count), (2, 0));
    assert_eq!((db.var(1).pos_count, db.var(1).neg_count), (1, 1));
    assert_eq!((db.var(2).pos_count, db.var(2).neg_count), (1, 0));
}

#[test]
fn build_seeds_units_then_pures() {
    let mut cnf = Cnf::new(3);
    cnf.add_clause(lits(&[-3]));
    cnf.add_clause(lits(&[1, 2]));
    cnf.add_clause(lits(&[-2, 3]));
    let (_, forced) = ClauseDb::build(&cnf).expect("no empty clause");
    // unit clauses in input order, then pure literals in variable order
    assert_eq!(forced, lits(&[-3, 1]));
}

#[test]
fn build_rejects_empty_input_clause() {
    let mut cnf = Cnf::new(1);
    cnf.add_clause(vec![]);
    assert!(ClauseDb::build(&cnf).is_none());
}
