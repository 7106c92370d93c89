use forksat::cnf::cnf::{Cnf, Lit};
use forksat::cnf::dimacs::{parse_dimacs, parse_witness, to_dimacs, write_witness};

#[test]
fn parses_comments_header_and_clauses() {
    let input = "\
c a tiny instance
c with two comment lines
p cnf 3 2
1 -3 0
2 3 -1 0
";
    let cnf = parse_dimacs(input).expect("parse");
    assert_eq!(cnf.num_vars, 3);
    assert_eq!(
        cnf.clauses,
        vec![
            vec![Lit::new(1, true), Lit::new(3, false)],
            vec![Lit::new(2, true), Lit::new(3, true), Lit::new(1, false)],
        ]
    );
}

#[test]
fn clauses_may_span_lines() {
    let input = "p cnf 2 2\n1\n2 0 -1\n-2 0\n";
    let cnf = parse_dimacs(input).expect("parse");
    assert_eq!(cnf.clauses.len(), 2);
    assert_eq!(cnf.clauses[0], vec![Lit::new(1, true), Lit::new(2, true)]);
}

#[test]
fn writer_output_parses_back() {
    let mut cnf = Cnf::new(4);
    cnf.add_clause(vec![Lit::new(1, true), Lit::new(4, false)]);
    cnf.add_clause(vec![Lit::new(2, false)]);
    let text = to_dimacs(&cnf);
    assert_eq!(parse_dimacs(&text).expect("parse"), cnf);
}

#[test]
fn rejects_missing_header() {
    assert!(parse_dimacs("1 2 0\n").is_err());
    assert!(parse_dimacs("").is_err());
}

#[test]
fn rejects_duplicate_header() {
    assert!(parse_dimacs("p cnf 1 0\np cnf 1 0\n").is_err());
}

#[test]
fn rejects_unterminated_clause() {
    assert!(parse_dimacs("p cnf 2 1\n1 2\n").is_err());
}

#[test]
fn rejects_clause_count_mismatch() {
    assert!(parse_dimacs("p cnf 2 2\n1 2 0\n").is_err());
}

#[test]
fn rejects_out_of_range_literal() {
    assert!(parse_dimacs("p cnf 1 1\n2 0\n").is_err());
}

#[test]
fn rejects_garbage_tokens() {
    assert!(parse_dimacs("p cnf 1 1\n1 x 0\n").is_err());
    assert!(parse_dimacs("p cnf one 1\n1 0\n").is_err());
}

#[test]
fn witness_round_trip() {
    let model = vec![true, false, false, true];
    let text = write_witness(&model);
    assert_eq!(text, "1 -2 -3 4 0\n");
    assert_eq!(parse_witness(&text, 4).expect("parse"), model);
}

#[test]
fn witness_defaults_unlisted_variables_to_false() {
    let model = parse_witness("2 0\n", 3).expect("parse");
    assert_eq!(model, vec![false, true, false]);
}

#[test]
fn witness_rejects_out_of_range_and_unterminated() {
    assert!(parse_witness("5 0\n", 3).is_err());
    assert!(parse_witness("1 -2\n", 3).is_err());
    assert!(parse_witness("1 0 2\n", 3).is_err());
}
