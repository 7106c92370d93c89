use anyhow::{bail, Context, Result};

use super::cnf::{Cnf, Lit};

pub fn parse_dimacs(input: &str) -> Result<Cnf> {
    let mut header: Option<(u32, usize)> = None;
    let mut clauses: Vec<Vec<Lit>> = Vec::new();
    let mut current: Vec<Lit> = Vec::new();

    for (lineno, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            if header.is_some() {
                bail!("line {}: duplicate problem line", lineno + 1);
            }
            header = Some(parse_problem_line(line).with_context(|| format!("line {}", lineno + 1))?);
            continue;
        }
        if header.is_none() {
            bail!("line {}: clause before problem line", lineno + 1);
        }
        for token in line.split_whitespace() {
            let x: i32 = token
                .parse()
                .with_context(|| format!("line {}: bad literal {:?}", lineno + 1, token))?;
            if x == 0 {
                clauses.push(std::mem::take(&mut current));
            } else {
                current.push(Lit::from_dimacs(x)?);
            }
        }
    }

    let Some((num_vars, num_clauses)) = header else {
        bail!("missing problem line");
    };
    if !current.is_empty() {
        bail!("last clause is not terminated by 0");
    }
    if clauses.len() != num_clauses {
        bail!(
            "problem line declares {} clauses but {} were read",
            num_clauses,
            clauses.len()
        );
    }

    let cnf = Cnf { num_vars, clauses };
    cnf.validate()?;
    Ok(cnf)
}

fn parse_problem_line(line: &str) -> Result<(u32, usize)> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("p") || parts.next() != Some("cnf") {
        bail!("problem line must start with 'p cnf'");
    }
    let num_vars = parts
        .next()
        .context("problem line is missing the variable count")?
        .parse::<u32>()
        .context("bad variable count")?;
    let num_clauses = parts
        .next()
        .context("problem line is missing the clause count")?
        .parse::<usize>()
        .context("bad clause count")?;
    if parts.next().is_some() {
        bail!("trailing tokens after the problem line");
    }
    Ok((num_vars, num_clauses))
}

pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cnf.num_vars, cnf.clauses.len()));
    for clause in &cnf.clauses {
        for &lit in clause {
            out.push_str(&format!("{} ", lit.to_dimacs()));
        }
        out.push_str("0\n");
    }
    out
}

/// Witness files hold the model as signed literals, zero-terminated.
pub fn write_witness(model: &[bool]) -> String {
    let mut out = String::new();
    for (i, &value) in model.iter().enumerate() {
        let lit = Lit::new(i as u32 + 1, value);
        out.push_str(&format!("{} ", lit.to_dimacs()));
    }
    out.push_str("0\n");
    out
}

pub fn parse_witness(input: &str, num_vars: u32) -> Result<Vec<bool>> {
    let mut model = vec![false; num_vars as usize];
    let mut terminated = false;
    for token in input.split_whitespace() {
        if terminated {
            bail!("trailing tokens after the terminating 0");
        }
        let x: i32 = token
            .parse()
            .with_context(|| format!("bad witness literal {:?}", token))?;
        if x == 0 {
            terminated = true;
            continue;
        }
        let lit = Lit::from_dimacs(x)?;
        if lit.var > num_vars {
            bail!(
                "witness literal {} is out of range for {} variables",
                x,
                num_vars
            );
        }
        model[lit.index()] = lit.sign;
    }
    if !terminated {
        bail!("witness is not terminated by 0");
    }
    Ok(model)
}
