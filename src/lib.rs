pub mod cnf;
pub mod sat;
