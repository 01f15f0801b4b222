//! Polynomial Arithmetic Demo
//!
//! Builds two polynomials, one of them with a repeated exponent, and prints
//! their sum, difference and product.
//!
//! Run with: RUST_LOG=trace cargo run --example poly_demo

use std::io::{self, Write};

use tabula::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let p1 = Polynomial::new(vec![Term::new(2.0, 4), Term::new(-3.0, 1), Term::new(6.0, 0)]);
    let p2 = Polynomial::new(vec![Term::new(4.0, 2), Term::new(1.0, 2), Term::new(2.0, 0)]);

    let mut out = io::stdout().lock();
    let labelled = [
        ("Polynomial 1", p1.clone()),
        ("Polynomial 2", p2.clone()),
        ("Sum", &p1 + &p2),
        ("Difference", &p1 - &p2),
        ("Product", &p1 * &p2),
    ];
    for (label, poly) in &labelled {
        write!(out, "{label}: ")?;
        poly.write_to(&mut out)?;
    }
    out.flush()?;

    let prod = &labelled[4].1;
    let mut acc = p1.clone();
    acc *= &p2;
    acc -= prod;
    log::info!("p1 * p2 - product = {acc}");

    Ok(())
}
