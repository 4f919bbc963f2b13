//! Polynomial Arithmetic Examples
//!
//! Builds a few polynomials, multiplies them through the FFT and inspects
//! the results.
//!
//! Run with: RUST_LOG=debug cargo run -p zmath --example polynomial_demo

use log::info;
use zmath::prelude::*;

fn show(name: &str, p: &Polynomial) {
    println!("{name:>10} = {:?}  (degree {:?})", p.coefficients(), p.degree());
}

fn main() -> Result<(), PolyError> {
    env_logger::init();

    let p = Polynomial::new(vec![2.0, -4.0, 0.5, -1.0]);
    let q = Polynomial::new(vec![-1.0, 0.0, 3.0]);

    println!("=== Basic arithmetic ===");
    show("p", &p);
    show("q", &q);
    show("p + q", &(&p + &q));
    show("p - q", &(&p - &q));
    show("p * q", &(&p * &q));
    show("2.5 * q", &(2.5 * &q));

    println!("\n=== Powers ===");
    let x_plus_one = Polynomial::new(vec![1.0, 1.0]);
    for n in 0..=5u32 {
        show(&format!("(x+1)^{n}"), &(&x_plus_one ^ n));
    }

    println!("\n=== Calculus and normalization ===");
    show("p'", &p.derivative());
    show("p''", &p.derivative().derivative());
    show("monic(p)", &p.monic()?);

    println!("\n=== Evaluation ===");
    let pq = &p * &q;
    for x in [-1.0, 0.0, 0.5, 2.0] {
        let direct = pq.evaluate(x);
        let split = p.evaluate(x) * q.evaluate(x);
        info!("evaluated p*q at {x}: {direct}");
        println!("(p*q)({x:>4}) = {direct:>12.6}   p({x})q({x}) = {split:>12.6}");
    }

    println!("\n=== Coefficient edits ===");
    let mut r = Polynomial::new(vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
    show("r", &r);
    let applied = r.set_coefficient(5, 0.0);
    println!("set x^5 to 0 -> applied: {applied}");
    show("r", &r);
    let applied = r.set_coefficient(9, 1.0);
    println!("set x^9 to 1 -> applied: {applied}");

    Ok(())
}
