//! Linear System Examples
//!
//! Factorizes a few matrices, solves systems and compares the unpivoted
//! and partially pivoted paths.
//!
//! Run with: RUST_LOG=debug cargo run -p zmath --example linear_system_demo

use log::{info, warn};
use zmath::prelude::*;

fn hilbert(n: usize) -> LinalgResult<Matrix> {
    Matrix::from_rows(
        (0..n)
            .map(|i| (0..n).map(|j| 1.0 / (i + j + 1) as f64).collect())
            .collect(),
    )
}

fn print_matrix(name: &str, m: &Matrix) {
    println!("{name}:");
    for i in 0..m.num_rows() {
        let row: Vec<String> = m.row(i).iter().map(|v| format!("{v:>10.5}")).collect();
        println!("  [{}]", row.join(" "));
    }
}

fn main() -> Result<(), LinalgError> {
    env_logger::init();

    println!("=== Solving a 2x2 system ===");
    let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]])?;
    let b = Vector::col(vec![3.0, 5.0]);
    let x = a.solve(&b)?;
    println!("x = {:?}", x.as_slice());
    println!("A x = {:?}", a.mul_vector(&x)?.as_slice());

    println!("\n=== LU factors ===");
    let lu = a.lu_decompose()?;
    print_matrix("L", &lu.lower());
    print_matrix("U", &lu.upper());
    println!("det(A) = {}", lu.determinant());

    println!("\n=== Hilbert matrix inverse ===");
    let h = hilbert(4)?;
    let h_inv = h.inverse()?;
    print_matrix("H^-1", &h_inv);
    let residual = h.matmul(&h_inv)?.checked_sub(&Matrix::identity(4)?)?;
    let worst = (0..4)
        .flat_map(|i| residual.row(i).to_vec())
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    info!("largest entry of H * H^-1 - I: {worst:e}");
    println!("max |H H^-1 - I| = {worst:e}");

    println!("\n=== Zero leading pivot ===");
    let p = Matrix::from_rows(vec![
        vec![0.0, 2.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![3.0, 0.0, 1.0],
    ])?;
    match p.lu_decompose() {
        Ok(_) => println!("unpivoted LU succeeded"),
        Err(e) => {
            warn!("unpivoted factorization failed: {e}");
            println!("unpivoted LU: {e}");
        }
    }
    let plu = p.plu_decompose()?;
    println!("permutation = {:?}", plu.permutation());
    println!("det = {}", p.determinant()?);
    let y = plu.solve(&Vector::col(vec![1.0, 2.0, 3.0]))?;
    println!("solution = {:?}", y.as_slice());

    println!("\n=== Vector products ===");
    let col = Vector::col(vec![1.0, 2.0, 3.0]);
    let row = col.transpose();
    if let MulResult::Scalar(s) = row.product(&col)? {
        println!("inner product = {s}");
    }
    if let MulResult::Matrix(m) = col.product(&row)? {
        print_matrix("outer product", &m);
    }
    match col.product(&col) {
        Ok(_) => println!("column * column unexpectedly succeeded"),
        Err(e) => println!("column * column: {e}"),
    }

    Ok(())
}
