//! Radix-2 Cooley-Tukey FFT over `Complex64`.
//!
//! The forward transform uses twiddle factors `exp(-2πik/N)`. The inverse
//! is computed as conjugate, forward transform, conjugate, scale by `1/N`,
//! so only one transform algorithm exists.

use log::debug;
use num_complex::Complex64;
use num_traits::Zero;
use zmath_scalar::PI;

use crate::error::{PolyError, PolyResult};

/// Sequence length from which the even and odd half-transforms run on
/// separate rayon tasks. Below it the recursion stays on one thread.
pub const PARALLEL_FFT_THRESHOLD: usize = 1 << 14;

/// Computes the discrete Fourier transform in-place.
///
/// The length must be a power of two; lengths 0 and 1 are their own
/// transform.
pub fn fft(data: &mut [Complex64]) -> PolyResult<()> {
    check_len(data.len())?;
    transform(data);
    Ok(())
}

/// Computes the inverse discrete Fourier transform in-place.
///
/// `ifft(fft(x))` recovers `x` up to rounding.
pub fn ifft(data: &mut [Complex64]) -> PolyResult<()> {
    check_len(data.len())?;
    inverse_transform(data);
    Ok(())
}

/// Linear convolution of two real sequences via FFT.
///
/// Both inputs are zero-padded to the smallest power of two that holds
/// `a.len() + b.len() - 1` entries. The imaginary parts of the inverse
/// transform are discarded. Returns an empty vector if either input is
/// empty.
#[must_use]
pub fn fft_convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let result_len = a.len() + b.len() - 1;
    let n = result_len.next_power_of_two();
    debug!(
        "FFT convolution: {} x {} coefficients, transform length {n}",
        a.len(),
        b.len()
    );

    let mut fa = to_complex(a, n);
    let mut fb = to_complex(b, n);

    transform(&mut fa);
    transform(&mut fb);

    // Pointwise multiplication
    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= *y;
    }

    inverse_transform(&mut fa);

    fa.into_iter().take(result_len).map(|c| c.re).collect()
}

fn check_len(len: usize) -> PolyResult<()> {
    if len <= 1 || len.is_power_of_two() {
        Ok(())
    } else {
        Err(PolyError::NonPowerOfTwoLength { len })
    }
}

fn to_complex(values: &[f64], n: usize) -> Vec<Complex64> {
    let mut out: Vec<Complex64> = values.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    out.resize(n, Complex64::zero());
    out
}

fn transform(data: &mut [Complex64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let half = n / 2;

    let mut even: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();

    if n >= PARALLEL_FFT_THRESHOLD {
        rayon::join(|| transform(&mut even), || transform(&mut odd));
    } else {
        transform(&mut even);
        transform(&mut odd);
    }

    for k in 0..half {
        let t = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64) * odd[k];
        data[k] = even[k] + t;
        data[k + half] = even[k] - t;
    }
}

fn inverse_transform(data: &mut [Complex64]) {
    let n = data.len();
    if n == 0 {
        return;
    }

    for x in data.iter_mut() {
        *x = x.conj();
    }
    transform(data);

    let scale = 1.0 / n as f64;
    for x in data.iter_mut() {
        *x = x.conj() * scale;
    }
}
