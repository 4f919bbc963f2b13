//! Polynomial algorithms.
//!
//! This module contains:
//! - Recursive radix-2 complex FFT and its inverse
//! - FFT-based real convolution used by polynomial multiplication

pub mod fft;
