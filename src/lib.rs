//! Numeric kernels for an embedded MFCC front end.
//!
//! Two fixed transforms make up the crate: a 64-point DCT-II evaluated
//! through a real FFT plus twiddle-weight multiply
//! ([`dsp::cepstrum::CepstralTransform`]), and a sparse linear-to-mel
//! binning/log step driven by a constant weight table
//! ([`dsp::melbank::MelFilterbank`]). [`dsp::mfcc::MfccExtractor`] chains
//! them into the full magnitude-spectrum-to-MFCC pipeline.
//!
//! Audio capture, framing/windowing, feature buffering, and inference all
//! live outside this crate; callers hand in magnitude spectra and frames and
//! get feature vectors back.

pub mod dsp;

pub use dsp::cepstrum::{CepstralTransform, FRAME_LEN, NUM_COEFFS};
pub use dsp::melbank::MelFilterbank;
pub use dsp::mfcc::MfccExtractor;
