//! MFCC extraction: log-mel binning followed by a cepstral DCT-II.

use super::cepstrum::{CepstralTransform, FRAME_LEN, NUM_COEFFS};
use super::melbank::MelFilterbank;

/// Runs the two kernels in pipeline order: a magnitude spectrum is folded into
/// 64 log-mel bands, and their DCT-II yields the 13-coefficient feature
/// vector. Owns the intermediate log-mel buffer, so extraction allocates
/// nothing.
#[derive(Debug, Clone)]
pub struct MfccExtractor {
    melbank: MelFilterbank,
    transform: CepstralTransform,
    log_mel: [f32; FRAME_LEN],
}

impl MfccExtractor {
    pub fn new() -> Self {
        let melbank = MelFilterbank::new();
        // The filterbank's band count doubles as the DCT frame length.
        assert_eq!(melbank.num_bands(), FRAME_LEN);
        Self {
            melbank,
            transform: CepstralTransform::new(),
            log_mel: [0.0; FRAME_LEN],
        }
    }

    pub fn melbank(&self) -> &MelFilterbank {
        &self.melbank
    }

    /// Computes the MFCC vector for one linear-frequency magnitude spectrum.
    pub fn extract(&mut self, magnitude: &[f32]) -> [f32; NUM_COEFFS] {
        self.melbank.apply(magnitude, &mut self.log_mel);
        self.transform.process(&mut self.log_mel)
    }
}

impl Default for MfccExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_maps_to_the_floor_cepstrum() {
        let mut extractor = MfccExtractor::new();
        let coeffs = extractor.extract(&vec![0.0f32; 512]);
        // All 64 bands sit at ln(1e-6), so the cepstrum collapses onto
        // coefficient 0: ln(1e-6) * sqrt(128).
        assert!(
            (coeffs[0] + 156.304_66).abs() < 1e-2,
            "c0 = {}",
            coeffs[0]
        );
        for (k, &c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-3, "c{k} = {c}");
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let mut extractor = MfccExtractor::new();
        let magnitude: Vec<f32> = (0..512)
            .map(|i| (i as f32 * 0.013).sin().abs() * 4.0)
            .collect();
        let first = extractor.extract(&magnitude);
        let second = extractor.extract(&magnitude);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn louder_spectra_raise_the_energy_coefficient() {
        let mut extractor = MfccExtractor::new();
        let quiet = extractor.extract(&vec![0.1f32; 512]);
        let loud = extractor.extract(&vec![10.0f32; 512]);
        assert!(loud[0] > quiet[0]);
    }
}
