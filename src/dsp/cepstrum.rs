//! Cepstral DCT-II evaluated through a real FFT and a twiddle-weight multiply.

use realfft::{RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex32;
use std::sync::Arc;

/// Analysis frame length in samples.
pub const FRAME_LEN: usize = 64;
/// Number of cepstral coefficients kept after truncation.
pub const NUM_COEFFS: usize = 13;

// Bin count of a real-to-complex FFT over FRAME_LEN points.
const SPECTRUM_LEN: usize = FRAME_LEN / 2 + 1;

// sqrt(2 / FRAME_LEN); doubled when extracting real parts.
const DCT_NORM: f32 = 0.176_776_695;

/// Twiddle weights `W[k] = 0.5 * e^(-i*pi*k/128)` stored as `[re, im]` pairs.
/// Carried verbatim from the offline transform build; coefficients must stay
/// bit-identical for downstream model compatibility.
const DCT_TWIDDLES: [[f32; 2]; FRAME_LEN] = [
    [0.5, 0.0], [0.4998494093481021, -0.012270614261456144], [0.4993977281025862, -0.024533837163709007], [0.4986452283393451, -0.03678228179983371],
    [0.49759236333609846, -0.0490085701647803], [0.496239767299355, -0.0612053375996081], [0.4945882549823905, -0.07336523722768087], [0.4926388211944706, -0.08548094438015061],
    [0.4903926402016152, -0.09754516100806412], [0.4878510650192643, -0.1095506200784349], [0.485015626597272, -0.12149008995163194], [0.4818880328977199, -0.13335637873744918],
    [0.4784701678661044, -0.14514233862723117], [0.47476409029651834, -0.15684087019944576], [0.4707720325915104, -0.16844492669611003], [0.4664963994173695, -0.17994751826749406],
    [0.46193976625564337, -0.1913417161825449], [0.45710487785176535, -0.20262065700249493], [0.45199464656172167, -0.21377754671514104], [0.44661215059775766, -0.22480566482730327],
    [0.4409606321741775, -0.23569836841299882], [0.43504349555435573, -0.24644909611489202], [0.42886430500013606, -0.25705137209661083], [0.42242678262485356, -0.2674988099435486],
    [0.4157348061512726, -0.2777851165098011], [0.40879240657579186, -0.28790409570892267], [0.40160376574032247, -0.2978496522462167], [0.39417321381330317, -0.3076157952903134],
    [0.3865052266813685, -0.31719664208182274], [0.3786044232532423, -0.3265864214768884], [0.37047556267747955, -0.33577947742350917], [0.3621235414757335, -0.3447702723685334],
    [0.3535533905932738, -0.35355339059327373], [0.34477027236853347, -0.36212354147573345], [0.33577947742350917, -0.37047556267747955], [0.3265864214768884, -0.37860442325324223],
    [0.31719664208182274, -0.3865052266813685], [0.3076157952903134, -0.3941732138133031], [0.29784965224621673, -0.4016037657403224], [0.28790409570892267, -0.40879240657579186],
    [0.27778511650980114, -0.4157348061512726], [0.26749880994354863, -0.4224267826248535], [0.25705137209661083, -0.42886430500013606], [0.24644909611489205, -0.4350434955543557],
    [0.2356983684129989, -0.44096063217417747], [0.2248056648273033, -0.44661215059775766], [0.2137775467151411, -0.45199464656172167], [0.20262065700249493, -0.45710487785176535],
    [0.19134171618254492, -0.46193976625564337], [0.17994751826749414, -0.4664963994173694], [0.16844492669611003, -0.4707720325915104], [0.1568408701994458, -0.47476409029651834],
    [0.14514233862723117, -0.47847016786610447], [0.1333563787374492, -0.4818880328977199], [0.12149008995163199, -0.485015626597272], [0.10955062007843488, -0.4878510650192643],
    [0.09754516100806417, -0.4903926402016152], [0.08548094438015068, -0.4926388211944706], [0.07336523722768087, -0.4945882549823905], [0.06120533759960814, -0.496239767299355],
    [0.049008570164780385, -0.4975923633360984], [0.03678228179983373, -0.4986452283393451], [0.024533837163709063, -0.4993977281025862], [0.012270614261456132, -0.4998494093481021],
];

/// 64-point DCT-II specialised for cepstral truncation: only the first
/// [`NUM_COEFFS`] coefficients are produced.
///
/// The frame is re-packed even/odd, run through a forward real FFT, and the
/// resulting spectrum is rotated by [`DCT_TWIDDLES`]; the real parts of the
/// first 13 bins, scaled by `2 * sqrt(2 / 64)`, are the coefficients.
#[derive(Clone)]
pub struct CepstralTransform {
    fft: Arc<dyn RealToComplex<f32>>,
    reorder: [f32; FRAME_LEN],
    spectrum: [Complex32; SPECTRUM_LEN],
    scratch: Vec<Complex32>,
}

impl std::fmt::Debug for CepstralTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CepstralTransform")
            .field("frame_len", &FRAME_LEN)
            .finish_non_exhaustive()
    }
}

impl CepstralTransform {
    pub fn new() -> Self {
        let fft = RealFftPlanner::new().plan_fft_forward(FRAME_LEN);
        Self {
            scratch: vec![Complex32::default(); fft.get_scratch_len()],
            reorder: [0.0; FRAME_LEN],
            spectrum: [Complex32::default(); SPECTRUM_LEN],
            fft,
        }
    }

    /// Computes the truncated DCT-II of `frame`.
    ///
    /// The frame is consumed as FFT working storage; its contents afterwards
    /// are unspecified.
    pub fn process(&mut self, frame: &mut [f32; FRAME_LEN]) -> [f32; NUM_COEFFS] {
        // Even/odd re-pack: y[i] = x[2i], y[N-1-i] = x[2i+1].
        for i in 0..FRAME_LEN / 2 {
            self.reorder[i] = frame[2 * i];
            self.reorder[FRAME_LEN - 1 - i] = frame[2 * i + 1];
        }
        frame.copy_from_slice(&self.reorder);

        let mut coeffs = [0.0f32; NUM_COEFFS];
        if self
            .fft
            .process_with_scratch(frame, &mut self.spectrum, &mut self.scratch)
            .is_err()
        {
            return coeffs;
        }

        let scale = 2.0 * DCT_NORM;
        for (k, coeff) in coeffs.iter_mut().enumerate() {
            let bin = self.spectrum[k];
            let [w_re, w_im] = DCT_TWIDDLES[k];
            *coeff = (bin.re * w_re - bin.im * w_im) * scale;
        }
        coeffs
    }
}

impl Default for CepstralTransform {
    fn default() -> Self {
        Self::new()
    }
}
