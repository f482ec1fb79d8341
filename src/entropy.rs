//! Random bits from analog noise.
//!
//! The joystick ADC readings wobble in their least significant bit even when
//! the stick is untouched. XOR-ing the parity of two readings gives a usable
//! coin flip. It is not cryptographic and makes no claim to be.

/// Analog sampling collaborator.
///
/// Implement this for the ADC channels you want to harvest. `sample` must not
/// block; returning the most recent conversion results is fine.
pub trait AnalogSampler {
    /// Returns two raw magnitudes (e.g. joystick X and Y).
    fn sample(&mut self) -> (u32, u32);
}

/// Exclusive-or of the parities of two raw magnitudes.
#[inline]
pub fn parity_bit(x: u32, y: u32) -> bool {
    ((x ^ y) & 1) == 1
}

/// Stateless source of one pseudo-random bit per call.
pub struct RandomBitSource;

impl RandomBitSource {
    /// Pulls one sample pair from `sampler` and folds it into a bit.
    pub fn sample_bit<S: AnalogSampler>(sampler: &mut S) -> bool {
        let (x, y) = sampler.sample();
        let bit = parity_bit(x, y);
        trace!("entropy sample x={} y={} -> {}", x, y, bit);
        bit
    }
}
