

// imports
use std::error::Error;
use ndarray::Array1;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};


// draws new context words from a second-order profile. The random source is
// passed in by the caller, so seeding and per-worker streams stay under the
// caller's control instead of living in a process-wide global.
pub struct Sampler {
    samplesize: f64,
}

impl Sampler {

    pub fn new(samplesize: f64) -> Self {
        Self {
            samplesize: samplesize,
        }
    }

    // how many draws a target of the given frequency receives
    pub fn n_samples(&self, freq: usize) -> usize {
        (self.samplesize * freq as f64).floor() as usize
    }

    // multinomial draw with replacement over the non-zero entries of the
    // profile, each entry weighted by its value (WeightedIndex normalizes
    // the weights to a probability distribution). Draws equal to the target
    // itself are filtered afterwards and are not topped up, so a target may
    // end up with fewer than n_samples contexts.
    pub fn sample_contexts<R: Rng>(
        &self,
        vector: &Array1<f64>,
        target_id: usize,
        freq: usize,
        rng: &mut R) -> Result<Vec<usize>, Box<dyn Error>> {

        let n_samples = self.n_samples(freq);
        if n_samples == 0 {
            return Ok(Vec::new());
        }

        let (ids, weights): (Vec<usize>, Vec<f64>) = vector
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.0)
            .map(|(i, v)| (i, *v))
            .unzip();

        let dist = WeightedIndex::new(&weights)
            .map_err(|e| format!("cannot build sampling distribution: {}", e))?;

        let contexts = (0..n_samples)
            .map(|_| ids[dist.sample(rng)])
            .filter(|c| *c != target_id)
            .collect();

        Ok(contexts)
    }

}
