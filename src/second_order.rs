

// imports
use crate::cooccurrence::CsrMatrix;
use crate::vocab::Vocabulary;

use ndarray::Array1;


// per-target second-order expansion over a read-only co-occurrence matrix.
//
// a target's first-order row says which contexts it was seen with and how
// often. Each of those contexts, when it also has a row of its own, tells
// what *it* co-occurs with in the target role. Summing those rows weighted
// by the first-order counts yields a profile of words that tend to co-occur
// with the words that co-occur with the target.
pub struct SecondOrder<'a> {
    matrix: &'a CsrMatrix,
    alignment: Vec<Option<usize>>,
}

impl<'a> SecondOrder<'a> {

    pub fn new(matrix: &'a CsrMatrix, vocab: &Vocabulary) -> Self {
        Self {
            matrix: matrix,
            alignment: SecondOrder::build_alignment(vocab),
        }
    }

    // maps a column id to the row id of the same word, defined only when the
    // word also acts as a target somewhere in the corpus. Rows and columns
    // share one id space here, so the aligned row id equals the column id and
    // the map is really a membership gate.
    fn build_alignment(vocab: &Vocabulary) -> Vec<Option<usize>> {

        (0..vocab.len())
            .map(|i| if vocab.is_target(i) { Some(i) } else { None })
            .collect()
    }

    // the weighted row aggregation. Returns None when the target carries no
    // exploitable signal: an empty first-order row, no alignable contexts,
    // or an all-zero aggregate. Such targets are skipped, never sampled.
    pub fn expand(&self, target_id: usize) -> Option<Array1<f64>> {

        let (contexts, weights) = self.matrix.row(target_id);
        if contexts.is_empty() {
            return None;
        }

        let mut vector = Array1::<f64>::zeros(self.matrix.dim());
        let mut usable = false;
        for (c, w) in contexts.iter().zip(weights) {

            // contexts that never act as a target contribute nothing further
            let row_id = match self.alignment[*c] {
                Some(row_id) => row_id,
                None => continue
            };
            usable = true;

            let (cols, vals) = self.matrix.row(row_id);
            for (j, v) in cols.iter().zip(vals) {
                vector[*j] += w * v;
            }
        }

        if !usable || vector.iter().all(|v| *v == 0.0) {
            return None;
        }
        Some(vector)
    }

}
