

// imports
use crate::config::files_handling;
use crate::vocab::Vocabulary;

use std::collections::HashMap;
use std::error::Error;


// accumulation phase of the co-occurrence counts. Cell (i, j) counts the
// lines where word i was the left element and word j the right element, so
// the matrix is directional and not assumed symmetric. A hashmap keyed by
// (row, column) keeps the build cheap and incremental, the read-heavy
// aggregation afterwards runs on the compressed form instead.
pub struct CoocCounts {
    tup2cooc: HashMap<(usize, usize), f64>,
    n_lines: usize,
}

impl CoocCounts {

    pub fn new() -> Self {
        Self {
            tup2cooc: HashMap::new(),
            n_lines: 0,
        }
    }

    // second pass over the pair file, using the id assignment of the first
    pub fn from_pair_file(file_path: &str, vocab: &Vocabulary) -> Result<Self, Box<dyn Error>> {

        let mut counts = CoocCounts::new();
        let lines = files_handling::read_lines(file_path)?;
        for (k, line) in lines.enumerate() {
            let line = line?;
            let (word, context) = files_handling::parse_pair(&line, k + 1)?;
            let i = vocab.id(&word)
                .ok_or_else(|| format!("line {}: token '{}' missing from vocabulary", k + 1, word))?;
            let j = vocab.id(&context)
                .ok_or_else(|| format!("line {}: token '{}' missing from vocabulary", k + 1, context))?;
            counts.accumulate(i, j);
        }
        Ok(counts)
    }

    pub fn accumulate(&mut self, i: usize, j: usize) {

        let val = self.tup2cooc.entry((i, j)).or_insert(0.0);
        *val += 1.0;
        self.n_lines += 1;
    }

    pub fn n_lines(&self) -> usize {
        self.n_lines
    }

    // convert the accumulation hashmap to compressed sparse rows. Entries are
    // sorted by (row, column) once, then rows become contiguous slices.
    pub fn into_csr(self, n: usize) -> CsrMatrix {

        let mut entries: Vec<((usize, usize), f64)> = self.tup2cooc.into_iter().collect();
        entries.sort_unstable_by_key(|&((i, j), _)| (i, j));

        let mut indptr = vec![0usize; n + 1];
        let mut indices = Vec::with_capacity(entries.len());
        let mut data = Vec::with_capacity(entries.len());
        for ((i, j), v) in entries {
            indptr[i + 1] += 1;
            indices.push(j);
            data.push(v);
        }
        for i in 0..n {
            indptr[i + 1] += indptr[i];
        }

        CsrMatrix {
            indptr: indptr,
            indices: indices,
            data: data,
            n: n,
        }
    }

}


// square |V| x |V| count matrix in compressed sparse row form. Built once
// after the counting pass and read-only from there on, which is what lets
// the per-target expansion run in parallel later.
pub struct CsrMatrix {
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
    n: usize,
}

impl CsrMatrix {

    // non-zero columns of row i together with their counts
    pub fn row(&self, i: usize) -> (&[usize], &[f64]) {
        let (start, end) = (self.indptr[i], self.indptr[i + 1]);
        (&self.indices[start..end], &self.data[start..end])
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    // total mass of the matrix, equals the number of counted lines
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

}
