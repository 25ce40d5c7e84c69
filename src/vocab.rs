

// imports
use crate::config::files_handling;

use std::collections::HashMap;
use std::error::Error;


// the vocabulary assigns every distinct token found in the pair file an id in
// [0, |V|), whether it appeared on the left (target role) or on the right
// (context role). Target frequencies count lines by their left token only and
// never weight the co-occurrence matrix, they just gate eligibility and size
// the sample later on.
pub struct Vocabulary {
    t2i: HashMap<String, usize>,
    i2t: Vec<String>,
    freqs: Vec<usize>,
    n_pairs: usize,
}

impl Vocabulary {

    pub fn new() -> Self {
        Self {
            t2i: HashMap::new(),
            i2t: Vec::new(),
            freqs: Vec::new(),
            n_pairs: 0,
        }
    }

    // first pass over the pair file: intern every token and count target
    // appearances. Ids are handed out in first-seen order and stay fixed
    // for the rest of the run.
    pub fn from_pair_file(file_path: &str) -> Result<Self, Box<dyn Error>> {

        let mut vocab = Vocabulary::new();
        let lines = files_handling::read_lines(file_path)?;
        for (k, line) in lines.enumerate() {
            let line = line?;
            let (word, context) = files_handling::parse_pair(&line, k + 1)?;
            vocab.accumulate(&word, &context);
        }
        Ok(vocab)
    }

    pub fn accumulate(&mut self, word: &str, context: &str) {

        let target_id = self.intern(word);
        self.freqs[target_id] += 1;
        self.intern(context);
        self.n_pairs += 1;
    }

    fn intern(&mut self, token: &str) -> usize {

        match self.t2i.get(token) {
            Some(&i) => i,
            None => {
                let i = self.i2t.len();
                self.t2i.insert(token.to_string(), i);
                self.i2t.push(token.to_string());
                self.freqs.push(0);
                i
            }
        }
    }

    pub fn id(&self, token: &str) -> Option<usize> {
        self.t2i.get(token).copied()
    }

    pub fn word(&self, id: usize) -> &str {
        &self.i2t[id]
    }

    // number of lines in which the word with this id was the left element
    pub fn freq(&self, id: usize) -> usize {
        self.freqs[id]
    }

    pub fn is_target(&self, id: usize) -> bool {
        self.freqs[id] > 0
    }

    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i2t.is_empty()
    }

    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

}
