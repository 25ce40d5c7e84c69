

use std::error::Error;
use std::fmt::Display;

const USAGE: &str = "usage: second_order_pairs <pairFile> <samplesize> <freqThr> <outPath> [seed]";

#[derive(Clone, Debug)]
pub struct Params {
    pub pair_file: String,
    pub samplesize: f64,
    pub freq_thr: usize,
    pub out_path: String,
    pub seed: Option<u64>,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        pair_file: {}
        samplesize: {}
        freq_thr: {}
        out_path: {}
        seed: {:?}",
        self.pair_file, self.samplesize, self.freq_thr, self.out_path, self.seed
        )
    }
}

pub struct Config {
    params: Params
}

impl Config {

    pub fn get_params(&self) -> Params {
        return self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        // four positional arguments, plus an optional seed for reproducible runs
        if args.len() != 5 && args.len() != 6 {
            return Err(USAGE.into());
        }

        let pair_file = args[1].to_owned();
        let samplesize = args[2].parse::<f64>()
            .map_err(|_| format!("samplesize '{}' is not a float\n{}", args[2], USAGE))?;
        if !(samplesize > 0.0) {
            return Err(format!("samplesize must be positive, got {}", samplesize).into());
        }
        let freq_thr = args[3].parse::<usize>()
            .map_err(|_| format!("freqThr '{}' is not a non-negative integer\n{}", args[3], USAGE))?;
        let out_path = args[4].to_owned();
        let seed = match args.get(5) {
            Some(s) => Some(s.parse::<u64>()
                .map_err(|_| format!("seed '{}' is not an integer\n{}", s, USAGE))?),
            None => None
        };

        let params = Params {
            pair_file: pair_file,
            samplesize: samplesize,
            freq_thr: freq_thr,
            out_path: out_path,
            seed: seed,
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}


pub mod files_handling {

    use std::error::Error;
    use std::fs::File;
    use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};

    pub fn read_lines(file_path: &str) -> Result<Lines<BufReader<File>>, Box<dyn Error>> {

        match File::open(file_path) {
            Ok(f) => Ok(io::BufReader::new(f).lines()),
            Err(e) => Err(format!("cannot open {}: {}", file_path, e).into())
        }
    }

    // a pair line holds exactly two whitespace-delimited tokens, anything else
    // is a fatal format error carrying the 1-based line number.
    pub fn parse_pair(line: &str, line_number: usize) -> Result<(String, String), Box<dyn Error>> {

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(word), Some(context), None) => Ok((word.to_string(), context.to_string())),
            _ => Err(format!("line {}: expected exactly two tokens, got '{}'", line_number, line).into())
        }
    }

    pub fn write_pairs<'a, I>(out_path: &str, pairs: I) -> Result<(), Box<dyn Error>>
    where I: IntoIterator<Item = (&'a str, &'a str)> {

        let mut f = BufWriter::new(File::create(out_path)
            .map_err(|e| format!("cannot create {}: {}", out_path, e))?);
        for (target, context) in pairs {
            writeln!(f, "{} {}", target, context)?;
        }
        f.flush()?;
        Ok(())
    }

}
