
use core::panic;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use ndarray_rand::rand_distr::LogNormal;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};


// this executable simulates artificial pair files with planted first-order,
// second-order and no-overlap structure, in the same 'word1 word2' line
// format the expander consumes. Treated as a standalone binary so corpora
// for exercising the expansion can be produced independently from main.
//
// arguments: tsize csize csamplesize outPath [seed]
// - tsize: target set size per family
// - csize: context set size
// - csamplesize: context sample size
// - outPath: output path for the pair file and its companion files
// - seed: optional, for reproducible corpora

// three target families, distinguished by which level of the context
// hierarchy is shared across targets:
// - 1st: targets draw from one shared context set (first-order overlap)
// - 2nd: per-target context sets, whose contexts share their own context
//   set (overlap only one step removed)
// - None: everything disjoint, no overlap at either order
struct Family {
    tag: &'static str,
    shared_tcontexts: bool,
    shared_ccontexts: bool,
}

const FAMILIES: [Family; 3] = [
    Family { tag: "1st", shared_tcontexts: true, shared_ccontexts: false },
    Family { tag: "2nd", shared_tcontexts: false, shared_ccontexts: true },
    Family { tag: "None", shared_tcontexts: false, shared_ccontexts: false },
];


fn main() {

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 && args.len() != 6 {
        panic!("usage: simulate <tsize> <csize> <csamplesize> <outPath> [seed]");
    }
    let tsize: usize = args[1].parse().expect("tsize is not an integer");
    let csize: usize = args[2].parse().expect("csize is not an integer");
    let csamplesize: usize = args[3].parse().expect("csamplesize is not an integer");
    let out_path = &args[4];
    let seed: u64 = match args.get(5) {
        Some(s) => s.parse().expect("seed is not an integer"),
        None => thread_rng().gen()
    };

    let timer = Instant::now();
    println!("simulating pairs with seed {}...", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // one log-normal weight vector shared by both context levels, reshuffled
    // per family so the families get distinct skews over the same shape
    let lognormal = LogNormal::new(0.0, 1.0).expect("bad log-normal parameters");
    let mut probs: Vec<f64> = (0..csize).map(|_| lognormal.sample(&mut rng)).collect();

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut family_targets: Vec<(&str, Vec<String>)> = Vec::new();
    let mut family_tcontexts: Vec<(&str, Vec<String>)> = Vec::new();

    for family in &FAMILIES {

        probs.shuffle(&mut rng);
        let dist = WeightedIndex::new(&probs).expect("cannot build sampling distribution");

        let targets: Vec<String> = (0..tsize)
            .map(|i| format!("(target){}{}", family.tag, i))
            .collect();
        let mut tcontexts_flat: Vec<String> = Vec::new();

        for target in &targets {

            let tcontexts: Vec<String> = (0..csize).map(|j| {
                if family.shared_tcontexts {
                    format!("(tcontext){}{}", family.tag, j)
                } else {
                    format!("{}(tcontext){}{}", target, family.tag, j)
                }
            }).collect();

            for _ in 0..csamplesize {

                let j = dist.sample(&mut rng);
                let tcontext = &tcontexts[j];
                pairs.push((target.clone(), tcontext.clone()));

                for _ in 0..csamplesize {
                    let j2 = dist.sample(&mut rng);
                    let ccontext = if family.shared_ccontexts {
                        format!("(ccontext){}{}", family.tag, j2)
                    } else {
                        format!("{}(ccontext){}{}", tcontext, family.tag, j2)
                    };
                    pairs.push((tcontext.clone(), ccontext));
                }
            }

            tcontexts_flat.extend(tcontexts);
        }

        family_targets.push((family.tag, targets));
        family_tcontexts.push((family.tag, tcontexts_flat));
    }

    println!("exporting {} pairs (plus switched twins)...", pairs.len());
    if let Err(e) = export_pairs(out_path, &pairs) {
        panic!("{}", e)
    }

    println!("exporting targets...");
    for (tag, targets) in &family_targets {
        let path = format!("{}-targets-{}", out_path, tag);
        if let Err(e) = export_combinations(&path, targets) {
            panic!("{}", e)
        }
    }

    println!("exporting tcontexts...");
    for (tag, tcontexts) in &family_tcontexts {
        let path = format!("{}-tcontexts-{}", out_path, tag);
        if let Err(e) = export_sampled_combos(&path, tcontexts, &mut rng) {
            panic!("{}", e)
        }
    }

    println!("finished, took {} seconds ...", timer.elapsed().as_secs());

}


// every pair is written followed by its switched twin, so both directions
// appear in the corpus
fn export_pairs(out_path: &str, pairs: &[(String, String)]) -> Result<(), Box<dyn Error>> {

    let mut f = BufWriter::new(File::create(out_path)?);
    for (target, context) in pairs {
        writeln!(f, "{} {}", target, context)?;
        writeln!(f, "{} {}", context, target)?;
    }
    f.flush()?;
    Ok(())
}

// all unordered token pairs, tab separated
fn export_combinations(out_path: &str, tokens: &[String]) -> Result<(), Box<dyn Error>> {

    let mut f = BufWriter::new(File::create(out_path)?);
    for i in 0..tokens.len() {
        for j in i + 1..tokens.len() {
            writeln!(f, "{}\t{}", tokens[i], tokens[j])?;
        }
    }
    f.flush()?;
    Ok(())
}

// 1000 tokens drawn without replacement, paired first half against second
fn export_sampled_combos<R: Rng>(out_path: &str, tokens: &[String], rng: &mut R) -> Result<(), Box<dyn Error>> {

    if tokens.len() < 1000 {
        return Err(format!("need at least 1000 tcontexts to sample combos, found {}", tokens.len()).into());
    }

    let sample: Vec<&String> = tokens.choose_multiple(rng, 1000).collect();
    let mut f = BufWriter::new(File::create(out_path)?);
    for (t1, t2) in sample[..500].iter().zip(&sample[500..]) {
        writeln!(f, "{}\t{}", t1, t2)?;
    }
    f.flush()?;
    Ok(())
}
