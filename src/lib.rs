
mod config;
mod vocab;
mod cooccurrence;
mod second_order;
mod sampling;
mod pipeline;

pub use config::{files_handling, Config, Params};
pub use cooccurrence::{CoocCounts, CsrMatrix};
pub use pipeline::Pipeline;
pub use sampling::Sampler;
pub use second_order::SecondOrder;
pub use vocab::Vocabulary;
