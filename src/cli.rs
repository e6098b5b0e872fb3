use clap::{Parser, ValueEnum};

use crate::model::Algo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgoArg {
    /// Artificial neural network (model 1)
    Ann,
    /// Genetic-programming classifier (model 2)
    Gp,
    /// C4.5 decision tree (model 3)
    C45,
}

impl From<AlgoArg> for Algo {
    fn from(value: AlgoArg) -> Self {
        match value {
            AlgoArg::Ann => Algo::Ann,
            AlgoArg::Gp => Algo::Gp,
            AlgoArg::C45 => Algo::C45,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "modelsig")]
#[command(version)]
#[command(about = "Pairwise t-test significance analysis over classifier evaluation metrics", long_about = None)]
pub struct Cli {
    /// Restrict the comparison to these models (repeatable); default is all three
    #[arg(short = 'a', long = "algo", value_enum, value_name = "ALGO")]
    pub algos: Vec<AlgoArg>,

    /// Enable trace-level logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn selection(&self) -> Vec<Algo> {
        self.algos.iter().copied().map(Algo::from).collect()
    }
}
