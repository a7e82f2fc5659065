use clap::Parser;
use scanner::top_transitions;
use spectra::ground_and_excited;
use spinchain::{ChainParams, Hamiltonian, SpinModel};

/// Ground→excited transition-observable scan for periodic spin chains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Spin-chain model: ising | heisenberg
    #[arg(long, default_value = "ising")]
    model: String,

    /// Smallest qubit count in the sweep
    #[arg(long, default_value_t = 3)]
    min_qubits: usize,

    /// Largest qubit count in the sweep (inclusive)
    #[arg(long, default_value_t = 7)]
    max_qubits: usize,

    /// Ising ZZ coupling J
    #[arg(long, default_value_t = 0.1)]
    coupling: f64,

    /// Ising transverse field h
    #[arg(long, default_value_t = 0.1)]
    field: f64,

    /// Heisenberg XX coupling
    #[arg(long, default_value_t = 0.1)]
    jx: f64,

    /// Heisenberg ZZ coupling
    #[arg(long, default_value_t = 0.1)]
    jz: f64,

    /// Ranked entries to print per qubit count, times the qubit count
    #[arg(long, default_value_t = 5)]
    top_per_qubit: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to build Rayon thread pool");
    }

    if args.min_qubits < 2 || args.max_qubits < args.min_qubits {
        eprintln!("qubit range must satisfy 2 <= min-qubits <= max-qubits");
        std::process::exit(1);
    }

    let model = match SpinModel::from_name(&args.model) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let params = ChainParams {
        j: args.coupling,
        h: args.field,
        jx: args.jx,
        jz: args.jz,
    };

    for l in args.min_qubits..=args.max_qubits {
        if let Err(err) = scan_one(model, l, params, args.top_per_qubit * l) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn scan_one(model: SpinModel, l: usize, params: ChainParams, limit: usize) -> anyhow::Result<()> {
    let ham = Hamiltonian::build(model, l, params)?;
    let (ground, excited) = ground_and_excited(&ham.to_matrix())?;
    let ranked = top_transitions(l, &ground, &excited, limit)?;

    println!("{} l={} ({} terms, top {})", model.name(), l, ham.n_terms(), limit);
    for entry in &ranked {
        println!("{} {:.6}", entry.string, entry.amplitude);
    }
    println!("----------------------------------------");
    Ok(())
}
