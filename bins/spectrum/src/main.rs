use clap::Parser;
use spectra::eig_sorted;
use spinchain::{ChainParams, Hamiltonian, SpinModel};

use std::fs::File;
use std::io::{BufWriter, Write};

/// Ground energy and spectral gap sweep for periodic spin chains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Spin-chain model: ising | heisenberg
    #[arg(long, default_value = "ising")]
    model: String,

    /// Smallest qubit count in the sweep
    #[arg(long, default_value_t = 2)]
    min_qubits: usize,

    /// Largest qubit count in the sweep (inclusive)
    #[arg(long, default_value_t = 8)]
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

    /// Output CSV path (omit to skip the file)
    #[arg(long)]
    out: Option<String>,
}

fn main() {
    let args = Args::parse();

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

    let mut rows: Vec<(usize, f64, f64, f64)> = Vec::new();
    for l in args.min_qubits..=args.max_qubits {
        match sweep_one(model, l, params) {
            Ok(row) => {
                println!(
                    "{} l={} E0={:.6} E1={:.6} gap={:.6}",
                    model.name(),
                    row.0,
                    row.1,
                    row.2,
                    row.3
                );
                rows.push(row);
            }
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &args.out {
        if let Err(err) = write_csv(path, &rows) {
            eprintln!("Failed to write CSV to {}: {}", path, err);
            std::process::exit(1);
        }
    }
}

fn sweep_one(
    model: SpinModel,
    l: usize,
    params: ChainParams,
) -> anyhow::Result<(usize, f64, f64, f64)> {
    let ham = Hamiltonian::build(model, l, params)?;
    let spec = eig_sorted(&ham.to_matrix())?;
    Ok((l, spec.ground_energy(), spec.values[1], spec.gap()))
}

fn write_csv(path: &str, rows: &[(usize, f64, f64, f64)]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "l,e0,e1,gap")?;
    for (l, e0, e1, gap) in rows {
        writeln!(w, "{},{},{},{}", l, e0, e1, gap)?;
    }
    Ok(())
}
