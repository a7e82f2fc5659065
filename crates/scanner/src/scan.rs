use crate::error::{ScanError, ScanResult};
use faer::Mat;
use pauli::{C64, PauliString};
use rayon::prelude::*;

/// One ranked observable: the Pauli string and |⟨ground|M|excited⟩|.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub string: PauliString,
    pub amplitude: f64,
}

fn amplitude(ground: &[C64], excited: &[C64], op: &Mat<C64>) -> C64 {
    let dim = op.nrows();
    let mut acc = C64::new(0.0, 0.0);
    for i in 0..dim {
        let gi = ground[i].conj();
        for j in 0..dim {
            acc += gi * op.read(i, j) * excited[j];
        }
    }
    acc
}

/// Transition amplitude ⟨g|M|e⟩, conjugating the ground-state vector.
pub fn transition_amplitude(
    ground: &[C64],
    excited: &[C64],
    op: &Mat<C64>,
) -> ScanResult<C64> {
    let dim = op.nrows();
    if ground.len() != dim {
        return Err(ScanError::DimensionMismatch {
            expected: dim,
            got: ground.len(),
        });
    }
    if excited.len() != dim {
        return Err(ScanError::DimensionMismatch {
            expected: dim,
            got: excited.len(),
        });
    }
    Ok(amplitude(ground, excited, op))
}

/// Rank every length-n Pauli string by transition amplitude magnitude,
/// descending. Strings are enumerated by index so the 4^n candidates are
/// never materialized as a list; ties keep enumeration order.
pub fn scan(n: usize, ground: &[C64], excited: &[C64]) -> ScanResult<Vec<ScanEntry>> {
    let dim = 1usize << n;
    if ground.len() != dim {
        return Err(ScanError::DimensionMismatch {
            expected: dim,
            got: ground.len(),
        });
    }
    if excited.len() != dim {
        return Err(ScanError::DimensionMismatch {
            expected: dim,
            got: excited.len(),
        });
    }

    let mut entries: Vec<ScanEntry> = (0..1usize << (2 * n))
        .into_par_iter()
        .map(|k| {
            let string = PauliString::from_index(n, k);
            let amp = amplitude(ground, excited, &string.to_matrix());
            ScanEntry {
                string,
                amplitude: amp.norm(),
            }
        })
        .collect();

    // collect() keeps index order, so a stable descending sort leaves tied
    // amplitudes in enumeration order regardless of thread count.
    entries.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
    Ok(entries)
}

/// The `limit` strongest transition observables.
pub fn top_transitions(
    n: usize,
    ground: &[C64],
    excited: &[C64],
    limit: usize,
) -> ScanResult<Vec<ScanEntry>> {
    let mut entries = scan(n, ground, excited)?;
    entries.truncate(limit);
    Ok(entries)
}
