//! Exhaustive enumeration of per-qubit group element combinations.

use crate::group::{ElementId, GroupTable};

/// Lazy iterator over the Cartesian product of a group's element set
/// repeated once per qubit.
///
/// Enumeration order is lexicographic over the table's element order, with
/// the highest qubit index cycling fastest. The order only affects the
/// reproducibility of floating-point summation downstream, not the mean
/// itself. The sequence has exactly |G|^n items, with no truncation and no
/// sampling; callers control n.
#[derive(Debug, Clone)]
pub struct Combinations {
    ids: Vec<ElementId>,
    odometer: Option<Vec<usize>>,
}

impl Combinations {
    /// Enumerate all `table.len()^num_qubits` combinations.
    pub fn new(table: &GroupTable, num_qubits: usize) -> Self {
        Self {
            ids: table.element_ids().collect(),
            odometer: Some(vec![0; num_qubits]),
        }
    }

    /// Total number of combinations, |G|^n.
    ///
    /// u128 because 24^n outgrows u64 past n = 13. For n = 0 this is 1 (the
    /// empty product); the engine rejects n = 0 before enumerating.
    pub fn total(&self) -> u128 {
        let positions = self
            .odometer
            .as_ref()
            .map_or(0, |odometer| odometer.len());
        (self.ids.len() as u128).pow(positions as u32)
    }
}

impl Iterator for Combinations {
    type Item = Vec<ElementId>;

    fn next(&mut self) -> Option<Self::Item> {
        let odometer = self.odometer.as_mut()?;
        let combination = odometer.iter().map(|&i| self.ids[i]).collect();

        // Increment from the rightmost position; exhaust on full rollover.
        let mut rolled_over = true;
        for position in odometer.iter_mut().rev() {
            *position += 1;
            if *position < self.ids.len() {
                rolled_over = false;
                break;
            }
            *position = 0;
        }
        if rolled_over {
            self.odometer = None;
        }

        Some(combination)
    }
}
