/*!
Valuations, as collections of literals taken to be true.

A valuation is given as a slice of literals, such as the [trail](crate::db::trail) of a context or the [model](crate::context::GenericContext::valuation) found by a solve.
As each literal is true on the valuation, no atom may appear with both polarities.

The methods here are independent of any context, and so may be used to check the result of a solve against the formula given to the solver.

```rust
# use otter_pup::structures::valuation::{is_total, verify};
let formula = vec![vec![1, 2], vec![-1, -2]];

assert!(verify(&[1, -2], &formula));
assert!(!verify(&[1, 2], &formula));

assert!(is_total(&[-2, 1], 2));
assert!(!is_total(&[1], 2));
```
*/

use std::collections::HashSet;

use crate::structures::literal::{CLiteral, Literal};

/// True if each clause contains some literal of the valuation.
pub fn verify<C: AsRef<[CLiteral]>>(valuation: &[CLiteral], clauses: &[C]) -> bool {
    let true_literals = valuation.iter().copied().collect::<HashSet<_>>();

    clauses.iter().all(|clause| {
        clause
            .as_ref()
            .iter()
            .any(|literal| true_literals.contains(literal))
    })
}

/// True if the valuation contains exactly one literal for each atom from 1 to `atom_count`, and nothing else.
pub fn is_total(valuation: &[CLiteral], atom_count: usize) -> bool {
    if valuation.len() != atom_count {
        return false;
    }

    let mut seen = vec![false; atom_count + 1];
    for literal in valuation {
        let atom = literal.atom() as usize;
        if atom == 0 || atom > atom_count || seen[atom] {
            return false;
        }
        seen[atom] = true;
    }
    true
}
