/*!
Activity scores for each literal, as used by the [decision](crate::procedures::decision) procedure.

Scores begin as the number of occurrences of a literal across the original clauses of a formula.
After a conflict, the score of each literal in the conflicting clause is bumped, and then the score of *every* literal decays.
So, literals which appear in recent conflicts are preferred to those which appeared in conflicts long ago.

Scores are stored in a table with two slots for each atom, indexed by [Literal::index].

```rust
# use otter_pup::db::activity::ActivityDB;
# use otter_pup::db::trail::Trail;
let formula = vec![vec![1, -2], vec![-2, 3]];
let activity = ActivityDB::from_occurrences(formula.iter(), 3);

assert_eq!(activity.score(-2), 2.0);
assert_eq!(activity.score(2), 0.0);

let mut trail = Trail::default();
trail.ensure_atoms(3);
assert_eq!(activity.most_active_unvalued(&trail, 3), Some(-2));
```
*/

use crate::{
    config::Activity,
    db::trail::Trail,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The activity table.
#[derive(Default, Clone, Debug)]
pub struct ActivityDB {
    scores: Vec<Activity>,
}

impl ActivityDB {
    /// A table where the score of each literal is the count of clauses the literal occurs in.
    pub fn from_occurrences<C: AsRef<[CLiteral]>>(
        clauses: impl Iterator<Item = C>,
        atom_count: Atom,
    ) -> Self {
        let mut activity = ActivityDB::default();
        activity.ensure_atoms(atom_count);

        for clause in clauses {
            for literal in clause.as_ref() {
                activity.scores[literal.index()] += 1.0;
            }
        }

        activity
    }

    /// Ensures a score exists for both literals of each atom up to and including `atom`.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.scores.len() < required {
            self.scores.resize(required, 0.0);
        }
    }

    /// The score of a literal.
    pub fn score(&self, literal: CLiteral) -> Activity {
        self.scores.get(literal.index()).copied().unwrap_or(0.0)
    }

    /// Adds `bump` to the score of each literal given.
    pub fn bump<'l>(&mut self, literals: impl Iterator<Item = &'l CLiteral>, bump: Activity) {
        for literal in literals {
            self.scores[literal.index()] += bump;
        }
    }

    /// Multiplies the score of every literal by `factor`.
    pub fn decay(&mut self, factor: Activity) {
        for score in self.scores.iter_mut() {
            *score *= factor;
        }
    }

    /// The literal with the highest score, among literals of atoms without a value.
    ///
    /// Literals are examined by value, from -`atom_count` to `atom_count`, and a tie is settled in favour of the literal examined first.
    pub fn most_active_unvalued(&self, trail: &Trail, atom_count: Atom) -> Option<CLiteral> {
        let negative = (1..=atom_count).rev().map(|atom| CLiteral::new(atom, false));
        let positive = (1..=atom_count).map(|atom| CLiteral::new(atom, true));

        let mut best: Option<(CLiteral, Activity)> = None;

        for literal in negative.chain(positive) {
            if trail.value_of(literal.atom()).is_some() {
                continue;
            }

            let score = self.score(literal);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((literal, score)),
            }
        }

        best.map(|(literal, _)| literal)
    }
}
