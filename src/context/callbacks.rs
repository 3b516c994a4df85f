/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

Both callbacks are called once before each decision:
- The terminate callback, to check whether the solve should end early.
- The progress callback, with the length of the trail and the count of atoms in the context.
*/

use super::GenericContext;

/// A callback to terminate a solve, if true.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// A callback to observe the progress of a solve, from the length of the trail and the count of atoms.
pub type CallbackProgress = dyn FnMut(usize, usize);

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.callback_progress = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub fn make_callback_progress(&mut self) {
        let trail_length = self.trail.len();
        let atom_count = self.atom_count as usize;
        if let Some(callback) = &mut self.callback_progress {
            callback(trail_length, atom_count)
        }
    }
}
