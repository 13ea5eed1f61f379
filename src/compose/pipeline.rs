//! Runtime function pipelines.
//!
//! [`pipe`] chains functions left to right and [`compose`] right to left.
//! The function that runs first receives the whole argument list; every
//! later stage receives exactly one argument, the previous result.
//!
//! ```text
//! pipe([f, g, h]).run(args)    = h(g(f(args)))
//! compose([f, g, h]).run(args) = f(g(h(args)))
//! ```
//!
//! A pipeline owns an immutable copy of its stages, so it can be run any
//! number of times with the same outcome. An empty pipeline runs the
//! implicit no-op and yields `None`.

use std::fmt;
use std::rc::Rc;

use super::function::Function;

/// A sequence of functions applied one after another.
///
/// Stages are stored in execution order: [`compose`] reverses its input
/// once at construction.
pub struct Pipeline<A> {
    stages: Rc<[Function<A, A>]>,
}

/// Builds a pipeline that runs `functions` left to right.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{Function, pipe};
///
/// let triple = Function::new(|values: Vec<i32>| values[0] * 3);
/// let increment = Function::new(|values: Vec<i32>| values[0] + 1);
///
/// let pipeline = pipe([triple, increment]);
/// assert_eq!(pipeline.run([3]), Some(10));
/// assert_eq!(pipeline.run([3]), Some(10));
/// ```
pub fn pipe<A, I>(functions: I) -> Pipeline<A>
where
    I: IntoIterator<Item = Function<A, A>>,
{
    Pipeline {
        stages: functions.into_iter().collect(),
    }
}

/// Builds a pipeline that runs `functions` right to left.
///
/// The last function receives the original arguments.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{Function, compose};
///
/// let quarter = Function::new(|values: Vec<f64>| values[0] / 4.0);
/// let cube = Function::new(|values: Vec<f64>| values[0].powi(3));
///
/// let composed = compose([quarter, cube]);
/// assert_eq!(composed.run([2.0]), Some(2.0));
/// ```
pub fn compose<A, I>(functions: I) -> Pipeline<A>
where
    I: IntoIterator<Item = Function<A, A>>,
{
    let mut stages: Vec<_> = functions.into_iter().collect();
    stages.reverse();
    Pipeline {
        stages: stages.into(),
    }
}

impl<A> Pipeline<A> {
    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the pipeline.
    ///
    /// The first stage is called with every argument; each later stage with
    /// the previous result. Returns `None` when there are no stages.
    ///
    /// # Panics
    ///
    /// Stages are called directly, not curried: a stage whose
    /// [`Function::arity`] exceeds what it is handed panics, as described on
    /// [`Function::call`]. Bind all but one argument of such a stage first
    /// and convert it with [`Curried::into_function`](super::Curried::into_function).
    pub fn run<I>(&self, arguments: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        let Some((first, rest)) = self.stages.split_first() else {
            tracing::trace!(target: "pointfree::pipeline", "empty pipeline");
            return None;
        };

        tracing::trace!(target: "pointfree::pipeline", stages = self.stages.len(), "running pipeline");
        let initial = first.call(arguments);
        Some(rest.iter().fold(initial, |accumulator, stage| stage.call_one(accumulator)))
    }

    /// Returns a new pipeline with `stage` running after every existing stage.
    #[must_use]
    pub fn then(&self, stage: Function<A, A>) -> Self {
        self.stages
            .iter()
            .cloned()
            .chain(std::iter::once(stage))
            .collect::<Vec<_>>()
            .into()
    }

    /// Wraps the pipeline as a [`Function`] returning the pipeline's result,
    /// so it can be curried or handed to code expecting a [`Function`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::{Function, pipe};
    ///
    /// let double = Function::new(|values: Vec<i32>| values[0] * 2);
    /// let doubled_twice = pipe([double.clone(), double]).into_function();
    /// assert_eq!(doubled_twice.call([5]), Some(20));
    /// ```
    pub fn into_function(self) -> Function<A, Option<A>>
    where
        A: 'static,
    {
        Function::new(move |arguments: Vec<A>| self.run(arguments))
    }
}

impl<A> From<Vec<Function<A, A>>> for Pipeline<A> {
    fn from(stages: Vec<Function<A, A>>) -> Self {
        Self {
            stages: stages.into(),
        }
    }
}

impl<A> Default for Pipeline<A> {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl<A> Clone for Pipeline<A> {
    fn clone(&self) -> Self {
        Self {
            stages: Rc::clone(&self.stages),
        }
    }
}

impl<A> fmt::Debug for Pipeline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
