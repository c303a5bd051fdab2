use std::cell::RefCell;
use std::rc::Rc;

use crate::api::capture::*;

/// The storage cell of a registered option.
///
/// Returned from registration, initialized to the option's default.
/// Parsing writes into the cell; the handle may be read at any time (before, during, or after a parse).
/// Clones share the same cell.
///
/// ### Example
/// ```
/// # use golf_core as golf;
/// use golf::OptionRegistry;
///
/// let mut registry = OptionRegistry::new();
/// let limit = registry.integer(Some('l'), Some("limit"), 10, "limit results");
/// assert_eq!(limit.get(), 10);
///
/// registry.parse_tokens(&["--limit", "4"]).unwrap();
/// assert_eq!(limit.get(), 4);
/// ```
pub struct Value<T> {
    variable: Rc<RefCell<T>>,
}

impl<T> Value<T> {
    pub(crate) fn new(initial: T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(initial)),
        }
    }

    /// Get a copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.variable.borrow().clone()
    }

    /// Overwrite the current value.
    pub fn set(&self, value: T) {
        *self.variable.borrow_mut() = value;
    }
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            variable: Rc::clone(&self.variable),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Value").field(&*self.variable.borrow()).finish()
    }
}

/// An option field that takes a single value from the Cli.
pub(crate) struct Scalar<T> {
    variable: Value<T>,
}

impl<T> Scalar<T> {
    pub(crate) fn new(variable: Value<T>) -> Self {
        Self { variable }
    }
}

impl<T> GenericCapturable<T> for Scalar<T>
where
    T: OptionValue,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = T::decode(token)?;
        self.variable.set(value);
        Ok(())
    }
}

/// An option field that takes no values; its presence assigns the target.
pub(crate) struct Switch<T> {
    variable: Value<T>,
    target: T,
}

impl<T> Switch<T> {
    pub(crate) fn new(variable: Value<T>, target: T) -> Self {
        Self { variable, target }
    }
}

impl<T> GenericCapturable<T> for Switch<T>
where
    T: Clone,
{
    fn matched(&mut self) {
        self.variable.set(self.target.clone());
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidCapture> {
        unreachable!("internal error - must not capture on a Switch");
    }
}

/// Bind a storage cell to the field which captures its kind: a [`Switch`] for flag-like kinds, otherwise a [`Scalar`].
pub(crate) fn bind<T: OptionValue>(variable: Value<T>) -> Box<dyn AnonymousCapturable> {
    match T::presence() {
        Some(target) => Box::new(AnonymousCapture::bind(Switch::new(variable, target))),
        None => Box::new(AnonymousCapture::bind(Scalar::new(variable))),
    }
}
