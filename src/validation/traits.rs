use crate::types::alloc_type::Vec;
use crate::types::ErrorList;
use crate::validation::core::Validation;

/// Gathers values and errors, keeping every error in encounter order.
struct Gather<E, A> {
    values: Vec<A>,
    errors: Option<ErrorList<E>>,
}

impl<E, A> Gather<E, A> {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            errors: None,
        }
    }

    fn push(&mut self, item: Validation<E, A>) {
        match item {
            Validation::Valid(value) if self.errors.is_none() => self.values.push(value),
            Validation::Valid(_) => {}
            Validation::Invalid(errs) => match self.errors.as_mut() {
                Some(errors) => errors.append(errs),
                None => {
                    self.values.clear();
                    self.errors = Some(errs);
                }
            },
        }
    }

    fn finish<C: FromIterator<A>>(self) -> Validation<E, C> {
        match self.errors {
            Some(errors) => Validation::Invalid(errors),
            None => Validation::Valid(self.values.into_iter().collect()),
        }
    }
}

/// Collects an iterator of validations, accumulating every error.
///
/// The result is valid only when every item is valid; otherwise it carries
/// the errors of all invalid items in iteration order.
///
/// # Examples
///
/// ```
/// use validation_rail::validation::Validation;
///
/// let items = vec![
///     Validation::valid(10),
///     Validation::invalid("bad"),
///     Validation::invalid("worse"),
/// ];
///
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap(), ["bad", "worse"]);
/// ```
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut gather = Gather::new();
        for item in iter {
            gather.push(item);
        }
        gather.finish()
    }
}

/// Collects an iterator of results, accumulating every `Err`.
///
/// # Examples
///
/// ```
/// use validation_rail::validation::Validation;
///
/// let inputs = vec![Ok(1), Err("err1"), Err("err2")];
/// let collected: Validation<&str, Vec<i32>> = inputs.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<E, A, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut gather = Gather::new();
        for item in iter {
            gather.push(Validation::from_result(item));
        }
        gather.finish()
    }
}
