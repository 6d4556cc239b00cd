//! Arity-independent calling convention for guarded operations.

use std::borrow::Cow;

/// An operation callable with a tuple of arguments.
///
/// Implemented for every `Fn` taking up to twelve arguments, so a guarded
/// operation accepts exactly the arguments of the operation it wraps:
///
/// ```
/// use actix_authorizer_core::authorization::Operation;
///
/// let greet = |greeting: &str, name: &str| format!("{greeting} {name}!");
/// assert_eq!(greet.invoke(("Hello", "John")), "Hello John!");
/// ```
pub trait Operation<Args> {
    /// The value returned by the operation.
    type Output;

    /// Calls the operation with the given arguments.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! operation_tuple ({ $($param:ident)* } => {
    impl<Func, Out, $($param,)*> Operation<($($param,)*)> for Func
    where
        Func: Fn($($param),*) -> Out,
    {
        type Output = Out;

        #[inline]
        #[allow(non_snake_case)]
        fn invoke(&self, ($($param,)*): ($($param,)*)) -> Out {
            (self)($($param,)*)
        }
    }
});

operation_tuple! {}
operation_tuple! { A }
operation_tuple! { A B }
operation_tuple! { A B C }
operation_tuple! { A B C D }
operation_tuple! { A B C D E }
operation_tuple! { A B C D E F }
operation_tuple! { A B C D E F G }
operation_tuple! { A B C D E F G H }
operation_tuple! { A B C D E F G H I }
operation_tuple! { A B C D E F G H I J }
operation_tuple! { A B C D E F G H I J K }
operation_tuple! { A B C D E F G H I J K L }

/// Identifying metadata of a wrapped operation.
///
/// Carried by every guarded operation so that routing layers, logs and
/// diagnostics can still tell which operation sits behind the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationMeta {
    name: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
}

impl OperationMeta {
    /// Creates metadata with a name and no documentation.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        OperationMeta {
            name: name.into(),
            doc: None,
        }
    }

    /// Derives the name from the operation's type.
    ///
    /// For function items this is the function's path, e.g.
    /// `my_crate::projects::delete_project`.
    pub fn of<F>() -> Self {
        Self::new(std::any::type_name::<F>())
    }

    /// Sets the documentation (builder pattern).
    pub fn doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns the operation name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the operation documentation, if any.
    pub fn get_doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: Cow<'static, str>) {
        self.name = name;
    }
}
