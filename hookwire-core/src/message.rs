//! The bound every hookable value type satisfies.

/// Types that can be handed to mutators and event hooks.
///
/// A value may be moved into a spawned task or read from several threads
/// while a pipeline runs, and collections keyed by it live as long as the
/// process. Anything that is `Send + Sync + 'static` qualifies; the trait
/// only has to be opted into.
///
/// Plain data types usually get it through `#[derive(Message)]` from the
/// facade crate. A manual impl is a single empty block:
///
/// ```rust
/// use hookwire_core::Message;
///
/// #[derive(Clone)]
/// struct Invoice {
///     total: u64,
/// }
///
/// impl Message for Invoice {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot travel through a hook pipeline",
    label = "this type does not implement `Message`",
    note = "implement or derive `Message`; the type must be `Send + Sync + 'static`"
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
impl<T: Message, E: Message> Message for Result<T, E> {}

macro_rules! impl_message {
    ($($ty:ty),* $(,)?) => {
        $(impl Message for $ty {})*
    };
}

impl_message!(bool, char, f32, f64);
impl_message!(u8, u16, u32, u64, u128, usize);
impl_message!(i8, i16, i32, i64, i128, isize);
