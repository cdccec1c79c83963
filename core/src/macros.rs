/// Implements `Debug` by printing only the type name.
///
/// For components that own boxed callbacks, which have nothing useful to show.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl ::core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::core::any::type_name::<Self>())
            }
        }
    };
}
