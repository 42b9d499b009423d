/// Absolute value of a scalar component.
///
/// Unsigned integers are their own absolute value, so this is implemented
/// for every primitive scalar type, unlike [num_traits::Signed].
pub trait Abs {
    fn abs(self) -> Self;
}

macro_rules! abs_signed {
    ( $($t:ty,)* ) => { $(
        impl Abs for $t {
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

macro_rules! abs_unsigned {
    ( $($t:ty,)* ) => { $(
        impl Abs for $t {
            fn abs(self) -> Self {
                self
            }
        }
    )*};
}

abs_signed! {
    f32, f64,
    i8, i16, i32, i64, i128, isize,
}

abs_unsigned! {
    u8, u16, u32, u64, u128, usize,
}
