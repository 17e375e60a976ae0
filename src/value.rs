use alloc::string::{String, ToString};

/// Conversion from the raw string recorded for a flag into the type a caller asked for.
///
/// Conversions never fail: a value that does not parse degrades to the type's zero value. The caller's
/// default is only used when the flag is absent, which `ArgumentTable::get_arg` decides before calling this.
pub trait ArgValue<'a>: Sized {
    fn from_arg(raw: &'a str) -> Self;
}

impl<'a> ArgValue<'a> for &'a str {
    fn from_arg(raw: &'a str) -> Self {
        raw
    }
}

impl<'a> ArgValue<'a> for String {
    fn from_arg(raw: &'a str) -> Self {
        raw.to_string()
    }
}

macro_rules! integers {
    ($($x:ty),+) => {
        $(
            impl<'a> ArgValue<'a> for $x {
                fn from_arg(raw: &'a str) -> Self {
                    raw.trim().parse::<$x>().unwrap_or(0)
                }
            }
        )+
    };
}

// non-finite values ("NaN", "inf") degrade to 0.0 like any other malformed value
macro_rules! floats {
    ($($x:ty),+) => {
        $(
            impl<'a> ArgValue<'a> for $x {
                fn from_arg(raw: &'a str) -> Self {
                    raw.trim().parse::<$x>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
                }
            }
        )+
    };
}

integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floats!(f32, f64);

/// Boolean reading of a single recorded value: present-without-value and anything but `"0"` is true.
pub(crate) fn truthy(raw: &str) -> bool {
    raw != "0"
}
