//! Trait surfaces that connect user values and test harnesses to assay.

pub mod testing_t;
pub mod to_value;

pub use assay_model::{CompareType, Datum, Kind, Value};
pub use testing_t::TestingT;
pub use to_value::ToValue;

/// Frequently used traits for test modules.
pub mod prelude {
    pub use super::testing_t::TestingT;
    pub use super::to_value::ToValue;
}

/// Lift tuple newtypes so they compare as their inner value while keeping
/// their own type name in diagnostics.
///
/// ```
/// use assay_contracts::{Kind, ToValue, impl_to_value};
///
/// struct Meters(f64);
/// impl_to_value!(Meters);
///
/// let value = Meters(1.5).to_value();
/// assert_eq!(value.kind(), Kind::F64);
/// assert!(value.type_name().ends_with("Meters"));
/// ```
#[macro_export]
macro_rules! impl_to_value {
    ($($newtype:ty),+ $(,)?) => {
        $(
            impl $crate::ToValue for $newtype {
                fn to_value(&self) -> $crate::Value {
                    $crate::ToValue::to_value(&self.0)
                        .with_type_name(::std::any::type_name::<$newtype>())
                }
            }
        )+
    };
}
