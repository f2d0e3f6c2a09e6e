use crate::float::*;

#[cfg(not(feature = "single_precision"))]
pub use self::double::*;
#[cfg(feature = "single_precision")]
pub use self::single::*;

#[cfg(not(feature = "single_precision"))]
mod double {
    use super::*;

    pub const EPSILON: Float = 1e-6;
    pub const PI: Float = std::f64::consts::PI;
}

#[cfg(feature = "single_precision")]
mod single {
    use super::*;

    pub const EPSILON: Float = 1e-6;
    pub const PI: Float = std::f32::consts::PI;
}
