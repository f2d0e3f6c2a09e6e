//! Floating point conversion that enable the support switching
//! between f64 and f32 as the primary float type.

use cgmath::{Matrix4, Point3, Vector3, Vector4};

#[cfg(not(feature = "single_precision"))]
pub use self::double::*;
#[cfg(feature = "single_precision")]
pub use self::single::*;

pub trait ToFloat {
    fn to_float(self) -> Float;
}

#[cfg(not(feature = "single_precision"))]
mod double {
    pub type Float = f64;
    use super::*;

    impl ToFloat for f32 {
        fn to_float(self) -> Float {
            self.into()
        }
    }

    impl ToFloat for f64 {
        fn to_float(self) -> Float {
            self
        }
    }
}

#[cfg(feature = "single_precision")]
mod single {
    pub type Float = f32;
    use super::*;

    impl ToFloat for f32 {
        fn to_float(self) -> Float {
            self
        }
    }

    impl ToFloat for f64 {
        fn to_float(self) -> Float {
            self as Float
        }
    }
}

impl ToFloat for u32 {
    #[allow(clippy::cast_lossless)]
    fn to_float(self) -> Float {
        self as Float
    }
}

/// Conversion into plain `f32` arrays accepted by glium uniforms
pub trait IntoArray {
    type Array;
    fn into_array(&self) -> Self::Array;
}

impl IntoArray for Matrix4<Float> {
    type Array = [[f32; 4]; 4];

    fn into_array(&self) -> Self::Array {
        [
            self.x.into_array(),
            self.y.into_array(),
            self.z.into_array(),
            self.w.into_array(),
        ]
    }
}

impl IntoArray for Vector4<Float> {
    type Array = [f32; 4];

    fn into_array(&self) -> Self::Array {
        [self.x as f32, self.y as f32, self.z as f32, self.w as f32]
    }
}

impl IntoArray for Vector3<Float> {
    type Array = [f32; 3];

    fn into_array(&self) -> Self::Array {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl IntoArray for Point3<Float> {
    type Array = [f32; 3];

    fn into_array(&self) -> Self::Array {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}
