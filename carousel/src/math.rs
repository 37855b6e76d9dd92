#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("carousel requires either the `std` or the `libm` feature for float math");

#[cfg(feature = "std")]
pub(crate) fn sqrt(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn sqrt(x: f32) -> f32 {
    libm::sqrtf(x)
}

#[cfg(feature = "std")]
pub(crate) fn abs(x: f32) -> f32 {
    x.abs()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn abs(x: f32) -> f32 {
    libm::fabsf(x)
}
