pub mod bits;
pub mod codec;
pub mod gf2m;
pub mod modulus;
