#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate siphasher;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        fmt,
        hash,
        iter,
        ops,
        str,
    };

    #[cfg(test)]
    pub use siphasher::sip::SipHasher as DefaultHasher;

    pub use alloc::string;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

// f64::log2 is only available in std, no_std must use libm
fn log2(x: f64) -> f64 {
    libm::log2(x)
}
