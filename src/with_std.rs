
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        fmt,
        hash,
        iter,
        ops,
        str,
        string,
        vec,
    };

    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}

// f64::log2 is only available in std
fn log2(x: f64) -> f64 {
    x.log2()
}
