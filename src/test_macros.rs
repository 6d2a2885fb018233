// file to be included in tests modules

/// Build a `Vec<BigInt>` from integer literals
macro_rules! digits {
    ( $($d:expr),* $(,)* ) => {{
        let v: Vec<BigInt> = vec![ $( BigInt::from($d) ),* ];
        v
    }};
}

/// Build a `BigInt` from an integer or a decimal string
macro_rules! int {
    ( str $s:literal ) => {
        $s.parse::<BigInt>().unwrap()
    };
    ( $n:expr ) => {
        BigInt::from($n)
    };
}
