//! Output helpers shared by the driver binaries.

/// Call `println!` and immediately flush.
#[macro_export]
macro_rules! println_flush {
    ( $( $arg:tt )* ) => {{
        println!($( $arg )*);
        std::io::Write::flush(&mut std::io::stdout()).unwrap();
    }}
}

/// Call `eprintln!` and immediately flush.
#[macro_export]
macro_rules! eprintln_flush {
    ( $( $arg:tt )* ) => {{
        eprintln!($( $arg )*);
        std::io::Write::flush(&mut std::io::stderr()).unwrap();
    }}
}

/// Shortest round-trip representation of `x`.
///
/// Magnitudes in $`[10^{-4}, 10^{16})`$ (and zero) are written in positional
/// notation with at least one fractional digit; all others in scientific
/// notation with a signed, two-digit-minimum exponent, e.g. `1e-05` or
/// `-8.33e+20`.
pub fn repr_f64(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let s: String = format!("{:?}", x);
    return match s.split_once('e') {
        None => s,
        Some((mant, exp)) => {
            let (sign, digits): (char, &str)
                = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
            format!("{}e{}{:0>2}", mant, sign, digits)
        },
    };
}

/// Format a slice of values as `[a, b, ...]` using [`repr_f64`].
pub fn repr_vec<'a, I>(values: I) -> String
where I: IntoIterator<Item = &'a f64>
{
    let items: Vec<String> = values.into_iter().map(|v| repr_f64(*v)).collect();
    return format!("[{}]", items.join(", "));
}
