// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or variable
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! crlf {
    // iCalendar lines shorthand: each argument becomes one CRLF-terminated line.
    ($($line:expr),+ $(,)?) => {{
        let mut s = ::std::string::String::new();
        $(
            s.push_str(&$line);
            s.push_str("\r\n");
        )+
        s
    }};
}
