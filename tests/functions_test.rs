mod common;

use common::FakeSystem;
use kiln::functions::{
    camel, format_filesize, format_size, replace, repeat, title, to_binary, to_lower, to_title,
    to_upper, trim_prefix, trim_suffix, FunctionLibrary, Numeric,
};
use minijinja::Value;

#[test]
fn test_format_size_units() {
    assert_eq!(format_size(Numeric::from(1024i64)), "1 KB");
    assert_eq!(format_size(Numeric::from(1536i64)), "1.5 KB");
    assert_eq!(format_size(Numeric::from(512i64)), "512 bytes");
    assert_eq!(format_size(Numeric::from(1073741824i64)), "1 GB");
    assert_eq!(format_size(Numeric::from(0i64)), "0 bytes");
    assert_eq!(format_size(Numeric::from(10 * 1024i64)), "10 KB");
    assert_eq!(format_size(Numeric::from(3 * (1u64 << 40))), "3 TB");
    assert_eq!(format_size(Numeric::from(1u64 << 60)), "1024 PB");
}

#[test]
fn test_format_size_floats() {
    assert_eq!(format_size(Numeric::from(2560.0)), "2.5 KB");
    assert_eq!(format_size(Numeric::from(1.5)), "1.5 bytes");
    // Rounds up to 1024.0 but stays in bytes, since the unit is picked before rounding.
    assert_eq!(format_size(Numeric::from(1023.96)), "1024 bytes");
    assert_eq!(format_size(Numeric::from(f64::INFINITY)), "+Inf PB");
    assert_eq!(format_size(Numeric::from(f64::NEG_INFINITY)), "-Inf bytes");
}

#[test]
fn test_format_filesize_values() {
    assert_eq!(format_filesize(&Value::from(1024)), "1 KB");
    assert_eq!(format_filesize(&Value::from(1536.0)), "1.5 KB");
    assert_eq!(format_filesize(&Value::from(u64::MAX)), "16384 PB");
}

#[test]
fn test_format_filesize_non_numeric() {
    assert_eq!(format_filesize(&Value::from("not a number")), "");
    assert_eq!(format_filesize(&Value::from("1024")), "");
    assert_eq!(format_filesize(&Value::from(true)), "");
    assert_eq!(format_filesize(&Value::from(())), "");
}

#[test]
fn test_to_binary() {
    assert_eq!(to_binary("10"), "1010");
    assert_eq!(to_binary("0"), "0");
    assert_eq!(to_binary("+3"), "11");
    assert_eq!(to_binary("-5"), "-101");
    assert_eq!(to_binary("abc"), "abc");
    assert_eq!(to_binary(" 3"), " 3");
    assert_eq!(to_binary("1.5"), "1.5");
}

#[test]
fn test_camel() {
    assert_eq!(camel("hello_world", "_"), "helloWorld");
    assert_eq!(camel("my-cool-app", "-"), "myCoolApp");
    assert_eq!(camel("hello__world", "_"), "helloWorld");
    assert_eq!(camel("user_ID", "_"), "userId");
    assert_eq!(camel("abc", ""), "aBC");
    assert_eq!(camel("single", "_"), "single");
    assert_eq!(camel("", "_"), "");
}

#[test]
fn test_replace() {
    assert_eq!(replace("aaa", "a", "b", 2), "bba");
    assert_eq!(replace("aaa", "a", "b", -1), "bbb");
    assert_eq!(replace("aaa", "a", "b", 0), "aaa");
    assert_eq!(replace("aaaa", "aa", "b", -1), "bb");
    assert_eq!(replace("abc", "", "-", -1), "-a-b-c-");
    assert_eq!(replace("abc", "", "-", 2), "-a-bc");
}

#[test]
fn test_repeat() {
    assert_eq!(repeat("ab", 3).unwrap(), "ababab");
    assert_eq!(repeat("ab", 0).unwrap(), "");
    assert!(repeat("ab", -1).is_err());
    assert!(repeat("abc", i64::MAX).is_err());
}

#[test]
fn test_title() {
    assert_eq!(title("hello world"), "Hello World");
    assert_eq!(title("hELLO wORLD"), "Hello World");
    assert_eq!(title("hello-world"), "Hello-World");
    assert_eq!(title("o'neil"), "O'neil");
    assert_eq!(title("3d printer"), "3d Printer");
    assert_eq!(title("élan vital"), "Élan Vital");
}

#[test]
fn test_to_title() {
    assert_eq!(to_title("hello world"), "HELLO WORLD");
    assert_eq!(to_title("\u{01C6}em"), "\u{01C5}EM");
    assert_eq!(to_title("ß"), "ß");
}

#[test]
fn test_case_mapping_is_per_character() {
    assert_eq!(to_upper("straße ﬁ"), "STRAßE ﬁ");
    assert_eq!(to_upper("hello"), "HELLO");
    assert_eq!(to_upper("\u{1FB3}"), "\u{1FBC}");
    // No final-sigma rule: every capital sigma lowers to σ.
    assert_eq!(to_lower("ΣΑΣ"), "σασ");
    assert_eq!(to_lower("\u{0130}stanbul"), "istanbul");
    assert_eq!(to_lower("MiXeD"), "mixed");
}

#[test]
fn test_trim_affixes() {
    assert_eq!(trim_prefix("v1.2.3", "v"), "1.2.3");
    assert_eq!(trim_prefix("1.2.3", "v"), "1.2.3");
    assert_eq!(trim_suffix("main.rs.j2", ".j2"), "main.rs");
    assert_eq!(trim_suffix("main.rs", ".j2"), "main.rs");
}

#[test]
fn test_env_and_hostname() {
    let library = FakeSystem::new()
        .with_var("EDITOR", "vim")
        .with_var("HOSTNAME", "build-01")
        .library();
    assert_eq!(library.env("EDITOR"), "vim");
    assert_eq!(library.env("NOT_SET"), "");
    assert_eq!(library.hostname(), "build-01");

    let library = FakeSystem::new().library();
    assert_eq!(library.hostname(), "");
}

#[test]
fn test_username() {
    assert_eq!(FakeSystem::new().library().username(), "Ada Lovelace");
    assert_eq!(FakeSystem::new().without_user().library().username(), "Unknown");
}

#[test]
fn test_host_username_is_never_empty() {
    assert!(!FunctionLibrary::new().username().is_empty());
}

#[test]
fn test_time_uses_clock() {
    let library = FakeSystem::new().library();
    assert_eq!(library.time("2006-01-02 15:04 Z07:00"), "2024-03-09 07:08 +01:00");
    assert_eq!(library.time("no tokens here"), "no tokens here");
}

#[test]
fn test_contains() {
    let library = FakeSystem::new().library();
    assert!(library.contains("camel"));
    assert!(library.contains("formatFilesize"));
    assert!(!library.contains("printf"));
}
