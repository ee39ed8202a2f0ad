use ktest::{FormatRegistry, KtestErrorKind, PrintFormat};
use std::collections::HashSet;

// Should map every known name to its documented flag
#[test]
fn resolve_then_flag() {
    let chars = FormatRegistry::resolve("chars");
    assert_eq!(chars, Some(PrintFormat::Chars));
    assert_eq!(FormatRegistry::flag_for(chars), "-A");

    let hex = FormatRegistry::resolve("hex");
    assert_eq!(hex, Some(PrintFormat::Hex));
    assert_eq!(FormatRegistry::flag_for(hex), "-X");
}

// Should not guess a format for names the registry does not know
#[test]
fn resolve_unknown_name() {
    assert_eq!(FormatRegistry::resolve("octal"), None);
    assert_eq!(FormatRegistry::resolve(""), None);
    assert_eq!(FormatRegistry::resolve("Chars"), None);
    assert_eq!(FormatRegistry::resolve(" hex"), None);
}

#[test]
fn default_format_has_no_flag() {
    assert_eq!(FormatRegistry::flag_for(None), "");
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = PrintFormat::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), PrintFormat::ALL.len());

    for format in PrintFormat::ALL.iter() {
        assert_eq!(FormatRegistry::resolve(format.name()), Some(*format));
    }
}

#[test]
fn parse_from_str() {
    assert_eq!("hex".parse::<PrintFormat>().unwrap(), PrintFormat::Hex);
    assert_eq!(PrintFormat::Chars.to_string(), "chars");

    let err = "binary".parse::<PrintFormat>().unwrap_err();
    assert_eq!(err.kind(), KtestErrorKind::UnknownFormat);
}
