// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end behavior of whole formatting calls: parser, resolver, renderers and
//! containers working together.

use serial_test::serial;

use crate::{AnsiCodes, Arg, Format, FormatContext, FormatError, FormatErrorKind,
            FormatOptions, IndexingMode, ToValue, Value, sprint, sprint_with};

fn error_of(result: Result<String, FormatError>) -> (FormatErrorKind, usize) {
    let error = result.unwrap_err();
    (error.kind, error.position)
}

mod alignment {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_alignment() {
        assert_eq!(sprint!("{0:<4}", 42).unwrap(), "42  ");
        assert_eq!(sprint!("{0:>4}", 42).unwrap(), "  42");
        assert_eq!(sprint!("{0:^5}", 42).unwrap(), " 42  ");
        assert_eq!(sprint!("{0:=5}", -42).unwrap(), "-  42");
        assert_eq!(sprint!("{0:*>4}", 42).unwrap(), "**42");
    }

    #[test]
    fn test_defaults_depend_on_kind() {
        assert_eq!(sprint!("[{:5}]", 7).unwrap(), "[    7]");
        assert_eq!(sprint!("[{:5}]", "ab").unwrap(), "[ab   ]");
        assert_eq!(sprint!("[{:5}]", 'c').unwrap(), "[c    ]");
        assert_eq!(sprint!("[{:5}]", 1.5).unwrap(), "[  1.5]");
        assert_eq!(sprint!("[{:6}]", true).unwrap(), "[true  ]");
    }

    #[test]
    fn test_multibyte_fill_and_content() {
        assert_eq!(sprint!("{:é^7}", "ñ").unwrap(), "éééñééé");
        assert_eq!(sprint!("{:>4}", "日本").unwrap(), "  日本");
    }

    #[test]
    fn test_zero_flag() {
        assert_eq!(sprint!("{:05}", -42).unwrap(), "-0042");
        assert_eq!(sprint!("{:#06x}", 255).unwrap(), "0x00ff");
        assert_eq!(sprint!("{:08.3f}", -1.5).unwrap(), "-001.500");
        assert_eq!(sprint!("{:<05}", 42).unwrap(), "42   ");
    }

    #[test]
    fn test_width_never_truncates() {
        assert_eq!(sprint!("{:2}", 12345).unwrap(), "12345");
        assert_eq!(sprint!("{:2}", "hello").unwrap(), "hello");
    }

    /// Output is exactly `max(width, content)` code points wide for every alignment.
    #[test]
    fn test_width_invariant() {
        let values = [
            Value::Int(-42),
            Value::UInt(7),
            Value::F64(3.25),
            Value::Str("héllo"),
            Value::CodePoint('é'),
            Value::Bool(false),
        ];
        for value in values {
            let args = [Arg::positional(value)];
            let content = sprint("{}", &args).unwrap().chars().count();
            for align in ['<', '>', '^'] {
                for width in 1..12 {
                    let format_string = format!("{{:·{align}{width}}}");
                    let output = sprint(&format_string, &args).unwrap();
                    assert_eq!(output.chars().count(), content.max(width), "{format_string}");
                }
            }
        }
    }
}

mod integers {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_sign_rules() {
        assert_eq!(sprint!("{0:+}", 42).unwrap(), "+42");
        assert_eq!(sprint!("{0: }", 42).unwrap(), " 42");
        assert_eq!(sprint!("{0:-}", -42).unwrap(), "-42");
        assert_eq!(
            error_of(sprint!("{0:+}", 42_u32)),
            (FormatErrorKind::RequiresSignedIntegerArgument, 3)
        );
    }

    #[test_case("{:b}",  10_i64,  "1010")]
    #[test_case("{:#b}", 10_i64,  "0b1010")]
    #[test_case("{:#B}", 10_i64,  "0B1010")]
    #[test_case("{:o}",  8_i64,   "10")]
    #[test_case("{:#o}", 8_i64,   "010")]
    #[test_case("{:#o}", 0_i64,   "0")]
    #[test_case("{:x}",  -255_i64, "-ff")]
    #[test_case("{:#X}", 255_i64, "0XFF")]
    #[test_case("{:n}",  -1_234_567_i64, "-1,234,567")]
    #[test_case("{:d}",  i64::MIN, "-9223372036854775808")]
    fn test_bases(format_string: &str, value: i64, expected: &str) {
        assert_eq!(sprint!(format_string, value).unwrap(), expected);
    }

    /// Rendering in a base and parsing back in that base is the identity.
    #[test]
    fn test_round_trip_through_every_base() {
        let samples = [0_u64, 1, 7, 8, 9, 10, 15, 16, 255, 256, 1 << 31, u64::MAX - 1, u64::MAX];
        for (ty, radix) in [('b', 2), ('o', 8), ('d', 10), ('x', 16), ('X', 16)] {
            let format_string = format!("{{:{ty}}}");
            for value in samples {
                let text = sprint!(&format_string, value).unwrap();
                assert_eq!(u64::from_str_radix(&text, radix).unwrap(), value, "{ty} {text}");
            }
        }
    }

    #[test]
    fn test_code_points() {
        assert_eq!(sprint!("{:c}", 65).unwrap(), "A");
        assert_eq!(sprint!("{:d}", 'A').unwrap(), "65");
        assert_eq!(sprint!("{:x}", 'é').unwrap(), "e9");
        assert_eq!(
            error_of(sprint!("{:c}", 0xD800)),
            (FormatErrorKind::InvalidCodePoint, 2)
        );
    }

    #[test]
    fn test_bools() {
        assert_eq!(sprint!("{}", true).unwrap(), "true");
        assert_eq!(sprint!("{:d}", true).unwrap(), "1");
        assert_eq!(sprint!("{:s}", false).unwrap(), "false");
    }

    #[test]
    fn test_precision_rejected() {
        assert_eq!(
            error_of(sprint!("{:.2d}", 1)),
            (FormatErrorKind::PrecisionNotAllowedForIntegerType, 2)
        );
    }
}

mod floats {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rounding_and_shortest() {
        assert_eq!(sprint!("{:.3f}", 0.0005).unwrap(), "0.001");
        assert_eq!(sprint!("{}", 0.1).unwrap(), "0.1");
        assert_eq!(sprint!("{}", 0.1_f32).unwrap(), "0.1");
        assert_eq!(sprint!("{}", 1e100).unwrap(), "1e+100");
        assert_eq!(sprint!("{:#.0f}", 0.5).unwrap(), "1.");
        assert_eq!(sprint!("{:#.0f}", 0.2).unwrap(), "0.");
    }

    #[test]
    fn test_percent() {
        assert_eq!(sprint!("{:%}", 0.125).unwrap(), "12.500000%");
        assert_eq!(sprint!("{:.1%}", 0.5).unwrap(), "50.0%");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(sprint!("{}", f64::NAN).unwrap(), "nan");
        assert_eq!(sprint!("{:+}", f64::INFINITY).unwrap(), "+inf");
        assert_eq!(sprint!("{:E}", f64::NEG_INFINITY).unwrap(), "-INF");
        assert_eq!(sprint!("{:%}", f64::INFINITY).unwrap(), "inf%");
        assert_eq!(sprint!("{:06}", f64::INFINITY).unwrap(), "   inf");
    }

    #[test]
    fn test_uppercase_general() {
        assert_eq!(sprint!("{:G}", 1e20).unwrap(), "1E+20");
        assert_eq!(sprint!("{:G}", 1e-7).unwrap(), "1E-07");
        assert_eq!(sprint!("{:E}", 1e20).unwrap(), "1E+20");
        assert_eq!(sprint!("{:g}", 1e20).unwrap(), "1e+20");
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(sprint!("{}", -0.0).unwrap(), "-0.0");
        assert_eq!(sprint!("{:+.1f}", 0.0).unwrap(), "+0.0");
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            error_of(sprint!("{:d}", 1.5)),
            (FormatErrorKind::InvalidTypeSpecifierForFloat, 2)
        );
    }
}

mod dynamic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dynamic_precision_and_width() {
        assert_eq!(sprint!("{0:.{1}}", 1.2345, 2).unwrap(), "1.2");
        assert_eq!(sprint!("{:{}.{}f}", 9.87654, 8, 3).unwrap(), "   9.877");
        assert_eq!(sprint!("{0:>{w}}", "x", w = 3).unwrap(), "  x");
    }

    #[test]
    fn test_mixed_indexing() {
        assert_eq!(
            error_of(sprint!("{}{1}", 1, 2)),
            (
                FormatErrorKind::MixedIndexingMode {
                    from: IndexingMode::Automatic,
                    to: IndexingMode::Manual,
                },
                3
            )
        );
        assert_eq!(
            error_of(sprint!("{0:.{}}", 1.5, 2)),
            (
                FormatErrorKind::MixedIndexingMode {
                    from: IndexingMode::Manual,
                    to: IndexingMode::Automatic,
                },
                5
            )
        );
    }

    #[test]
    fn test_dynamic_errors() {
        assert_eq!(
            error_of(sprint!("{0:{1}}", 1, -3)),
            (FormatErrorKind::NegativeWidth, 3)
        );
        assert_eq!(
            error_of(sprint!("{0:.{1}}", 1.0, "two")),
            (FormatErrorKind::PrecisionNotInteger, 3)
        );
    }
}

mod named {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_arguments() {
        assert_eq!(
            sprint!("{greet}, {who}! {greet}", greet = "hi", who = "bob").unwrap(),
            "hi, bob! hi"
        );
        assert_eq!(
            error_of(sprint!("{nope}", nope_not = 1)),
            (FormatErrorKind::ArgumentNameNotFound { name: "nope".into() }, 1)
        );
    }

    #[test]
    fn test_names_mix_with_either_indexing() {
        assert_eq!(sprint!("{} {x} {}", 1, 2, x = 3).unwrap(), "1 3 2");
        assert_eq!(sprint!("{1} {x} {0}", 1, 2, x = 3).unwrap(), "2 3 1");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_unterminated_spec_position() {
        let error = sprint!("{0:+", 'x').unwrap_err();
        assert_eq!(error.message(), "\"}\" expected");
        assert_eq!(error.position, 4);
    }

    #[test]
    fn test_syntax_errors_win_over_semantic_ones() {
        assert_eq!(
            error_of(sprint!("{0:d", "text")),
            (FormatErrorKind::MissingClosingBrace, 4)
        );
    }

    #[test_case("{0:s}",  (FormatErrorKind::InvalidTypeSpecifierForInteger, 3))]
    #[test_case("{0x}",   (FormatErrorKind::UnexpectedCharacter, 2))]
    #[test_case("{0:.}",  (FormatErrorKind::MissingPrecision, 4))]
    #[test_case("{0:{<}", (FormatErrorKind::InvalidFillCharacter, 3))]
    #[test_case("{1}",    (FormatErrorKind::ArgumentIndexOutOfRange, 1))]
    #[test_case("{0:99999999999}", (FormatErrorKind::WidthTooLarge, 3))]
    fn test_error_kinds(format_string: &str, expected: (FormatErrorKind, usize)) {
        assert_eq!(error_of(sprint!(format_string, 1)), expected);
    }

    #[test]
    fn test_errors_are_diagnostics() {
        let error = sprint!("ab {:q}", 1).unwrap_err();
        let report = miette::Report::new(error);
        assert_eq!(report.to_string(), "Invalid type specifier for an integer");
    }
}

mod colors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_color() {
        assert_eq!(sprint!("{!BLUE}").unwrap(), "\x1b[38;2;000;000;255m");
        assert_eq!(sprint!("{!blue;BG}").unwrap(), "\x1b[48;2;000;000;255m");
        assert_eq!(sprint!("{!}").unwrap(), "\x1b[0m");
    }

    #[test]
    fn test_color_with_emphasis() {
        assert_eq!(sprint!("{!BLUE;B}").unwrap(), "\x1b[38;2;000;000;255m\x1b[1m");
        assert_eq!(sprint!("{!BU}").unwrap(), "\x1b[1m\x1b[4m");
    }

    #[test]
    fn test_rgb_and_terminal_colors() {
        assert_eq!(sprint!("{!1;2;3}").unwrap(), "\x1b[38;2;001;002;003m");
        assert_eq!(sprint!("{!tRED}").unwrap(), "\x1b[31m");
        assert_eq!(sprint!("{!tBRIGHT_BLUE;BG}").unwrap(), "\x1b[104m");
    }

    #[test]
    fn test_color_errors() {
        assert_eq!(
            error_of(sprint!("{!256;0;0}")),
            (FormatErrorKind::ChannelValueOutOfRange, 2)
        );
        assert_eq!(
            error_of(sprint!("{!BLUE;X}")),
            (FormatErrorKind::InvalidEmphasisCharacter, 7)
        );
        assert_eq!(
            error_of(sprint!("{!NOT_A_COLOR}")),
            (FormatErrorKind::InvalidColorName, 2)
        );
    }

    #[test]
    fn test_color_clause_on_value() {
        assert_eq!(
            sprint!("{0:>4!RED}", 42).unwrap(),
            "\x1b[38;2;255;000;000m  42\x1b[0m"
        );
    }

    #[test]
    fn test_disabled_colors_still_validate() {
        let options = FormatOptions::default().with_ansi(AnsiCodes::Never);
        let args = [Arg::positional(Value::Int(42))];
        assert_eq!(sprint_with("{!RED}{0:>4!B}{!}", &args, &options).unwrap(), "  42");
        assert_eq!(
            sprint_with("{!NOPE}", &[], &options).unwrap_err().kind,
            FormatErrorKind::InvalidColorName
        );
    }

    #[serial]
    #[test]
    fn test_detect_respects_no_color() {
        // SAFETY: serialized with every other test that touches the environment.
        unsafe { std::env::set_var("NO_COLOR", "1") };
        let options = FormatOptions::default()
            .with_ansi(AnsiCodes::Detect(runfmt_ansi_color::Stream::Stdout));
        let output = sprint_with("{!RED}x", &[], &options);
        // SAFETY: as above.
        unsafe { std::env::remove_var("NO_COLOR") };
        assert_eq!(output.unwrap(), "x");
    }
}

mod containers {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Mixed;

    impl Format for Mixed {
        fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
            f.fmt_dict().entry(&"a", &1_i32).entry(&"b", &"x").finish()
        }
    }

    impl ToValue for Mixed {
        fn to_value(&self) -> Value<'_> { Value::Custom(self) }
    }

    struct Deep(u32);

    impl Format for Deep {
        fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
            if self.0 == 0 {
                return f.fmt_tuple("Leaf").finish();
            }
            f.fmt_tuple("Deep").field(&Deep(self.0 - 1)).finish()
        }
    }

    impl ToValue for Deep {
        fn to_value(&self) -> Value<'_> { Value::Custom(self) }
    }

    struct Player {
        id: u32,
        name: &'static str,
        scores: Vec<f64>,
    }

    impl Format for Player {
        fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
            f.fmt_struct("Player")
                .field("id", &self.id)
                .field("name", &self.name)
                .field("scores", &self.scores)
                .finish()
        }
    }

    impl ToValue for Player {
        fn to_value(&self) -> Value<'_> { Value::Custom(self) }
    }

    #[test]
    fn test_integer_spec_skips_string_entries() {
        assert_eq!(sprint!("{:d}", Mixed).unwrap(), "{ a: 1, b: x }");
        assert_eq!(sprint!("{:3d}", Mixed).unwrap(), "{ a:   1, b: x }");
    }

    #[test]
    fn test_float_spec_reaches_nested_list() {
        let player = Player {
            id: 7,
            name: "ada",
            scores: vec![1.0, 2.5],
        };
        assert_eq!(
            sprint!("{:.1f}", player).unwrap(),
            "Player { id: 7, name: ada, scores: [1.0, 2.5] }"
        );
    }

    #[test]
    fn test_pretty_from_alternate_flag() {
        let player = Player {
            id: 7,
            name: "ada",
            scores: vec![1.5],
        };
        let expected = "Player {\n    id: 7,\n    name: ada,\n    scores: [\n        1.5\n    ]\n}";
        assert_eq!(sprint!("{:#}", player).unwrap(), expected);
    }

    #[test]
    fn test_indent_size_option() {
        let options = FormatOptions::default().with_indent_size(2);
        let scores = vec![1_i32, 2];
        let args = [Arg::positional(scores.to_value())];
        assert_eq!(sprint_with("{:#}", &args, &options).unwrap(), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_depth_guard() {
        assert_eq!(sprint!("{}", Deep(2)).unwrap(), "Deep(Deep(Leaf()))");

        let options = FormatOptions::default().with_max_depth(3);
        let shallow = Deep(2);
        let args = [Arg::positional(shallow.to_value())];
        assert_eq!(sprint_with("{}", &args, &options).unwrap(), "Deep(Deep(Leaf()))");

        let deep = Deep(5);
        let args = [Arg::positional(deep.to_value())];
        let error = sprint_with("x{}", &args, &options).unwrap_err();
        assert_eq!(error.kind, FormatErrorKind::RecursionLimitExceeded { max_depth: 3 });
        assert_eq!(error.position, 1);
    }
}
