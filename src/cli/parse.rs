use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &'static str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(ParseError::MissingValue(flag))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-S" | "--strength" => flags.strength = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                flags.length = Some(value(args, &mut i, "--length")?.to_string());
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i, "--number")?;
                flags.number = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "--seed" => {
                let raw = value(args, &mut i, "--seed")?;
                flags.seed = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "-s" | "--symbols" => {
                flags.symbols = true;
                // Optional value; sets starting with '-' need --symbols=CHARS
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.custom_symbols = Some(args[i].clone());
                }
            }
            arg if arg.starts_with("--symbols=") => {
                flags.symbols = true;
                flags.custom_symbols = Some(arg["--symbols=".len()..].to_string());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("clearpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_values_and_switches() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--no-upper", "-S", "--seed", "7"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("20"));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.seed, Some(7));
        assert!(flags.no_upper && flags.strength);
        assert!(!flags.no_lower);
    }

    #[test]
    fn length_stays_raw() {
        let flags = parse(&args(&["--length", "abc"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("abc"));
    }

    #[test]
    fn symbols_value_is_optional() {
        let flags = parse(&args(&["-s", "-q"])).unwrap();
        assert!(flags.symbols && flags.quiet);
        assert_eq!(flags.custom_symbols, None);

        let flags = parse(&args(&["-s", "#$%"])).unwrap();
        assert_eq!(flags.custom_symbols.as_deref(), Some("#$%"));

        let flags = parse(&args(&["--symbols=-_+"])).unwrap();
        assert_eq!(flags.custom_symbols.as_deref(), Some("-_+"));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert_eq!(
            parse(&args(&["-n", "many"])),
            Err(ParseError::InvalidNumber("many".into()))
        );
        assert_eq!(parse(&args(&["-l"])), Err(ParseError::MissingValue("--length")));
    }
}
