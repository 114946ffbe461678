use anyhow::{Context, Result};
use textcheck::class::ClassRule;
use textcheck::format::FormatKind;
use textcheck::ident::{IdConfig, IdGenerator};
use textcheck::utils::*;
use tracing_subscriber::EnvFilter;

const CHECKS: [&str; 14] = [
    "email",
    "url",
    "phone",
    "area",
    "numeric",
    "alphabet",
    "alpha-space",
    "alnum",
    "alnum-must",
    "alnum-space",
    "alnum-space-must",
    "latin",
    "camel",
    "id",
];

/// Filter behind a value check, `None` for the entries that are not one.
fn filter_for(check: &str) -> Option<Sanitize> {
    let filter = match check {
        "email" => Sanitize::Format(FormatKind::Email),
        "url" => Sanitize::Format(FormatKind::Url),
        "phone" => Sanitize::Format(FormatKind::Phone),
        "area" => Sanitize::Format(FormatKind::PhoneArea),
        "numeric" => Sanitize::Class(ClassRule::Numeric),
        "alphabet" => Sanitize::Class(ClassRule::Alphabet),
        "alpha-space" => Sanitize::Class(ClassRule::AlphabetWithSpace),
        "alnum" => Sanitize::Class(ClassRule::Alphanumeric { must: false }),
        "alnum-must" => Sanitize::Class(ClassRule::Alphanumeric { must: true }),
        "alnum-space" => Sanitize::Class(ClassRule::AlphanumericWithSpace { must: false }),
        "alnum-space-must" => Sanitize::Class(ClassRule::AlphanumericWithSpace { must: true }),
        "latin" => Sanitize::Class(ClassRule::LatinOnly),
        _ => return None,
    };
    Some(filter)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = IdConfig::from_path(&path)
                .with_context(|| format!("loading id config from {path}"))?;
            tracing::info!(%path, length = config.length, "id config loaded");
            config
        }
        None => IdConfig::default(),
    };
    let ids = IdGenerator::from_entropy();

    println!("--------------------------------------------------------------");
    println!("                   TEXTCHECK  interactive                     ");
    println!("--------------------------------------------------------------");

    let mut options: Vec<String> = CHECKS.iter().map(|c| c.to_string()).collect();
    options.push("quit".to_string());

    loop {
        let choice = Terminal::ask(
            &format!("Choose a check ({}):", options.join("/")),
            &[Sanitize::MatchStringsIgnoreCase(options.clone())],
        )?
        .answer
        .to_lowercase();
        tracing::debug!(check = %choice, "running check");

        match choice.as_str() {
            "quit" => break,
            "id" => println!("{}", ids.issue(&config)),
            "camel" => {
                let input = Terminal::ask("Camel-cased name:", &[Sanitize::MaxLength(256)])?;
                println!("{}", textcheck::camel_to_lower_case(&input.answer));
            }
            check => {
                let Some(filter) = filter_for(check) else {
                    continue;
                };
                let input = Terminal::ask("Value:", &[])?;
                match Sanitize::execute(&input.answer, &[filter]) {
                    Ok(value) => println!("valid: {value}"),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_every_value_check_has_a_filter() {
        for check in CHECKS {
            match check {
                "camel" | "id" => assert_eq!(filter_for(check), None),
                _ => assert!(filter_for(check).is_some(), "{check}"),
            }
        }
        assert_eq!(filter_for("quit"), None);
    }

    #[test]
    fn test_cli_must_modes_reach_the_scanners() {
        let must = filter_for("alnum-must").unwrap();
        assert!(Sanitize::execute("abc123", &[must.clone()]).is_ok());
        assert!(Sanitize::execute("abc", &[must]).is_err());

        let spaced = filter_for("alnum-space-must").unwrap();
        assert!(Sanitize::execute("abc 123", &[spaced.clone()]).is_ok());
        assert!(Sanitize::execute("abc def", &[spaced]).is_err());

        let alpha = filter_for("alpha-space").unwrap();
        assert!(Sanitize::execute("hello world", &[alpha.clone()]).is_ok());
        assert!(Sanitize::execute("hello 42", &[alpha]).is_err());
    }
}
