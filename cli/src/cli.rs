use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};

use reposync::core::matcher::{Connector, Term};

pub(crate) fn build_cli() -> Command {
    command!()
        .name("reposync")
        .about("Synchronise the repositories of a github organization locally")
        .arg_required_else_help(true)
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("PATTERN")
                .action(ArgAction::Append)
                .required(true)
                .help("Pattern to match against repository names"),
        )
        .arg(
            Arg::new("or")
                .long("or")
                .action(ArgAction::Count)
                .help("Combine the next name term with OR"),
        )
        .arg(
            Arg::new("and")
                .long("and")
                .action(ArgAction::Count)
                .help("Combine the next name term with AND (default)"),
        )
        .arg(
            Arg::new("org")
                .long("org")
                .value_name("ORG")
                .required(true)
                .help("Github organization to sync"),
        )
        .arg(
            Arg::new("local-dir")
                .long("local-dir")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to clone into [default: current directory]"),
        )
        .arg(
            Arg::new("thread")
                .short('t')
                .long("thread")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .default_value("4")
                .help("Sets the number of threads to be used"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Search but do not sync"),
        )
        .arg(
            Arg::new("archived")
                .long("archived")
                .action(ArgAction::SetTrue)
                .help("Include archived repositories (excluded by default)"),
        )
        .arg(
            Arg::new("fork")
                .long("fork")
                .action(ArgAction::SetTrue)
                .help("Include forks (excluded by default)"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .help("Github auth token"),
        )
        .arg(
            Arg::new("token-file")
                .long("token-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Location of file from which to read the auth token [default: ~/.github-token]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
}

/// rebuild the ordered term list from the argument indices, so that a
/// `--or`/`--and` between two `--name` occurrences sets the connector of
/// the second one
pub(crate) fn parse_terms(matches: &ArgMatches) -> Vec<Term> {
    let Some(values) = matches.get_many::<String>("name") else {
        return Vec::new();
    };
    let indices: Vec<usize> = matches.indices_of("name").unwrap().collect();
    let or_indices = flag_indices(matches, "or");
    let and_indices = flag_indices(matches, "and");

    let mut terms = Vec::new();
    let mut prev = 0;
    for (value, index) in values.zip(indices) {
        let last_or = or_indices.iter().filter(|&&i| prev < i && i < index).max();
        let last_and = and_indices.iter().filter(|&&i| prev < i && i < index).max();

        // the last connector flag before this term wins, default is And
        let connector = match (last_or, last_and) {
            (Some(or), Some(and)) if or > and => Connector::Or,
            (Some(_), None) => Connector::Or,
            _ => Connector::And,
        };

        terms.push(Term::new(value, connector));
        prev = index;
    }
    terms
}

/// occurrence indices of a counted flag, none when the flag was not given
/// (a defaulted count must not contribute a phantom index)
fn flag_indices(matches: &ArgMatches, id: &str) -> Vec<usize> {
    match matches.get_count(id) {
        0 => Vec::new(),
        _ => matches
            .indices_of(id)
            .map(Iterator::collect)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms_from(args: &[&str]) -> Vec<Term> {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        parse_terms(&matches)
    }

    #[test]
    fn default_connector_is_and() {
        let terms = terms_from(&[
            "reposync", "--name", "foo-*", "--name", "*-a", "--org", "acme",
        ]);
        assert_eq!(
            terms,
            vec![
                Term::new("foo-*", Connector::And),
                Term::new("*-a", Connector::And),
            ]
        );
    }

    #[test]
    fn or_applies_to_the_following_term() {
        let terms = terms_from(&[
            "reposync", "--name", "foo-*", "--or", "--name", "*-a", "--org", "acme",
        ]);
        assert_eq!(
            terms,
            vec![
                Term::new("foo-*", Connector::And),
                Term::new("*-a", Connector::Or),
            ]
        );
    }

    #[test]
    fn explicit_and_between_terms() {
        let terms = terms_from(&[
            "reposync", "--name", "foo-*", "--and", "--name", "*-a", "--org", "acme",
        ]);
        assert_eq!(
            terms,
            vec![
                Term::new("foo-*", Connector::And),
                Term::new("*-a", Connector::And),
            ]
        );
    }

    #[test]
    fn connector_only_binds_the_next_term() {
        let terms = terms_from(&[
            "reposync", "--name", "a", "--or", "--name", "b", "--name", "c", "--org", "acme",
        ]);
        assert_eq!(
            terms,
            vec![
                Term::new("a", Connector::And),
                Term::new("b", Connector::Or),
                Term::new("c", Connector::And),
            ]
        );
    }
}
