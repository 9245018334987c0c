//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use cohort_types::{AgeBracket, Category, EduLevel, FavAnimals, FavPlace, Gender};
use std::path::PathBuf;

/// Allowed values of a survey column, for help text
fn choices<C: Category>() -> String {
    let values: Vec<_> = C::ALL.iter().map(|c| format!("'{}'", c.as_str())).collect();
    format!("One of: {}", values.join(", "))
}

fn survey_arg<C: Category>(id: &'static str, long: &'static str, about: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("VALUE")
        .help(about)
        .long_help(format!("{about}. {}", choices::<C>()))
}

/// Build the `cohort` command
#[must_use]
pub fn build() -> Command {
    Command::new("cohort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find your peer group in the welcome survey")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Semicolon-separated survey population"),
        )
        .arg(
            Arg::new("model-dir")
                .long("model-dir")
                .global(true)
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding model artifacts"),
        )
        .arg(
            Arg::new("model-name")
                .long("model-name")
                .global(true)
                .value_name("NAME")
                .help("Model artifact name, without extension"),
        )
        .arg(
            Arg::new("metadata")
                .long("metadata")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Cluster names and descriptions (JSON)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write logs to stderr as JSON"),
        )
        .subcommand(
            Command::new("report")
                .about("Assign a survey answer to its cluster and describe the peer group")
                .arg(survey_arg::<AgeBracket>("age", "age", "Age bracket"))
                .arg(survey_arg::<EduLevel>("edu_level", "edu-level", "Education level"))
                .arg(survey_arg::<FavAnimals>("fav_animals", "fav-animals", "Favorite animals"))
                .arg(survey_arg::<FavPlace>("fav_place", "fav-place", "Favorite place"))
                .arg(survey_arg::<Gender>("gender", "gender", "Gender"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("clusters")
                .about("List every cluster with its population size")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Load model, metadata and population and check they agree")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}
