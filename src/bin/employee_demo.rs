use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};

use staffdb::{
    config::Config,
    db::Database,
    demo::{self, DEFAULT_DELETE_USERNAME, DEFAULT_READ_USERNAME, DEFAULT_UPDATE_PASSWORD, DEFAULT_UPDATE_USERNAME},
};

fn username_arg(default: &'static str) -> Arg {
    Arg::new("username")
        .help("Username to match (first matching record only)")
        .long("username")
        .short('u')
        .value_name("NAME")
        .default_value(default)
}

fn cli() -> Command {
    Command::new("employee_demo")
        .about("Run a single CRUD operation against the employee collection")
        .subcommand_required(true)
        .subcommand(Command::new("create").about("Insert the sample employee records"))
        .subcommand(
            Command::new("read")
                .about("Print the first employee with the given username")
                .arg(username_arg(DEFAULT_READ_USERNAME)),
        )
        .subcommand(
            Command::new("update")
                .about("Set the password of the first employee with the given username")
                .arg(username_arg(DEFAULT_UPDATE_USERNAME))
                .arg(
                    Arg::new("password")
                        .help("New numeric password")
                        .long("password")
                        .short('p')
                        .value_name("NUMBER")
                        .value_parser(value_parser!(i64))
                        .default_value("2222"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete the first employee with the given username")
                .arg(username_arg(DEFAULT_DELETE_USERNAME)),
        )
}

fn username(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("username")
        .map(String::as_str)
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let matches = cli().get_matches();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    println!("Connected to MongoDB!");

    let result = run(&db, &matches).await;
    db.close().await;
    result
}

async fn run(db: &Database, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("create", _)) => {
            println!("\nCREATE: inserting sample employees");
            let ids = demo::create(db).await?;
            for id in ids {
                println!("Inserted {}", id);
            }
        }
        Some(("read", sub)) => {
            let name = username(sub);
            println!("\nREAD: looking up {}", name);
            let employee = demo::read(db, name).await?;
            println!("{}", demo::describe(&employee));
        }
        Some(("update", sub)) => {
            let name = username(sub);
            let password = sub
                .get_one::<i64>("password")
                .copied()
                .unwrap_or(DEFAULT_UPDATE_PASSWORD);
            println!("\nUPDATE: set password of {} to {}", name, password);
            let report = demo::update(db, name, password).await?;
            println!("{}", report);
        }
        Some(("delete", sub)) => {
            let name = username(sub);
            println!("\nDELETE: removing {}", name);
            let deleted = demo::delete(db, name).await?;
            println!("Deleted documents: {}", deleted);
        }
        _ => unreachable!("subcommand_required is set"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_update_defaults() {
        let matches = cli().try_get_matches_from(["employee_demo", "update"]).unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "update");
        assert_eq!(username(sub), DEFAULT_UPDATE_USERNAME);
        assert_eq!(sub.get_one::<i64>("password").copied(), Some(DEFAULT_UPDATE_PASSWORD));
    }

    #[test]
    fn test_read_with_username() {
        let matches = cli()
            .try_get_matches_from(["employee_demo", "read", "--username", "Kong"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(username(sub), "Kong");
    }

    #[test]
    fn test_rejects_non_numeric_password() {
        let result = cli().try_get_matches_from(["employee_demo", "update", "-p", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(cli().try_get_matches_from(["employee_demo"]).is_err());
    }
}
