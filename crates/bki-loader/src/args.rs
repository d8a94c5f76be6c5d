use crate::*;
use bki_core::DEFAULT_BATCH;
use bki_core::DEFAULT_PORT;
use bki_pg::Table;
use clap::Parser;
use std::path::PathBuf;
use tokio_postgres::Config;

/// Command line arguments, in the order the operator types them.
#[derive(Debug, Parser)]
#[command(
    name = "loader",
    about = "Load the data from a .csv file into its respective table",
    after_help = "Example:\n  loader localhost Chinook <user> <password> csv_output/synth-0000.csv Track Single_Inserts"
)]
pub struct Args {
    /// host name (database)
    pub host: String,
    /// name of the database
    pub dbname: String,
    /// user name (database)
    pub user: String,
    /// password (database)
    pub password: String,
    /// name/path of the file
    pub file: PathBuf,
    /// name of the table
    pub table: String,
    /// type of insert to perform: Single_Inserts, SQL_Batch_Insert, PostgreSQL_COPY or INSERT_SELECT
    pub insert_type: String,
    /// batch size for SQL_Batch_Insert
    #[arg(default_value_t = DEFAULT_BATCH, allow_negative_numbers = true)]
    pub batch_size: i64,
    /// port the database listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Args {
    pub fn from_args() -> Self {
        Self::parse()
    }
}

/// A fully resolved load: where to connect, what to read, where to put it.
#[derive(Debug)]
pub struct Request {
    pub config: Config,
    pub file: PathBuf,
    pub table: Table,
    pub operation: Operation,
}

impl TryFrom<Args> for Request {
    type Error = LoadError;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let table = args.table.parse::<Table>()?;
        let operation = Operation::parse(&args.insert_type, args.batch_size)?;
        let mut config = Config::new();
        config
            .host(args.host.as_str())
            .port(args.port)
            .dbname(args.dbname.as_str())
            .user(args.user.as_str())
            .password(args.password.as_str());
        Ok(Self {
            config,
            file: args.file,
            table,
            operation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bki_pg::Lookup;

    fn args(tail: &[&str]) -> Result<Args, clap::Error> {
        let head = ["loader", "localhost", "chinook", "postgres", "secret"];
        Args::try_parse_from(head.iter().chain(tail.iter()).copied())
    }

    #[test]
    fn positional_order() {
        let args = args(&["synth.csv", "Track", "Single_Inserts"]).unwrap();
        assert_eq!(args.host, "localhost");
        assert_eq!(args.dbname, "chinook");
        assert_eq!(args.user, "postgres");
        assert_eq!(args.password, "secret");
        assert_eq!(args.file, PathBuf::from("synth.csv"));
        assert_eq!(args.table, "Track");
        assert_eq!(args.insert_type, "Single_Inserts");
    }

    #[test]
    fn batch_size_defaults_to_sentinel() {
        let args = args(&["synth.csv", "Track", "SQL_Batch_Insert"]).unwrap();
        assert_eq!(args.batch_size, -1);
        assert_eq!(args.port, 5432);
    }

    #[test]
    fn batch_size_and_port() {
        let args = args(&["--port", "6543", "synth.csv", "Track", "SQL_Batch_Insert", "250"])
            .unwrap();
        assert_eq!(args.batch_size, 250);
        assert_eq!(args.port, 6543);
    }

    #[test]
    fn negative_batch_size_is_accepted() {
        let args = args(&["synth.csv", "Track", "SQL_Batch_Insert", "-4"]).unwrap();
        assert_eq!(args.batch_size, -4);
    }

    #[test]
    fn missing_positionals_are_rejected() {
        assert!(args(&["synth.csv", "Track"]).is_err());
    }

    #[test]
    fn unknown_table_fails_before_connecting() {
        let args = args(&["synth.csv", "Tracks", "Single_Inserts"]).unwrap();
        match Request::try_from(args) {
            Err(LoadError::Lookup(Lookup(name))) => assert_eq!(name, "Tracks"),
            other => panic!("expected lookup error, got {:?}", other),
        }
    }

    #[test]
    fn request_carries_connection_settings() {
        let args = args(&["--port", "6543", "synth.csv", "Genre", "PostgreSQL_COPY"]).unwrap();
        let request = Request::try_from(args).unwrap();
        assert_eq!(request.table, Table::Genre);
        assert_eq!(request.operation, Operation::Copy);
        assert_eq!(request.config.get_dbname(), Some("chinook"));
        assert_eq!(request.config.get_user(), Some("postgres"));
        assert_eq!(request.config.get_password(), Some(&b"secret"[..]));
        assert_eq!(request.config.get_ports(), &[6543u16]);
    }

    #[test]
    fn unknown_insert_type_is_not_an_error() {
        let args = args(&["synth.csv", "Genre", "UPSERT"]).unwrap();
        let request = Request::try_from(args).unwrap();
        assert_eq!(request.operation, Operation::Unknown("UPSERT".to_string()));
    }
}
