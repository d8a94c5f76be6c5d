use super::*;
use const_format::concatcp;

/// Raised when a table name is not part of the fixed schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown table {0:?}")]
pub struct Lookup(pub String);

/// The eleven tables of the music-store schema.
///
/// Each variant carries its DDL as a `&'static str`: primary keys only,
/// no foreign keys, indexes or check constraints. Names are matched
/// exactly, including case, because every identifier is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Album,
    Artist,
    Customer,
    Employee,
    Genre,
    Invoice,
    InvoiceLine,
    MediaType,
    Playlist,
    PlaylistTrack,
    Track,
}

impl Table {
    pub const fn all() -> [Self; 11] {
        [
            Self::Album,
            Self::Artist,
            Self::Customer,
            Self::Employee,
            Self::Genre,
            Self::Invoice,
            Self::InvoiceLine,
            Self::MediaType,
            Self::Playlist,
            Self::PlaylistTrack,
            Self::Track,
        ]
    }
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => ALBUM,
            Self::Artist => ARTIST,
            Self::Customer => CUSTOMER,
            Self::Employee => EMPLOYEE,
            Self::Genre => GENRE,
            Self::Invoice => INVOICE,
            Self::InvoiceLine => INVOICE_LINE,
            Self::MediaType => MEDIA_TYPE,
            Self::Playlist => PLAYLIST,
            Self::PlaylistTrack => PLAYLIST_TRACK,
            Self::Track => TRACK,
        }
    }
    /// Declared primary-key columns, in key order.
    pub const fn primary(self) -> &'static [&'static str] {
        match self {
            Self::Album => &["AlbumId"],
            Self::Artist => &["ArtistId"],
            Self::Customer => &["CustomerId"],
            Self::Employee => &["EmployeeId"],
            Self::Genre => &["GenreId"],
            Self::Invoice => &["InvoiceId"],
            Self::InvoiceLine => &["InvoiceLineId"],
            Self::MediaType => &["MediaTypeId"],
            Self::Playlist => &["PlaylistId"],
            Self::PlaylistTrack => &["PlaylistId", "TrackId"],
            Self::Track => &["TrackId"],
        }
    }
    /// The staging twin used by select-copy loads.
    pub fn replica(self) -> Replica {
        Replica::from(self)
    }
    #[rustfmt::skip]
    pub fn ddl(self) -> &'static str {
        match self {
            Self::Album => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", ALBUM, "\"
(
    \"AlbumId\" INT NOT NULL,
    \"Title\" VARCHAR(160) NOT NULL,
    \"ArtistId\" INT NOT NULL,
    CONSTRAINT \"PK_Album\" PRIMARY KEY  (\"AlbumId\")
);"
            ),
            Self::Artist => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", ARTIST, "\"
(
    \"ArtistId\" INT NOT NULL,
    \"Name\" VARCHAR(120),
    CONSTRAINT \"PK_Artist\" PRIMARY KEY  (\"ArtistId\")
);"
            ),
            Self::Customer => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", CUSTOMER, "\"
(
    \"CustomerId\" INT NOT NULL,
    \"FirstName\" VARCHAR(40) NOT NULL,
    \"LastName\" VARCHAR(20) NOT NULL,
    \"Company\" VARCHAR(80),
    \"Address\" VARCHAR(70),
    \"City\" VARCHAR(40),
    \"State\" VARCHAR(40),
    \"Country\" VARCHAR(40),
    \"PostalCode\" VARCHAR(10),
    \"Phone\" VARCHAR(24),
    \"Fax\" VARCHAR(24),
    \"Email\" VARCHAR(60) NOT NULL,
    \"SupportRepId\" INT,
    CONSTRAINT \"PK_Customer\" PRIMARY KEY  (\"CustomerId\")
);"
            ),
            Self::Employee => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", EMPLOYEE, "\"
(
    \"EmployeeId\" INT NOT NULL,
    \"LastName\" VARCHAR(20) NOT NULL,
    \"FirstName\" VARCHAR(20) NOT NULL,
    \"Title\" VARCHAR(30),
    \"ReportsTo\" INT,
    \"BirthDate\" TIMESTAMP,
    \"HireDate\" TIMESTAMP,
    \"Address\" VARCHAR(70),
    \"City\" VARCHAR(40),
    \"State\" VARCHAR(40),
    \"Country\" VARCHAR(40),
    \"PostalCode\" VARCHAR(10),
    \"Phone\" VARCHAR(24),
    \"Fax\" VARCHAR(24),
    \"Email\" VARCHAR(60),
    CONSTRAINT \"PK_Employee\" PRIMARY KEY  (\"EmployeeId\")
);"
            ),
            Self::Genre => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", GENRE, "\"
(
    \"GenreId\" INT NOT NULL,
    \"Name\" VARCHAR(120),
    CONSTRAINT \"PK_Genre\" PRIMARY KEY  (\"GenreId\")
);"
            ),
            Self::Invoice => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", INVOICE, "\"
(
    \"InvoiceId\" INT NOT NULL,
    \"CustomerId\" INT NOT NULL,
    \"InvoiceDate\" TIMESTAMP NOT NULL,
    \"BillingAddress\" VARCHAR(70),
    \"BillingCity\" VARCHAR(40),
    \"BillingState\" VARCHAR(40),
    \"BillingCountry\" VARCHAR(40),
    \"BillingPostalCode\" VARCHAR(10),
    \"Total\" NUMERIC(10,2) NOT NULL,
    CONSTRAINT \"PK_Invoice\" PRIMARY KEY  (\"InvoiceId\")
);"
            ),
            Self::InvoiceLine => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", INVOICE_LINE, "\"
(
    \"InvoiceLineId\" INT NOT NULL,
    \"InvoiceId\" INT NOT NULL,
    \"TrackId\" INT NOT NULL,
    \"UnitPrice\" NUMERIC(10,2) NOT NULL,
    \"Quantity\" INT NOT NULL,
    CONSTRAINT \"PK_InvoiceLine\" PRIMARY KEY  (\"InvoiceLineId\")
);"
            ),
            Self::MediaType => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", MEDIA_TYPE, "\"
(
    \"MediaTypeId\" INT NOT NULL,
    \"Name\" VARCHAR(120),
    CONSTRAINT \"PK_MediaType\" PRIMARY KEY  (\"MediaTypeId\")
);"
            ),
            Self::Playlist => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", PLAYLIST, "\"
(
    \"PlaylistId\" INT NOT NULL,
    \"Name\" VARCHAR(120),
    CONSTRAINT \"PK_Playlist\" PRIMARY KEY  (\"PlaylistId\")
);"
            ),
            Self::PlaylistTrack => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", PLAYLIST_TRACK, "\"
(
    \"PlaylistId\" INT NOT NULL,
    \"TrackId\" INT NOT NULL,
    CONSTRAINT \"PK_PlaylistTrack\" PRIMARY KEY  (\"PlaylistId\", \"TrackId\")
);"
            ),
            Self::Track => concatcp!(
                "CREATE TABLE IF NOT EXISTS \"", TRACK, "\"
(
    \"TrackId\" INT NOT NULL,
    \"Name\" VARCHAR(200) NOT NULL,
    \"AlbumId\" INT,
    \"MediaTypeId\" INT NOT NULL,
    \"GenreId\" INT,
    \"Composer\" VARCHAR(220),
    \"Milliseconds\" INT NOT NULL,
    \"Bytes\" INT,
    \"UnitPrice\" NUMERIC(10,2) NOT NULL,
    CONSTRAINT \"PK_Track\" PRIMARY KEY  (\"TrackId\")
);"
            ),
        }
    }
}

impl Schema for Table {
    fn name(&self) -> String {
        self.as_str().to_string()
    }
    fn creates(&self) -> String {
        self.ddl().to_string()
    }
}

impl std::str::FromStr for Table {
    type Err = Lookup;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Lookup(s.to_string()))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_resolves_by_name() {
        for table in Table::all() {
            assert_eq!(table.as_str().parse::<Table>(), Ok(table));
        }
    }

    #[test]
    fn ddl_names_table_and_primary_key() {
        for table in Table::all() {
            let ddl = table.ddl();
            let key = table
                .primary()
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", ");
            assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS "));
            assert!(ddl.contains(&format!("\"{}\"\n(", table)), "{}", ddl);
            assert!(ddl.contains(&format!("CONSTRAINT \"PK_{}\"", table)), "{}", ddl);
            assert!(ddl.contains(&format!("PRIMARY KEY  ({})", key)), "{}", ddl);
        }
    }

    #[test]
    fn ddl_declares_no_foreign_keys() {
        for table in Table::all() {
            assert!(!table.ddl().contains("REFERENCES"));
            assert!(!table.ddl().contains("FOREIGN KEY"));
        }
    }

    #[test]
    fn composite_key_for_playlist_track() {
        assert_eq!(Table::PlaylistTrack.primary(), &["PlaylistId", "TrackId"]);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "Tracks".parse::<Table>(),
            Err(Lookup("Tracks".to_string()))
        );
        assert!("genre".parse::<Table>().is_err());
        assert!("".parse::<Table>().is_err());
    }

    #[test]
    fn statements_quote_and_qualify() {
        assert_eq!(Table::Genre.qualified(), "public.\"Genre\"");
        assert_eq!(
            Table::InvoiceLine.truncates(),
            "TRUNCATE TABLE public.\"InvoiceLine\" CASCADE"
        );
        assert_eq!(
            Table::Track.copy(),
            "COPY public.\"Track\" FROM STDIN WITH (FORMAT text, DELIMITER ',')"
        );
        assert_eq!(
            Table::Artist.counts(),
            "SELECT COUNT(*) FROM public.\"Artist\""
        );
    }
}
