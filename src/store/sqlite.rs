//! SQLite-backed hotel store
//!
//! One rusqlite connection is opened for the process lifetime and shared
//! behind a mutex. Every call is a short blocking statement; only the
//! booking runs inside a transaction.

use crate::store::schema;
use crate::store::{
    Client, ClientChoice, EvaluationListing, Hotel, HotelStore, NewClient, NewReservation,
    ReservationListing, RoomChoice, RoomListing, RoomStatus, StoreError, StoreResult,
};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Hotel store over a single SQLite connection
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open or create the store file and make sure every table exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        tracing::debug!(path = ?path, "Opened hotel store");
        Self::from_connection(conn, Some(path))
    }

    /// Private in-memory store, used by tests and demos
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        schema::ensure(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Path of the backing file, `None` for an in-memory store
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run a closure against the shared connection
    pub fn with_connection<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Connection) -> StoreResult<T>,
    {
        let mut conn = self.lock()?;
        f(&mut conn)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    fn query_all<T, F>(&self, sql: &str, map: F) -> StoreResult<Vec<T>>
    where
        F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt.query_map([], map)?;
        let items = rows.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(items)
    }
}

impl HotelStore for SqliteStore {
    fn ping(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    fn hotels(&self) -> StoreResult<Vec<Hotel>> {
        self.query_all("SELECT Id_Hotel, Ville FROM Hotel", |row| {
            Ok(Hotel {
                id: row.get(0)?,
                city: row.get(1)?,
            })
        })
    }

    fn clients(&self) -> StoreResult<Vec<Client>> {
        self.query_all(
            "SELECT Id_Client, Nom_complet, Adresse, Ville, Code_postal, Email, Telephone
             FROM Client",
            |row| {
                Ok(Client {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    address: row.get(2)?,
                    city: row.get(3)?,
                    postal_code: row.get(4)?,
                    email: row.get(5)?,
                    phone: row.get(6)?,
                })
            },
        )
    }

    fn rooms(&self) -> StoreResult<Vec<RoomListing>> {
        self.query_all(
            "SELECT Chambre.Id_Chambre, Chambre.Numero, Chambre.Etage, Chambre.Binaire,
                    Hotel.Ville, Type_Chambre.Type, Type_Chambre.Tarif
             FROM Chambre
             JOIN Hotel ON Chambre.Id_Hotel = Hotel.Id_Hotel
             JOIN Type_Chambre ON Chambre.Id_Type = Type_Chambre.Id_Type",
            |row| {
                Ok(RoomListing {
                    id: row.get(0)?,
                    number: row.get(1)?,
                    floor: row.get(2)?,
                    status: RoomStatus::from_flag(row.get(3)?),
                    hotel_city: row.get(4)?,
                    room_type: row.get(5)?,
                    rate: row.get(6)?,
                })
            },
        )
    }

    fn reservations(&self) -> StoreResult<Vec<ReservationListing>> {
        self.query_all(
            "SELECT R.Id_Reservation, C.Nom_complet, R.Date_arrivee, R.Date_depart
             FROM Reservation R
             JOIN Client C ON R.Id_Client = C.Id_Client",
            |row| {
                Ok(ReservationListing {
                    id: row.get(0)?,
                    client_name: row.get(1)?,
                    arrival: row.get(2)?,
                    departure: row.get(3)?,
                })
            },
        )
    }

    fn evaluations(&self) -> StoreResult<Vec<EvaluationListing>> {
        self.query_all(
            "SELECT E.Id_Evaluation, C.Nom_complet, E.Note, E.Commentaire, E.Date_eval
             FROM Evaluation E
             JOIN Client C ON E.Id_Client = C.Id_Client",
            |row| {
                Ok(EvaluationListing {
                    id: row.get(0)?,
                    client_name: row.get(1)?,
                    rating: row.get(2)?,
                    comment: row.get(3)?,
                    date: row.get(4)?,
                })
            },
        )
    }

    fn client_choices(&self) -> StoreResult<Vec<ClientChoice>> {
        self.query_all("SELECT Id_Client, Nom_complet FROM Client", |row| {
            Ok(ClientChoice {
                id: row.get(0)?,
                full_name: row.get(1)?,
            })
        })
    }

    fn available_rooms(&self) -> StoreResult<Vec<RoomChoice>> {
        self.query_all(
            "SELECT Id_Chambre, Numero FROM Chambre WHERE Binaire = 1",
            |row| {
                Ok(RoomChoice {
                    id: row.get(0)?,
                    number: row.get(1)?,
                })
            },
        )
    }

    fn insert_client(&self, client: &NewClient) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO Client (Nom_complet, Adresse, Ville, Code_postal, Email, Telephone)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                client.full_name,
                client.address,
                client.city,
                client.postal_code,
                client.email,
                client.phone
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn book_room(&self, booking: &NewReservation) -> StoreResult<i64> {
        let mut conn = self.lock()?;

        // Dropping the transaction without commit rolls it back
        let tx = conn.transaction()?;

        let client_exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM Client WHERE Id_Client = ?1)",
            params![booking.client_id],
            |row| row.get(0),
        )?;
        if !client_exists {
            return Err(StoreError::ClientNotFound(booking.client_id));
        }

        let flag: Option<i64> = tx
            .query_row(
                "SELECT Binaire FROM Chambre WHERE Id_Chambre = ?1",
                params![booking.room_id],
                |row| row.get(0),
            )
            .optional()?;
        match flag.map(RoomStatus::from_flag) {
            None => return Err(StoreError::RoomNotFound(booking.room_id)),
            Some(RoomStatus::Occupied) => {
                return Err(StoreError::RoomUnavailable(booking.room_id))
            }
            Some(RoomStatus::Available) => {}
        }

        tx.execute(
            "INSERT INTO Reservation (Date_arrivee, Date_depart, Id_Client) VALUES (?1, ?2, ?3)",
            params![booking.arrival, booking.departure, booking.client_id],
        )?;
        let reservation_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO Chambre_Reservation (Id_Chambre, Id_Reservation) VALUES (?1, ?2)",
            params![booking.room_id, reservation_id],
        )?;

        tx.execute(
            "UPDATE Chambre SET Binaire = ?1 WHERE Id_Chambre = ?2",
            params![RoomStatus::Occupied.flag(), booking.room_id],
        )?;

        tx.commit()?;

        Ok(reservation_id)
    }
}
