//! Table layout of `hotel.db`
//!
//! Table and column names follow the existing data file so that it can be
//! opened as-is. Every statement is `IF NOT EXISTS`: an existing file is
//! left untouched, an empty one becomes a usable store.

use rusqlite::Connection;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Hotel (
    Id_Hotel INTEGER PRIMARY KEY,
    Ville TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Client (
    Id_Client INTEGER PRIMARY KEY AUTOINCREMENT,
    Nom_complet TEXT NOT NULL,
    Adresse TEXT NOT NULL,
    Ville TEXT NOT NULL,
    Code_postal INTEGER NOT NULL,
    Email TEXT NOT NULL,
    Telephone TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Type_Chambre (
    Id_Type INTEGER PRIMARY KEY,
    Type TEXT NOT NULL,
    Tarif REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS Chambre (
    Id_Chambre INTEGER PRIMARY KEY,
    Numero INTEGER NOT NULL,
    Etage INTEGER NOT NULL,
    Binaire INTEGER NOT NULL DEFAULT 1,
    Id_Hotel INTEGER NOT NULL REFERENCES Hotel(Id_Hotel),
    Id_Type INTEGER NOT NULL REFERENCES Type_Chambre(Id_Type)
);

CREATE TABLE IF NOT EXISTS Reservation (
    Id_Reservation INTEGER PRIMARY KEY AUTOINCREMENT,
    Date_arrivee TEXT NOT NULL,
    Date_depart TEXT NOT NULL,
    Id_Client INTEGER NOT NULL REFERENCES Client(Id_Client)
);

CREATE TABLE IF NOT EXISTS Chambre_Reservation (
    Id_Chambre INTEGER NOT NULL REFERENCES Chambre(Id_Chambre),
    Id_Reservation INTEGER NOT NULL REFERENCES Reservation(Id_Reservation),
    PRIMARY KEY (Id_Chambre, Id_Reservation)
);

CREATE TABLE IF NOT EXISTS Evaluation (
    Id_Evaluation INTEGER PRIMARY KEY,
    Date_eval TEXT NOT NULL,
    Note INTEGER NOT NULL,
    Commentaire TEXT NOT NULL,
    Id_Client INTEGER NOT NULL REFERENCES Client(Id_Client)
);
";

/// Create any missing table
pub fn ensure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
