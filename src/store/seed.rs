//! Demo fixture
//!
//! Fills an empty store with a few hotels, rooms, a client and a review so
//! the dashboard can be tried without an existing `hotel.db`.

use crate::store::{SqliteStore, StoreResult};
use rusqlite::params;

/// Rows inserted by [`seed_demo`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub hotels: usize,
    pub room_types: usize,
    pub rooms: usize,
    pub clients: usize,
    pub evaluations: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == SeedSummary::default()
    }
}

const HOTELS: &[(i64, &str)] = &[(1, "Paris"), (2, "Lyon")];

const ROOM_TYPES: &[(i64, &str, f64)] = &[(1, "Single", 75.0), (2, "Double", 120.0), (3, "Suite", 240.0)];

/// (id, number, floor, hotel, type)
const ROOMS: &[(i64, i64, i64, i64, i64)] = &[
    (1, 101, 1, 1, 1),
    (2, 102, 1, 1, 2),
    (3, 201, 2, 1, 3),
    (4, 101, 1, 2, 1),
    (5, 102, 1, 2, 2),
];

/// Seed the demo fixture
///
/// Does nothing when the store already holds a hotel, so an existing data
/// file is never mixed with demo rows.
pub fn seed_demo(store: &SqliteStore) -> StoreResult<SeedSummary> {
    store.with_connection(|conn| {
        let hotels: i64 = conn.query_row("SELECT COUNT(*) FROM Hotel", [], |row| row.get(0))?;
        if hotels > 0 {
            tracing::info!(hotels, "Store already populated, skipping demo seed");
            return Ok(SeedSummary::default());
        }

        let tx = conn.transaction()?;
        let mut summary = SeedSummary::default();

        for (id, city) in HOTELS {
            tx.execute(
                "INSERT INTO Hotel (Id_Hotel, Ville) VALUES (?1, ?2)",
                params![id, city],
            )?;
            summary.hotels += 1;
        }

        for (id, label, rate) in ROOM_TYPES {
            tx.execute(
                "INSERT INTO Type_Chambre (Id_Type, Type, Tarif) VALUES (?1, ?2, ?3)",
                params![id, label, rate],
            )?;
            summary.room_types += 1;
        }

        for (id, number, floor, hotel, kind) in ROOMS {
            tx.execute(
                "INSERT INTO Chambre (Id_Chambre, Numero, Etage, Binaire, Id_Hotel, Id_Type)
                 VALUES (?1, ?2, ?3, 1, ?4, ?5)",
                params![id, number, floor, hotel, kind],
            )?;
            summary.rooms += 1;
        }

        tx.execute(
            "INSERT INTO Client (Nom_complet, Adresse, Ville, Code_postal, Email, Telephone)
             VALUES ('Alice Martin', '12 rue des Lilas', 'Paris', 75011,
                     'alice.martin@example.com', '0601020304')",
            [],
        )?;
        let client_id = tx.last_insert_rowid();
        summary.clients += 1;

        tx.execute(
            "INSERT INTO Evaluation (Date_eval, Note, Commentaire, Id_Client)
             VALUES ('2024-05-20', 5, 'Quiet room, friendly staff', ?1)",
            params![client_id],
        )?;
        summary.evaluations += 1;

        tx.commit()?;

        tracing::info!(
            hotels = summary.hotels,
            rooms = summary.rooms,
            clients = summary.clients,
            "Seeded demo data"
        );
        Ok(summary)
    })
}
