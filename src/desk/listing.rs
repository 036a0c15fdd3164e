//! Listing views
//!
//! Each view is one fixed query rendered in full: no pagination, no
//! filtering. A [`Listing`] serializes as a JSON array of typed rows and
//! flattens into a [`Table`] for HTML and CSV output.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::desk::error::{DeskError, DeskResult};
use crate::store::{Client, EvaluationListing, Hotel, HotelStore, ReservationListing, RoomListing};

/// The five read-only views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingView {
    Hotels,
    Clients,
    Rooms,
    Reservations,
    Evaluations,
}

impl ListingView {
    pub const ALL: [ListingView; 5] = [
        ListingView::Hotels,
        ListingView::Clients,
        ListingView::Rooms,
        ListingView::Reservations,
        ListingView::Evaluations,
    ];

    /// URL-safe name
    pub fn slug(self) -> &'static str {
        match self {
            ListingView::Hotels => "hotels",
            ListingView::Clients => "clients",
            ListingView::Rooms => "rooms",
            ListingView::Reservations => "reservations",
            ListingView::Evaluations => "evaluations",
        }
    }

    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            ListingView::Hotels => "Hotels",
            ListingView::Clients => "Clients",
            ListingView::Rooms => "Rooms",
            ListingView::Reservations => "Reservations",
            ListingView::Evaluations => "Evaluations",
        }
    }

    /// Column headers, in query order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ListingView::Hotels => &["Id", "City"],
            ListingView::Clients => &[
                "Id",
                "Full name",
                "Address",
                "City",
                "Postal code",
                "Email",
                "Phone",
            ],
            ListingView::Rooms => &["Id", "Number", "Floor", "Status", "Hotel", "Type", "Rate"],
            ListingView::Reservations => &["Id", "Client", "Arrival", "Departure"],
            ListingView::Evaluations => &["Id", "Client", "Rating", "Comment", "Date"],
        }
    }
}

impl fmt::Display for ListingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ListingView {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingView::ALL
            .into_iter()
            .find(|view| view.slug() == s.to_lowercase())
            .ok_or_else(|| {
                DeskError::validation(format!(
                    "Unknown view: {}. Use hotels, clients, rooms, reservations, or evaluations",
                    s
                ))
            })
    }
}

/// Result set of one listing view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Hotels(Vec<Hotel>),
    Clients(Vec<Client>),
    Rooms(Vec<RoomListing>),
    Reservations(Vec<ReservationListing>),
    Evaluations(Vec<EvaluationListing>),
}

/// A listing flattened into display strings
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Listing {
    pub fn view(&self) -> ListingView {
        match self {
            Listing::Hotels(_) => ListingView::Hotels,
            Listing::Clients(_) => ListingView::Clients,
            Listing::Rooms(_) => ListingView::Rooms,
            Listing::Reservations(_) => ListingView::Reservations,
            Listing::Evaluations(_) => ListingView::Evaluations,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Hotels(rows) => rows.len(),
            Listing::Clients(rows) => rows.len(),
            Listing::Rooms(rows) => rows.len(),
            Listing::Reservations(rows) => rows.len(),
            Listing::Evaluations(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn table(&self) -> Table {
        let rows = match self {
            Listing::Hotels(rows) => rows
                .iter()
                .map(|h| vec![h.id.to_string(), h.city.clone()])
                .collect(),
            Listing::Clients(rows) => rows
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.full_name.clone(),
                        c.address.clone(),
                        c.city.clone(),
                        c.postal_code.to_string(),
                        c.email.clone(),
                        c.phone.clone(),
                    ]
                })
                .collect(),
            Listing::Rooms(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.number.to_string(),
                        r.floor.to_string(),
                        r.status.to_string(),
                        r.hotel_city.clone(),
                        r.room_type.clone(),
                        r.rate.to_string(),
                    ]
                })
                .collect(),
            Listing::Reservations(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.client_name.clone(),
                        r.arrival.to_string(),
                        r.departure.to_string(),
                    ]
                })
                .collect(),
            Listing::Evaluations(rows) => rows
                .iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        e.client_name.clone(),
                        e.rating.to_string(),
                        e.comment.clone(),
                        e.date.clone(),
                    ]
                })
                .collect(),
        };

        Table {
            columns: self.view().columns().to_vec(),
            rows,
        }
    }
}

/// Run the fixed query of a view against current store state
pub fn load(store: &dyn HotelStore, view: ListingView) -> DeskResult<Listing> {
    let listing = match view {
        ListingView::Hotels => Listing::Hotels(store.hotels()?),
        ListingView::Clients => Listing::Clients(store.clients()?),
        ListingView::Rooms => Listing::Rooms(store.rooms()?),
        ListingView::Reservations => Listing::Reservations(store.reservations()?),
        ListingView::Evaluations => Listing::Evaluations(store.evaluations()?),
    };

    tracing::debug!(view = %view, rows = listing.len(), "Loaded listing");
    Ok(listing)
}

/// Write a table as CSV, header first
pub fn to_csv(table: &Table) -> DeskResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&table.columns)
        .map_err(|e| DeskError::Export(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| DeskError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DeskError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DeskError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed_demo, HotelStore, NewClient, SqliteStore};

    #[test]
    fn test_view_slug_round_trip() {
        for view in ListingView::ALL {
            assert_eq!(view.slug().parse::<ListingView>().unwrap(), view);
        }
        assert_eq!("ROOMS".parse::<ListingView>().unwrap(), ListingView::Rooms);
        assert!("bookings".parse::<ListingView>().is_err());
    }

    #[test]
    fn test_table_width_matches_columns() {
        let store = SqliteStore::in_memory().unwrap();
        seed_demo(&store).unwrap();

        for view in ListingView::ALL {
            let table = load(&store, view).unwrap().table();
            assert_eq!(table.columns, view.columns());
            for row in &table.rows {
                assert_eq!(row.len(), table.columns.len(), "view {}", view);
            }
        }
    }

    #[test]
    fn test_new_row_shows_on_next_load() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(load(&store, ListingView::Clients).unwrap().is_empty());

        store
            .insert_client(&NewClient {
                full_name: "Chloé Petit".to_string(),
                address: "5 quai Rambaud".to_string(),
                city: "Lyon".to_string(),
                postal_code: 69002,
                email: "chloe@example.com".to_string(),
                phone: "0478000000".to_string(),
            })
            .unwrap();

        let listing = load(&store, ListingView::Clients).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.table().rows[0][1], "Chloé Petit");
    }

    #[test]
    fn test_rooms_table_status_label() {
        let store = SqliteStore::in_memory().unwrap();
        seed_demo(&store).unwrap();

        let table = load(&store, ListingView::Rooms).unwrap().table();

        assert!(table.rows.iter().all(|row| row[3] == "Available"));
    }

    #[test]
    fn test_rooms_table_keeps_stored_rate() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .with_connection(|conn| {
                conn.execute_batch(
                    "INSERT INTO Hotel (Id_Hotel, Ville) VALUES (1, 'Paris');
                     INSERT INTO Type_Chambre (Id_Type, Type, Tarif) VALUES (1, 'Single', 89.999);
                     INSERT INTO Chambre (Id_Chambre, Numero, Etage, Binaire, Id_Hotel, Id_Type)
                     VALUES (1, 101, 1, 1, 1, 1);",
                )?;
                Ok(())
            })
            .unwrap();

        let table = load(&store, ListingView::Rooms).unwrap().table();

        assert_eq!(table.rows[0][6], "89.999");
        assert!(to_csv(&table).unwrap().contains(",89.999\n"));
    }

    #[test]
    fn test_csv_quotes_fields() {
        let table = Table {
            columns: vec!["Id", "Comment"],
            rows: vec![vec!["1".to_string(), "Clean, quiet".to_string()]],
        };

        let csv = to_csv(&table).unwrap();

        assert_eq!(csv, "Id,Comment\n1,\"Clean, quiet\"\n");
    }

    #[test]
    fn test_listing_serializes_as_array() {
        let store = SqliteStore::in_memory().unwrap();
        seed_demo(&store).unwrap();

        let listing = load(&store, ListingView::Hotels).unwrap();
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json[0]["city"], "Paris");
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}
