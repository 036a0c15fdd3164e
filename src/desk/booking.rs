//! Reservation booking workflow
//!
//! Books an existing, available room for an existing client:
//!
//! 1. [`booking_form`] loads the client and available room choices, or
//!    reports which one is missing.
//! 2. [`BookingRequest::validate`] checks the dates against today.
//! 3. [`book`] runs the store transaction (reservation, room link, room
//!    flag) and returns the new reservation id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::desk::error::{DeskError, DeskResult, Prerequisite};
use crate::store::{ClientChoice, HotelStore, NewReservation, RoomChoice};

/// Choices offered by the booking form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingForm {
    pub clients: Vec<ClientChoice>,
    pub rooms: Vec<RoomChoice>,
}

/// Load the booking form choices
///
/// Fails with [`DeskError::MissingPrerequisite`] when there is no client
/// or no available room; clients are checked first.
pub fn booking_form(store: &dyn HotelStore) -> DeskResult<BookingForm> {
    let clients = store.client_choices()?;
    if clients.is_empty() {
        return Err(DeskError::MissingPrerequisite(Prerequisite::Clients));
    }

    let rooms = store.available_rooms()?;
    if rooms.is_empty() {
        return Err(DeskError::MissingPrerequisite(Prerequisite::AvailableRooms));
    }

    Ok(BookingForm { clients, rooms })
}

/// A submitted booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub client_id: i64,
    pub room_id: i64,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

impl BookingRequest {
    /// Check the dates: arrival not before `today`, departure strictly
    /// after arrival
    pub fn validate(&self, today: NaiveDate) -> DeskResult<NewReservation> {
        if self.arrival < today {
            return Err(DeskError::validation(format!(
                "Arrival date {} is in the past",
                self.arrival
            )));
        }

        if self.departure <= self.arrival {
            return Err(DeskError::validation(
                "Departure date must be after the arrival date",
            ));
        }

        Ok(NewReservation {
            client_id: self.client_id,
            room_id: self.room_id,
            arrival: self.arrival,
            departure: self.departure,
        })
    }
}

/// Outcome of a successful booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingReceipt {
    pub reservation_id: i64,
    pub client_id: i64,
    pub room_id: i64,
    pub nights: i64,
}

/// Validate and book
///
/// Invalid dates are rejected before the store is touched. Store failures
/// come back as [`DeskError::Storage`] with nothing applied; the workflow
/// does not retry.
pub fn book(
    store: &dyn HotelStore,
    request: &BookingRequest,
    today: NaiveDate,
) -> DeskResult<BookingReceipt> {
    let reservation = request.validate(today)?;

    let reservation_id = store.book_room(&reservation).map_err(|e| {
        tracing::warn!(
            client_id = reservation.client_id,
            room_id = reservation.room_id,
            error = %e,
            "Booking abandoned"
        );
        e
    })?;

    tracing::info!(
        reservation_id,
        client_id = reservation.client_id,
        room_id = reservation.room_id,
        arrival = %reservation.arrival,
        departure = %reservation.departure,
        "Reservation created"
    );

    Ok(BookingReceipt {
        reservation_id,
        client_id: reservation.client_id,
        room_id: reservation.room_id,
        nights: (reservation.departure - reservation.arrival).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        Client, EvaluationListing, Hotel, NewClient, ReservationListing, RoomListing,
        SqliteStore, StoreResult,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Store that fails the test on any access
    struct UntouchableStore;

    impl HotelStore for UntouchableStore {
        fn ping(&self) -> StoreResult<()> {
            unreachable!("store accessed")
        }
        fn hotels(&self) -> StoreResult<Vec<Hotel>> {
            unreachable!("store accessed")
        }
        fn clients(&self) -> StoreResult<Vec<Client>> {
            unreachable!("store accessed")
        }
        fn rooms(&self) -> StoreResult<Vec<RoomListing>> {
            unreachable!("store accessed")
        }
        fn reservations(&self) -> StoreResult<Vec<ReservationListing>> {
            unreachable!("store accessed")
        }
        fn evaluations(&self) -> StoreResult<Vec<EvaluationListing>> {
            unreachable!("store accessed")
        }
        fn client_choices(&self) -> StoreResult<Vec<ClientChoice>> {
            unreachable!("store accessed")
        }
        fn available_rooms(&self) -> StoreResult<Vec<RoomChoice>> {
            unreachable!("store accessed")
        }
        fn insert_client(&self, _client: &NewClient) -> StoreResult<i64> {
            unreachable!("store accessed")
        }
        fn book_room(&self, _booking: &NewReservation) -> StoreResult<i64> {
            unreachable!("store accessed")
        }
    }

    /// clients = {"Alice Martin": 1}, rooms = {"101": 5 (available)}
    fn alice_and_room_101() -> SqliteStore {
        let store = SqliteStore::in_memory().unwrap();
        store
            .with_connection(|conn| {
                conn.execute_batch(
                    "INSERT INTO Hotel (Id_Hotel, Ville) VALUES (1, 'Paris');
                     INSERT INTO Type_Chambre (Id_Type, Type, Tarif) VALUES (1, 'Double', 120.0);
                     INSERT INTO Chambre (Id_Chambre, Numero, Etage, Binaire, Id_Hotel, Id_Type)
                         VALUES (5, 101, 1, 1, 1, 1);
                     INSERT INTO Client (Id_Client, Nom_complet, Adresse, Ville, Code_postal, Email, Telephone)
                         VALUES (1, 'Alice Martin', '1 rue de la Paix', 'Paris', 75002,
                                 'alice@example.com', '0102030405');",
                )?;
                Ok(())
            })
            .unwrap();
        store
    }

    #[test]
    fn test_scenario_booking_succeeds() {
        let store = alice_and_room_101();
        let request = BookingRequest {
            client_id: 1,
            room_id: 5,
            arrival: date(2024, 6, 1),
            departure: date(2024, 6, 3),
        };

        let receipt = book(&store, &request, date(2024, 5, 30)).unwrap();

        assert!(receipt.reservation_id > 0);
        assert_eq!(receipt.room_id, 5);
        assert_eq!(receipt.nights, 2);

        let rooms = store.rooms().unwrap();
        assert!(!rooms[0].status.is_available());
        assert_eq!(store.reservations().unwrap()[0].id, receipt.reservation_id);
    }

    #[test]
    fn test_scenario_reversed_dates_rejected_without_storage() {
        let request = BookingRequest {
            client_id: 1,
            room_id: 5,
            arrival: date(2024, 6, 5),
            departure: date(2024, 6, 1),
        };

        let err = book(&UntouchableStore, &request, date(2024, 6, 1)).unwrap_err();

        assert!(matches!(err, DeskError::Validation(_)));
    }

    #[test]
    fn test_same_day_departure_rejected_without_storage() {
        for offset in 0..3 {
            let arrival = date(2024, 6, 10);
            let request = BookingRequest {
                client_id: 1,
                room_id: 5,
                arrival,
                departure: arrival - chrono::Duration::days(offset),
            };

            let err = book(&UntouchableStore, &request, date(2024, 6, 1)).unwrap_err();
            assert!(matches!(err, DeskError::Validation(_)));
        }
    }

    #[test]
    fn test_arrival_in_past_rejected() {
        let request = BookingRequest {
            client_id: 1,
            room_id: 5,
            arrival: date(2024, 6, 1),
            departure: date(2024, 6, 3),
        };

        let err = request.validate(date(2024, 6, 2)).unwrap_err();
        assert!(err.to_string().contains("in the past"));

        // Arriving today is allowed
        assert!(request.validate(date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn test_scenario_no_clients_blocks_form() {
        let store = SqliteStore::in_memory().unwrap();

        let err = booking_form(&store).unwrap_err();

        assert!(matches!(
            err,
            DeskError::MissingPrerequisite(Prerequisite::Clients)
        ));
    }

    #[test]
    fn test_no_available_room_blocks_form() {
        let store = alice_and_room_101();
        store
            .with_connection(|conn| {
                conn.execute("UPDATE Chambre SET Binaire = 0", [])?;
                Ok(())
            })
            .unwrap();

        let err = booking_form(&store).unwrap_err();

        assert!(matches!(
            err,
            DeskError::MissingPrerequisite(Prerequisite::AvailableRooms)
        ));
    }

    #[test]
    fn test_booking_form_choices() {
        let store = alice_and_room_101();

        let form = booking_form(&store).unwrap();

        assert_eq!(
            form.clients,
            vec![ClientChoice {
                id: 1,
                full_name: "Alice Martin".to_string()
            }]
        );
        assert_eq!(form.rooms, vec![RoomChoice { id: 5, number: 101 }]);
    }

    #[test]
    fn test_second_booking_of_same_room_fails() {
        let store = alice_and_room_101();
        let request = BookingRequest {
            client_id: 1,
            room_id: 5,
            arrival: date(2024, 6, 1),
            departure: date(2024, 6, 3),
        };
        let today = date(2024, 5, 1);

        book(&store, &request, today).unwrap();
        let err = book(&store, &request, today).unwrap_err();

        assert!(matches!(err, DeskError::Storage(_)));
        assert_eq!(store.reservations().unwrap().len(), 1);
    }
}
