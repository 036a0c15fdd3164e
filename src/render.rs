//! Dashboard page rendering
//!
//! Builds the single dashboard page: a header, the seven tab links and the
//! panel of the selected tab. Read tabs render their listing as a table,
//! write tabs render their form (or the blocking warning of the booking
//! form). Every store failure is rendered inline; nothing here panics.

use chrono::{Duration, NaiveDate};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::desk::{self, DeskError, ListingView, Table, POSTAL_CODE_MAX, POSTAL_CODE_MIN};
use crate::store::HotelStore;

/// One of the seven dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Listing(ListingView),
    NewReservation,
    NewClient,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Listing(ListingView::Hotels)
    }
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Listing(ListingView::Hotels),
        Tab::Listing(ListingView::Clients),
        Tab::Listing(ListingView::Rooms),
        Tab::Listing(ListingView::Reservations),
        Tab::Listing(ListingView::Evaluations),
        Tab::NewReservation,
        Tab::NewClient,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Listing(view) => view.slug(),
            Tab::NewReservation => "new-reservation",
            Tab::NewClient => "new-client",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Listing(view) => view.title(),
            Tab::NewReservation => "New reservation",
            Tab::NewClient => "New client",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Message shown above the active panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice success",
            Notice::Warning(_) => "notice warning",
            Notice::Error(_) => "notice error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }
}

const STYLE: &str = "
body { font-family: 'Open Sans', sans-serif; background: #f4f5f7; margin: 0 2em; color: #1f2533; }
h1 { text-align: center; color: #2E3A59; }
nav a { display: inline-block; padding: 0.5em 1em; color: #2E3A59; text-decoration: none; }
nav a.active { border-bottom: 3px solid #2E3A59; font-weight: bold; }
table { border-collapse: collapse; width: 100%; background: white; }
th, td { border: 1px solid #d5d9e0; padding: 0.4em 0.6em; text-align: left; }
form label { display: block; margin-top: 0.8em; }
button { background: #2E3A59; color: white; border: none; border-radius: 10px; padding: 0.7em 1.4em; margin-top: 1em; }
.notice { padding: 0.8em; border-radius: 6px; margin: 1em 0; }
.success { background: #dff5e1; }
.warning { background: #fff4d6; }
.error { background: #fde2e1; }
";

/// Render the full dashboard page with `active` selected
pub fn dashboard(
    store: &dyn HotelStore,
    active: Tab,
    notice: Option<&Notice>,
    today: NaiveDate,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Hotel Management" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Hotel Management" }
                p {
                    "The store holds hotels, registered clients, rooms with their availability, \
                     reservations and client evaluations."
                }
                nav {
                    @for tab in Tab::ALL {
                        a href=(format!("/?tab={}", tab.slug()))
                            class=[(tab == active).then_some("active")] { (tab.title()) }
                    }
                }
                main {
                    h2 { (active.title()) }
                    @if let Some(notice) = notice {
                        (notice_box(notice))
                    }
                    @match active {
                        Tab::Listing(view) => { (listing_panel(store, view)) }
                        Tab::NewReservation => { (reservation_panel(store, today)) }
                        Tab::NewClient => { (client_panel()) }
                    }
                }
            }
        }
    }
}

fn notice_box(notice: &Notice) -> Markup {
    html! {
        div class=(notice.class()) { (notice.message()) }
    }
}

fn listing_panel(store: &dyn HotelStore, view: ListingView) -> Markup {
    match desk::load(store, view) {
        Ok(listing) => html! {
            (listing_table(&listing.table()))
            p { a href=(format!("/api/v1/{}?format=csv", view.slug())) { "Download CSV" } }
        },
        Err(e) => notice_box(&Notice::Error(e.to_string())),
    }
}

fn listing_table(table: &Table) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
        @if table.is_empty() {
            p { "No rows." }
        }
    }
}

fn reservation_panel(store: &dyn HotelStore, today: NaiveDate) -> Markup {
    let form = match desk::booking_form(store) {
        Ok(form) => form,
        Err(DeskError::MissingPrerequisite(missing)) => {
            return notice_box(&Notice::Warning(missing.to_string()));
        }
        Err(e) => return notice_box(&Notice::Error(e.to_string())),
    };

    let tomorrow = (today + Duration::days(1)).to_string();
    let today = today.to_string();

    html! {
        form method="post" action="/reservations/new" {
            label {
                "Client "
                select name="client_id" required {
                    @for client in &form.clients {
                        option value=(client.id) { (client.full_name) }
                    }
                }
            }
            label {
                "Available room "
                select name="room_id" required {
                    @for room in &form.rooms {
                        option value=(room.id) { (room.number) }
                    }
                }
            }
            label {
                "Arrival date "
                input type="date" name="arrival" min=(today) value=(today) required;
            }
            label {
                "Departure date "
                input type="date" name="departure" min=(tomorrow) value=(tomorrow) required;
            }
            button type="submit" { "Add reservation" }
        }
    }
}

fn client_panel() -> Markup {
    const FIELDS_BEFORE: [(&str, &str, &str); 3] = [
        ("full_name", "Full name", "text"),
        ("address", "Address", "text"),
        ("city", "City", "text"),
    ];
    const FIELDS_AFTER: [(&str, &str, &str); 2] =
        [("email", "Email", "email"), ("phone", "Phone number", "tel")];

    html! {
        form method="post" action="/clients/new" {
            @for (name, label, kind) in FIELDS_BEFORE {
                label { (label) " " input type=(kind) name=(name) required; }
            }
            label {
                "Postal code "
                input type="number" name="postal_code"
                    min=(POSTAL_CODE_MIN) max=(POSTAL_CODE_MAX) value=(POSTAL_CODE_MIN) required;
            }
            @for (name, label, kind) in FIELDS_AFTER {
                label { (label) " " input type=(kind) name=(name) required; }
            }
            button type="submit" { "Add client" }
        }
    }
}
