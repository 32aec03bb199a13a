//! Admin API client for the Medan Gaming backend.
//!
//! Inventory records (consoles, rooms, units, games, FNB, promos, FAQs) share
//! one generic CRUD client, [`ResourceClient`]. Bookings and dashboard
//! analytics have dedicated calls on [`AdminClient`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mge_admin::{AdminClient, forms::FaqForm};
//! use mge_config::load_config;
//!
//! async fn add_faq() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let admin = AdminClient::from_config(&config.api)?;
//!     let faq = admin
//!         .faqs()
//!         .create(&FaqForm {
//!             question: "Boleh bawa stik sendiri?".to_string(),
//!             answer: "Boleh.".to_string(),
//!             order: None,
//!         })
//!         .await?;
//!     println!("created faq {}", faq.id);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod bookings;
pub mod client;
pub mod forms;
pub mod resources;

pub use analytics::{DashboardStats, StatsPeriod};
pub use bookings::{BookingFilter, OtsBookingRequest};
pub use client::AdminClient;
pub use resources::{AdminResource, ResourceClient};
