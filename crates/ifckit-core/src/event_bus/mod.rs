//! # Event Bus Module
//!
//! Publish/subscribe channel the viewer session reports its state
//! transitions through, so UI surfaces can re-render without polling.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ifckit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, ModelEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Model]),
//!     |event| {
//!         if let AppEvent::Model(model) = event {
//!             println!("Model event: {:?}", model);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Model(ModelEvent::LoadStarted {
//!     file: "house.ifc".to_string(),
//! }));
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
