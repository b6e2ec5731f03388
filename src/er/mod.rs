//! Entity-relationship diagram model
//!
//! Accumulates the entities, attributes, and relationships an ER diagram
//! declares. A grammar collaborator feeds the database while walking source
//! like:
//!
//! ```text
//! erDiagram
//!     CUSTOMER ||--o{ ORDER : places
//!     ORDER ||--|{ LINE-ITEM : contains
//!     CUSTOMER {
//!         string name
//!         string custNumber PK
//!     }
//! ```
//!
//! and a layout/rendering collaborator reads the result back through the
//! accessors.

mod config;
mod database;

pub use config::{ErConfig, LayoutDirection};
pub use database::{
    Attribute, AttributeKey, Cardinality, CardinalitySpec, Entity, ErDatabase, Identification,
    RelSpec, Relationship,
};
